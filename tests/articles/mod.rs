use cucumber::when;

use crate::common::NewsDeskWorld;

#[when("I list articles")]
async fn i_list_articles(world: &mut NewsDeskWorld) {
    world.last_result = Some(world.get_client().await.list_articles().execute().await);
}

#[when(expr = "I list articles with {word} set to {string}")]
async fn i_list_articles_with(world: &mut NewsDeskWorld, key: String, value: String) {
    world.last_result = Some(
        world
            .get_client()
            .await
            .list_articles()
            .query(key, value)
            .execute()
            .await,
    );
}

#[when(expr = "I get article {string}")]
async fn i_get_article(world: &mut NewsDeskWorld, article_id: String) {
    world.last_result = Some(
        world
            .get_client()
            .await
            .get_article(article_id)
            .execute()
            .await,
    );
}
