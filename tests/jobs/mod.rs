use cucumber::when;

use crate::common::NewsDeskWorld;

#[when("I crawl news")]
async fn i_crawl_news(world: &mut NewsDeskWorld) {
    world.last_result = Some(world.get_client().await.crawl_news().execute().await);
}

#[when(regex = r"^I (fetch content of|translate|fetch and translate|polish) article '(.*)'$")]
async fn i_trigger_article_job(world: &mut NewsDeskWorld, job: String, article_id: String) {
    let client = world.get_client().await;
    let request = match job.as_str() {
        "fetch content of" => client.fetch_content(article_id),
        "translate" => client.translate(article_id),
        "fetch and translate" => client.fetch_and_translate(article_id),
        "polish" => client.polish(article_id),
        _ => unreachable!("Unknown job: {job}"),
    };

    world.last_result = Some(request.execute().await);
}
