use newsdesk::{
    transport::reqwest::blocking::TransportReqwest, ApiEnvelope, Article, NewsDeskClientBuilder,
};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let article_id = env::args().nth(1).unwrap_or_else(|| "1".into());

    let mut transport = TransportReqwest::new();
    if let Ok(origin) = env::var("NEWSDESK_ORIGIN") {
        transport.set_hostname(origin);
    }

    let client = NewsDeskClientBuilder::with_blocking_transport(transport).build()?;

    client.translate(&article_id).execute_blocking()?;

    let article: ApiEnvelope<Article> = client
        .get_article(&article_id)
        .execute_blocking()?
        .json()?;

    match article.into_data() {
        Some(article) => println!(
            "{}\n{}",
            article.title_zh.unwrap_or(article.title_en),
            article.content_zh.unwrap_or_default()
        ),
        None => println!("article {article_id} is not available"),
    }

    Ok(())
}
