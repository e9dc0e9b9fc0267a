use newsdesk::{
    transport::TransportReqwest, ApiEnvelope, ArticlePage, ArticleStatus, CrawlSummary,
    NewsDeskClientBuilder,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut transport = TransportReqwest::new();
    if let Ok(origin) = env::var("NEWSDESK_ORIGIN") {
        transport.set_hostname(origin);
    }

    let client = NewsDeskClientBuilder::with_transport(transport)
        .with_request_timeout(30_000)
        .build()?;

    // pull the latest headlines
    let crawl: ApiEnvelope<CrawlSummary> = client.crawl_news().execute().await?.json()?;
    println!(
        "crawl: {} ({} new)",
        crawl.message.unwrap_or_default(),
        crawl.data.map(|summary| summary.count).unwrap_or_default()
    );

    // translate everything which has only been crawled so far
    let page: ApiEnvelope<ArticlePage> = client
        .list_articles()
        .status(ArticleStatus::Crawled)
        .page_size(5)
        .execute()
        .await?
        .json()?;

    for article in page.data.map(|page| page.list).unwrap_or_default() {
        println!("translating #{}: {}", article.id, article.title_en);
        client.fetch_and_translate(article.id).execute().await?;
        client.polish(article.id).execute().await?;
    }

    // raw query parameters are forwarded as they are
    let response = client
        .list_articles()
        .query("keyword", "economy")
        .query("page", 1)
        .execute()
        .await?;
    println!("search: {}", String::from_utf8_lossy(&response.body.unwrap_or_default()));

    Ok(())
}
