//! Jobs module.
//!
//! Triggers for the long running backend jobs: crawling, content fetching,
//! translation and polishing. Every trigger is a bodiless `POST` which
//! returns as soon as the backend acknowledges it.

#[doc(inline)]
pub use types::{CrawlSummary, Job};
pub mod types;

#[doc(inline)]
pub use builders::TriggerJobRequestBuilder;
pub mod builders;

use crate::dx::newsdesk_client::NewsDeskClientInstance;

impl<T> NewsDeskClientInstance<T> {
    /// Create a trigger request builder for any [`Job`].
    ///
    /// Instance of [`TriggerJobRequestBuilder`] is returned.
    pub fn trigger(&self, job: Job) -> TriggerJobRequestBuilder<T> {
        TriggerJobRequestBuilder {
            newsdesk_client: Some(self.clone()),
            job: Some(job),
        }
    }

    /// Create a crawl request builder.
    /// This method is used to crawl the news source for new articles.
    ///
    /// Instance of [`TriggerJobRequestBuilder`] is returned.
    ///
    /// # Example
    /// ```no_run
    /// use newsdesk::{ApiEnvelope, CrawlSummary, NewsDeskClientBuilder};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = NewsDeskClientBuilder::with_reqwest_transport().build()?;
    ///
    /// let envelope: ApiEnvelope<CrawlSummary> = client.crawl_news().execute().await?.json()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn crawl_news(&self) -> TriggerJobRequestBuilder<T> {
        self.trigger(Job::Crawl)
    }

    /// Create a fetch content request builder.
    /// This method is used to download the original article content.
    ///
    /// Instance of [`TriggerJobRequestBuilder`] is returned.
    pub fn fetch_content<I>(&self, article_id: I) -> TriggerJobRequestBuilder<T>
    where
        I: ToString,
    {
        self.trigger(Job::FetchContent(article_id.to_string()))
    }

    /// Create a translate request builder.
    /// This method is used to translate an article.
    ///
    /// Instance of [`TriggerJobRequestBuilder`] is returned.
    ///
    /// # Example
    /// ```no_run
    /// use newsdesk::NewsDeskClientBuilder;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = NewsDeskClientBuilder::with_reqwest_transport().build()?;
    ///
    /// client.translate(7).execute().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn translate<I>(&self, article_id: I) -> TriggerJobRequestBuilder<T>
    where
        I: ToString,
    {
        self.trigger(Job::Translate(article_id.to_string()))
    }

    /// Create a fetch and translate request builder.
    ///
    /// Instance of [`TriggerJobRequestBuilder`] is returned.
    pub fn fetch_and_translate<I>(&self, article_id: I) -> TriggerJobRequestBuilder<T>
    where
        I: ToString,
    {
        self.trigger(Job::FetchAndTranslate(article_id.to_string()))
    }

    /// Create a polish request builder.
    /// This method is used to polish a translated article.
    ///
    /// Instance of [`TriggerJobRequestBuilder`] is returned.
    pub fn polish<I>(&self, article_id: I) -> TriggerJobRequestBuilder<T>
    where
        I: ToString,
    {
        self.trigger(Job::Polish(article_id.to_string()))
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{
        core::{NewsDeskError, Transport, TransportMethod, TransportRequest, TransportResponse},
        dx::newsdesk_client::{NewsDeskClientBuilder, NewsDeskGenericClient},
    };
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    #[derive(Default, Debug, Clone)]
    struct RecordingTransport {
        requests: Arc<Mutex<Vec<TransportRequest>>>,
    }

    impl RecordingTransport {
        fn requests(&self) -> Vec<TransportRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: TransportRequest) -> Result<TransportResponse, NewsDeskError> {
            self.requests.lock().unwrap().push(request);
            Ok(TransportResponse {
                status: 200,
                body: Some(b"{\"code\":0,\"message\":\"ok\"}".to_vec()),
                ..Default::default()
            })
        }
    }

    struct FailingTransport;

    #[async_trait::async_trait]
    impl Transport for FailingTransport {
        async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, NewsDeskError> {
            Err(NewsDeskError::Transport {
                details: "Request failed with status code 500".into(),
                response: Some(Box::new(TransportResponse {
                    status: 500,
                    ..Default::default()
                })),
            })
        }
    }

    fn client() -> (NewsDeskGenericClient<RecordingTransport>, RecordingTransport) {
        let transport = RecordingTransport::default();
        let client = NewsDeskClientBuilder::with_transport(transport.clone())
            .build()
            .unwrap();
        (client, transport)
    }

    #[tokio::test]
    async fn post_job_triggers_without_body() {
        let (client, transport) = client();

        client.crawl_news().execute().await.unwrap();
        client.fetch_content("7").execute().await.unwrap();
        client.translate("7").execute().await.unwrap();
        client.fetch_and_translate("7").execute().await.unwrap();
        client.polish("7").execute().await.unwrap();

        let requests = transport.requests();
        let paths: Vec<&str> = requests.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/api/crawl",
                "/api/articles/7/fetch",
                "/api/articles/7/translate",
                "/api/articles/7/fetch-and-translate",
                "/api/articles/7/polish",
            ]
        );
        for request in requests {
            assert_eq!(request.method, TransportMethod::Post);
            assert!(request.query_parameters.is_empty());
            assert_eq!(request.body, None);
            assert_eq!(request.timeout, 60_000);
        }
    }

    #[test_case(Job::Crawl, "/api/crawl" ; "crawl")]
    #[test_case(Job::Polish("a b".into()), "/api/articles/a b/polish" ; "unencoded id")]
    #[tokio::test]
    async fn trigger_any_job(job: Job, path: &str) {
        let (client, transport) = client();

        client.trigger(job).execute().await.unwrap();

        assert_eq!(transport.requests()[0].path, path);
    }

    #[tokio::test]
    async fn accept_numeric_article_id() {
        let (client, transport) = client();

        client.translate(7).execute().await.unwrap();

        assert_eq!(transport.requests()[0].path, "/api/articles/7/translate");
    }

    #[test]
    fn crawl_news_on_non_tokio_executor() {
        let (client, transport) = client();

        let response = futures::executor::block_on(client.crawl_news().execute()).unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(transport.requests()[0].path, "/api/crawl");
    }

    #[test]
    fn expose_job_of_builder() {
        let (client, transport) = client();

        let builder = client.polish(3);

        assert_eq!(builder.job(), Some(&Job::Polish("3".into())));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn return_transport_error_unchanged() {
        let client = NewsDeskClientBuilder::with_transport(FailingTransport)
            .build()
            .unwrap();

        let result = client.crawl_news().execute().await;

        let error = result.unwrap_err();
        assert_eq!(error.status(), Some(500));
        assert_eq!(
            error.to_string(),
            "Transport error: Request failed with status code 500"
        );
    }
}
