//! # Article request builders.
//!
//! The [`ListArticlesRequestBuilder`] and [`GetArticleRequestBuilder`] let you
//! make and execute requests which read articles.

use std::collections::HashMap;

use derive_builder::Builder;

use crate::{
    core::{NewsDeskError, Transport, TransportMethod, TransportRequest, TransportResponse},
    dx::{articles::ArticleStatus, newsdesk_client::NewsDeskClientInstance},
};

/// The List Articles request builder.
///
/// Query parameters are forwarded verbatim. When no parameter is set the
/// request carries no query at all.
///
/// This struct is used by the [`list_articles`] method of the [`NewsDeskClient`].
///
/// [`list_articles`]: ../../newsdesk_client/struct.NewsDeskClientInstance.html#method.list_articles
/// [`NewsDeskClient`]: ../../newsdesk_client/type.NewsDeskClient.html
#[derive(Builder, Debug)]
#[builder(pattern = "owned", build_fn(vis = "pub(in crate::dx::articles)"))]
pub struct ListArticlesRequest<T> {
    /// Current client which can provide transportation to perform the request.
    #[builder(field(vis = "pub(in crate::dx::articles)"), setter(custom))]
    pub(in crate::dx::articles) newsdesk_client: NewsDeskClientInstance<T>,

    /// Query parameters sent with the request.
    #[builder(
        field(vis = "pub(in crate::dx::articles)"),
        setter(custom),
        default
    )]
    pub(in crate::dx::articles) query_parameters: HashMap<String, String>,
}

impl<T> ListArticlesRequestBuilder<T> {
    /// Replace the whole query parameters set.
    pub fn query_parameters(mut self, query_parameters: HashMap<String, String>) -> Self {
        self.query_parameters = Some(query_parameters);
        self
    }

    /// Add a single query parameter.
    pub fn query<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        self.query_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.to_string());
        self
    }

    /// 1-based page number.
    pub fn page(self, page: u32) -> Self {
        self.query("page", page)
    }

    /// Number of articles per page.
    pub fn page_size(self, page_size: u32) -> Self {
        self.query("page_size", page_size)
    }

    /// Search articles by headline.
    pub fn keyword<S>(self, keyword: S) -> Self
    where
        S: Into<String>,
    {
        self.query("keyword", keyword.into())
    }

    /// Only articles in the given processing stage.
    pub fn status(self, status: ArticleStatus) -> Self {
        self.query("status", status)
    }

    fn request(self) -> Result<ListArticlesRequest<T>, NewsDeskError> {
        self.build()
            .map_err(|err| NewsDeskError::ClientInitialization {
                details: err.to_string(),
            })
    }
}

impl<T> ListArticlesRequest<T> {
    /// Create transport request from the request builder.
    pub(in crate::dx::articles) fn transport_request(&self) -> TransportRequest {
        TransportRequest {
            path: "/articles".into(),
            query_parameters: self.query_parameters.clone(),
            method: TransportMethod::Get,
            ..Default::default()
        }
    }
}

impl<T> ListArticlesRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call asynchronous request.
    pub async fn execute(self) -> Result<TransportResponse, NewsDeskError> {
        let request = self.request()?;
        let transport_request = request.transport_request();
        request
            .newsdesk_client
            .transport
            .send(transport_request)
            .await
    }
}

#[cfg(feature = "blocking")]
impl<T> ListArticlesRequestBuilder<T>
where
    T: crate::core::blocking::Transport,
{
    /// Build and call synchronous request.
    ///
    /// No deadline is added on top of the transport: a blocking transport must
    /// honour [`TransportRequest::timeout`] or this call can block forever.
    pub fn execute_blocking(self) -> Result<TransportResponse, NewsDeskError> {
        let request = self.request()?;
        let transport_request = request.transport_request();
        request.newsdesk_client.transport.send(transport_request)
    }
}

/// The Get Article request builder.
///
/// The article identifier is put into the path as given, without validation
/// or encoding.
///
/// This struct is used by the [`get_article`] method of the [`NewsDeskClient`].
///
/// [`get_article`]: ../../newsdesk_client/struct.NewsDeskClientInstance.html#method.get_article
/// [`NewsDeskClient`]: ../../newsdesk_client/type.NewsDeskClient.html
#[derive(Builder, Debug)]
#[builder(pattern = "owned", build_fn(vis = "pub(in crate::dx::articles)"))]
pub struct GetArticleRequest<T> {
    /// Current client which can provide transportation to perform the request.
    #[builder(field(vis = "pub(in crate::dx::articles)"), setter(custom))]
    pub(in crate::dx::articles) newsdesk_client: NewsDeskClientInstance<T>,

    /// Identifier of the requested article.
    #[builder(field(vis = "pub(in crate::dx::articles)"), setter(custom))]
    pub(in crate::dx::articles) article_id: String,
}

impl<T> GetArticleRequestBuilder<T> {
    fn request(self) -> Result<GetArticleRequest<T>, NewsDeskError> {
        self.build()
            .map_err(|err| NewsDeskError::ClientInitialization {
                details: err.to_string(),
            })
    }
}

impl<T> GetArticleRequest<T> {
    /// Create transport request from the request builder.
    pub(in crate::dx::articles) fn transport_request(&self) -> TransportRequest {
        TransportRequest {
            path: format!("/articles/{}", self.article_id),
            method: TransportMethod::Get,
            ..Default::default()
        }
    }
}

impl<T> GetArticleRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call asynchronous request.
    pub async fn execute(self) -> Result<TransportResponse, NewsDeskError> {
        let request = self.request()?;
        let transport_request = request.transport_request();
        request
            .newsdesk_client
            .transport
            .send(transport_request)
            .await
    }
}

#[cfg(feature = "blocking")]
impl<T> GetArticleRequestBuilder<T>
where
    T: crate::core::blocking::Transport,
{
    /// Build and call synchronous request.
    ///
    /// No deadline is added on top of the transport: a blocking transport must
    /// honour [`TransportRequest::timeout`] or this call can block forever.
    pub fn execute_blocking(self) -> Result<TransportResponse, NewsDeskError> {
        let request = self.request()?;
        let transport_request = request.transport_request();
        request.newsdesk_client.transport.send(transport_request)
    }
}
