//! Articles module.
//!
//! Read access to the articles stored by the newsdesk backend: the paged
//! listing and single article lookup.

#[doc(inline)]
pub use types::{Article, ArticlePage, ArticleStatus};
pub mod types;

#[doc(inline)]
pub use builders::{GetArticleRequestBuilder, ListArticlesRequestBuilder};
pub mod builders;

use crate::dx::newsdesk_client::NewsDeskClientInstance;

impl<T> NewsDeskClientInstance<T> {
    /// Create a list articles request builder.
    /// This method is used to list or search articles.
    ///
    /// Instance of [`ListArticlesRequestBuilder`] is returned.
    ///
    /// # Example
    /// ```no_run
    /// use newsdesk::{ArticleStatus, NewsDeskClientBuilder};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = NewsDeskClientBuilder::with_reqwest_transport().build()?;
    ///
    /// let response = client
    ///     .list_articles()
    ///     .page(2)
    ///     .status(ArticleStatus::Translated)
    ///     .execute()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_articles(&self) -> ListArticlesRequestBuilder<T> {
        ListArticlesRequestBuilder {
            newsdesk_client: Some(self.clone()),
            query_parameters: None,
        }
    }

    /// Create a get article request builder.
    /// This method is used to fetch a single article.
    ///
    /// Instance of [`GetArticleRequestBuilder`] is returned.
    ///
    /// # Example
    /// ```no_run
    /// use newsdesk::NewsDeskClientBuilder;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = NewsDeskClientBuilder::with_reqwest_transport().build()?;
    ///
    /// let response = client.get_article(42).execute().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_article<I>(&self, article_id: I) -> GetArticleRequestBuilder<T>
    where
        I: ToString,
    {
        GetArticleRequestBuilder {
            newsdesk_client: Some(self.clone()),
            article_id: Some(article_id.to_string()),
        }
    }
}
