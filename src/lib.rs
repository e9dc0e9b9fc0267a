//! # Newsdesk Rust client
//!
//! Client for the newsdesk article management API. It lists and reads the
//! stored articles and triggers the backend jobs which crawl, fetch,
//! translate and polish them.
//!
//! Every operation is a request builder obtained from the client. Nothing is
//! sent until `execute` (or `execute_blocking`) is called, and the response
//! is handed back exactly as the transport produced it. Decoding the
//! `{code, message, data}` envelope is up to the caller, see
//! [`TransportResponse::json`].
//!
//! ## Features
//!
//! * `serde` - response models and JSON decoding with [`serde`]
//! * `reqwest` - [`reqwest`] based transport
//! * `tokio` - request deadline enforced on any transport with [`tokio`]
//! * `blocking` - blocking API and blocking [`reqwest`] transport
//!
//! All of them are enabled by default. Disable default features to plug in
//! your own [`Transport`].
//!
//! ## Usage
//!
//! ```no_run
//! use newsdesk::{ApiEnvelope, ArticlePage, ArticleStatus, NewsDeskClientBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NewsDeskClientBuilder::with_reqwest_transport().build()?;
//!
//! let page: ApiEnvelope<ArticlePage> = client
//!     .list_articles()
//!     .status(ArticleStatus::Crawled)
//!     .page_size(10)
//!     .execute()
//!     .await?
//!     .json()?;
//!
//! for article in page.data.map(|page| page.list).unwrap_or_default() {
//!     client.fetch_and_translate(article.id).execute().await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`TransportResponse::json`]: crate::core::TransportResponse::json
//! [`Transport`]: crate::core::Transport
//! [`serde`]: https://crates.io/crates/serde
//! [`reqwest`]: https://crates.io/crates/reqwest
//! [`tokio`]: https://crates.io/crates/tokio

#[doc(inline)]
pub use dx::articles;

#[doc(inline)]
pub use dx::articles::{Article, ArticlePage, ArticleStatus};

#[doc(inline)]
pub use dx::jobs;

#[doc(inline)]
pub use dx::jobs::{CrawlSummary, Job};

#[doc(inline)]
pub use dx::ApiEnvelope;

#[doc(inline)]
pub use dx::{NewsDeskClientBuilder, NewsDeskClientInstance, NewsDeskConfig, NewsDeskGenericClient};

#[cfg(feature = "reqwest")]
#[doc(inline)]
pub use dx::NewsDeskClient;

pub mod core;
pub mod dx;
pub mod providers;
pub mod transport;
