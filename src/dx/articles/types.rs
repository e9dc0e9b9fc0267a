//! Article types.
//!
//! Models of the article resources served by the newsdesk API. Decoding into
//! them is opt-in, see [`TransportResponse::json`].
//!
//! [`TransportResponse::json`]: ../../core/transport_response/struct.TransportResponse.html#method.json

use std::fmt::Display;

/// Processing stage of an article.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleStatus {
    /// Listed by a crawl, only the headline is known.
    Crawled,

    /// Title and content have been translated.
    Translated,

    /// Translated content has been polished.
    Polished,
}

impl ArticleStatus {
    /// Value used by the API for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Crawled => "crawled",
            ArticleStatus::Translated => "translated",
            ArticleStatus::Polished => "polished",
        }
    }
}

impl Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single article as stored by the backend.
///
/// Timestamps are kept as the ISO-8601 strings the backend emits.
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Article identifier.
    pub id: u64,

    /// Original (English) headline.
    pub title_en: String,

    /// Translated headline.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title_zh: Option<String>,

    /// Original summary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary_en: Option<String>,

    /// Translated summary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary_zh: Option<String>,

    /// Original body, present once content has been fetched.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content_en: Option<String>,

    /// Translated body.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content_zh: Option<String>,

    /// Polished translated body.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content_polished: Option<String>,

    /// Source URL, unique per article.
    pub url: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub published_at: Option<String>,

    pub crawled_at: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub translated_at: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub polished_at: Option<String>,

    /// Processing stage.
    pub status: ArticleStatus,

    pub created_at: String,

    pub updated_at: String,
}

/// One page of the article listing.
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePage {
    /// Articles on this page.
    pub list: Vec<Article>,

    /// Number of articles matching the query across all pages.
    pub total: u64,

    /// 1-based page number.
    pub page: u32,

    pub page_size: u32,
}
