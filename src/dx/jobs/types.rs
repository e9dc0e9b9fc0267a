//! Job types.

use std::fmt::Display;

/// Backend job which can be started through a trigger endpoint.
///
/// Article-bound jobs carry the article identifier exactly as the caller
/// passed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Job {
    /// Crawl the news source for the latest headlines.
    Crawl,

    /// Fetch the original content of an article.
    FetchContent(String),

    /// Translate title and content of an article.
    Translate(String),

    /// Fetch the content when missing, then translate the article.
    FetchAndTranslate(String),

    /// Polish the translated content of an article.
    Polish(String),
}

impl Job {
    /// Path of the trigger endpoint, relative to the base path.
    pub fn path(&self) -> String {
        match self {
            Job::Crawl => "/crawl".into(),
            Job::FetchContent(id) => format!("/articles/{id}/fetch"),
            Job::Translate(id) => format!("/articles/{id}/translate"),
            Job::FetchAndTranslate(id) => format!("/articles/{id}/fetch-and-translate"),
            Job::Polish(id) => format!("/articles/{id}/polish"),
        }
    }

    /// Identifier of the article the job works on.
    pub fn article_id(&self) -> Option<&str> {
        match self {
            Job::Crawl => None,
            Job::FetchContent(id)
            | Job::Translate(id)
            | Job::FetchAndTranslate(id)
            | Job::Polish(id) => Some(id),
        }
    }
}

impl Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Job::Crawl => "crawl",
            Job::FetchContent(_) => "fetch content",
            Job::Translate(_) => "translate",
            Job::FetchAndTranslate(_) => "fetch and translate",
            Job::Polish(_) => "polish",
        };

        match self.article_id() {
            Some(id) => write!(f, "{name} (article {id})"),
            None => write!(f, "{name}"),
        }
    }
}

/// Acknowledgement data of a crawl job.
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Number of newly stored articles.
    pub count: u64,
}
