use serde::{Deserialize, Serialize};

/// A news entry tagged with its owning company's name and sector.
///
/// Produced by aggregation only; never served by a source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsItem {
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Headline.
    pub title: String,
    /// Owning company's display name.
    pub company: String,
    /// Owning company's sector.
    pub sector: String,
    /// Link to the article.
    pub url: String,
}
