use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate;
use dealflow_types::{AngelRecord, IpoRecord, NewsItem};

/// Immutable result of one successful fetch cycle.
///
/// Both lists always come from the same cycle; a refresh builds a new
/// snapshot instead of mutating this one. All dashboard queries are answered
/// from a snapshot via the pure functions in [`crate::aggregate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    ipos: Vec<IpoRecord>,
    angels: Vec<AngelRecord>,
    fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Build a snapshot from a pair of lists fetched together.
    #[must_use]
    pub fn new(
        ipos: Vec<IpoRecord>,
        angels: Vec<AngelRecord>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ipos,
            angels,
            fetched_at,
        }
    }

    /// Upcoming IPOs in source order.
    #[must_use]
    pub fn ipos(&self) -> &[IpoRecord] {
        &self.ipos
    }

    /// Angel opportunities in source order.
    #[must_use]
    pub fn angels(&self) -> &[AngelRecord] {
        &self.angels
    }

    /// When the underlying lists were fetched.
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// True when both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ipos.is_empty() && self.angels.is_empty()
    }

    /// Sector selector options for the company lists.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<String> {
        aggregate::vocabulary(&self.ipos, &self.angels)
    }

    /// IPOs in `sector` (`"All"` for every IPO).
    #[must_use]
    pub fn ipos_in(&self, sector: &str) -> Vec<IpoRecord> {
        aggregate::filter_by_sector(&self.ipos, sector)
    }

    /// Angel opportunities in `sector` (`"All"` for every opportunity).
    #[must_use]
    pub fn angels_in(&self, sector: &str) -> Vec<AngelRecord> {
        aggregate::filter_by_sector(&self.angels, sector)
    }

    /// Combined news feed, most recent first.
    #[must_use]
    pub fn news(&self) -> Vec<NewsItem> {
        aggregate::flatten_news(&self.ipos, &self.angels)
    }

    /// Combined news feed restricted to `sector` (`"all"` for the whole feed).
    #[must_use]
    pub fn news_in(&self, sector: &str) -> Vec<NewsItem> {
        aggregate::filter_news_by_sector(&self.news(), sector)
    }

    /// Sector selector options for the news tab.
    #[must_use]
    pub fn news_vocabulary(&self) -> Vec<String> {
        aggregate::news_vocabulary(&self.news())
    }

    /// Record preselected by the detail view: the first IPO, if any.
    #[must_use]
    pub fn default_selection(&self) -> Option<&IpoRecord> {
        self.ipos.first()
    }

    /// Look up an IPO by its list-local id.
    #[must_use]
    pub fn ipo(&self, id: i64) -> Option<&IpoRecord> {
        self.ipos.iter().find(|r| r.base.id == id)
    }

    /// Look up an angel opportunity by its list-local id.
    #[must_use]
    pub fn angel(&self, id: i64) -> Option<&AngelRecord> {
        self.angels.iter().find(|r| r.base.id == id)
    }
}
