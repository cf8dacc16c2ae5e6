//! Dealflow tracks upcoming IPOs and angel-investment opportunities.
//!
//! Overview
//! - Routes record fetches to sources that implement the `dealflow_core` contracts.
//! - Applies a per-source timeout and falls back across sources in priority order.
//! - Fetches both record lists as one all-or-nothing cycle and returns an
//!   immutable [`Snapshot`] that answers every dashboard query.
//! - [`Dashboard`] keeps the loading / ready / failed state across refreshes.
//!
//! Key behaviors
//! - A cycle either yields both lists or an error; there is no partial snapshot.
//! - A failed cycle discards the previous snapshot, but the time of the last
//!   successful fetch is kept.
//! - Malformed records are skipped or defaulted by the sources' decoding and
//!   never fail a cycle.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use dealflow::{Dashboard, DashboardState, Dealflow};
//!
//! let dealflow = Dealflow::builder()
//!     .with_source(Arc::new(dealflow_mock::MockSource::new()))
//!     .build()?;
//! let dashboard = Dashboard::new(Arc::new(dealflow));
//!
//! if let DashboardState::Ready(snapshot) = dashboard.load().await {
//!     for sector in snapshot.vocabulary() {
//!         println!("{sector}: {} IPOs", snapshot.ipos_in(&sector).len());
//!     }
//!     for item in snapshot.news_in("all").iter().take(5) {
//!         println!("{} {} ({})", item.date, item.title, item.company);
//!     }
//! }
//! ```
//!
//! See `dealflow/examples/` for a runnable demonstration.
#![warn(missing_docs)]

pub(crate) mod core;
mod dashboard;
mod router;

pub use core::{Dealflow, DealflowBuilder};
pub use dashboard::{Dashboard, DashboardState, LOAD_FAILED_MESSAGE, REFRESH_FAILED_MESSAGE};
pub use router::util::collapse_errors;

// Re-export core types for convenience
pub use dealflow_core::{
    ALL_NEWS, ALL_SECTORS, AngelRecord, AngelSource, Company, CompanyBase, DealflowConfig,
    DealflowError, IpoRecord, IpoSource, KeyMetrics, NewsEntry, NewsItem, RecordKind,
    RecordSource, RevenuePoint, Risk, Snapshot, SourceKey, filter_by_sector,
    filter_news_by_sector, flatten_news, format_date, news_vocabulary, stage_progress,
    vocabulary,
};
