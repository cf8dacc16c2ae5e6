//! Dealflow-specific data transfer objects and configuration primitives.
//!
//! - [`IpoRecord`] and [`AngelRecord`]: the two record shapes served by
//!   record sources, sharing a flattened [`CompanyBase`].
//! - [`NewsItem`]: a news entry tagged with its company, produced by aggregation.
//! - [`DealflowError`]: the workspace error type.
#![warn(missing_docs)]

mod config;
mod error;
mod news;
mod record;
mod risk;
mod source;

pub use config::DealflowConfig;
pub use error::DealflowError;
pub use news::NewsItem;
pub use record::{
    AngelRecord, Company, CompanyBase, IpoRecord, KeyMetrics, NewsEntry, RecordKind,
    RevenuePoint,
};
pub use risk::Risk;
pub use source::SourceKey;
