//! dealflow-core
//!
//! Core traits, aggregation and view-model types shared across the dealflow
//! workspace.
//!
//! - `source`: the `RecordSource` trait and its IPO / angel capability traits.
//! - `aggregate`: pure queries (sector vocabulary, sector filters, news feed).
//! - `snapshot`: the immutable result of one fetch cycle.
//! - `decode`: defensive decoding of source payloads.
//! - `display`: presentation mappings with graceful fallbacks.
//!
//! Async runtime
//! -------------
//! The source traits are `async_trait` object-safe traits and do not assume a
//! particular executor; the `dealflow` orchestrator drives them on Tokio.
#![warn(missing_docs)]

/// Pure aggregation over record lists.
pub mod aggregate;
/// Defensive payload decoding.
pub mod decode;
/// Presentation mappings (stage progress, date formatting).
pub mod display;
mod snapshot;
/// Record-source capability traits and the primary `RecordSource` interface.
pub mod source;

pub use aggregate::{
    ALL_NEWS, ALL_SECTORS, filter_by_sector, filter_news_by_sector, flatten_news,
    news_vocabulary, vocabulary,
};
pub use decode::{decode_records, decode_value};
pub use display::{format_date, stage_progress};
pub use snapshot::Snapshot;
pub use source::{AngelSource, IpoSource, RecordSource};

pub use dealflow_types::*;
