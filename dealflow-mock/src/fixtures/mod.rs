//! Sample datasets bundled with the mock source.
//!
//! Two upcoming IPOs and four angel opportunities, in the exact JSON shape
//! served by the `/api/ipo-calendar` and `/api/angel-investments` endpoints.

use dealflow_core::{AngelRecord, DealflowError, IpoRecord, decode_records};

/// Raw `/api/ipo-calendar` payload.
pub const IPO_CALENDAR_JSON: &str = include_str!("ipo_calendar.json");

/// Raw `/api/angel-investments` payload.
pub const ANGEL_INVESTMENTS_JSON: &str = include_str!("angel_investments.json");

/// Decoded sample IPO list.
///
/// # Errors
/// Only if the bundled JSON stops decoding, which the crate tests guard against.
pub fn ipos() -> Result<Vec<IpoRecord>, DealflowError> {
    decode_records(IPO_CALENDAR_JSON.as_bytes())
}

/// Decoded sample angel list.
///
/// # Errors
/// Only if the bundled JSON stops decoding, which the crate tests guard against.
pub fn angels() -> Result<Vec<AngelRecord>, DealflowError> {
    decode_records(ANGEL_INVESTMENTS_JSON.as_bytes())
}
