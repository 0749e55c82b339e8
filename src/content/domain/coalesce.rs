//! Coalescing of nullable storage columns into domain values.
//!
//! The domain model has no notion of an absent value, only of an empty one.
//! Every nullable column passes through [`Coalesce`] at the decode boundary
//! so that `NULL` never leaks past the adapters.

use chrono::{DateTime, SecondsFormat, Utc};

/// Converts an optional column value into its domain representation.
pub trait Coalesce {
    /// Domain value produced for this column type.
    type Output;

    /// Returns the present value, or the type's zero value when absent.
    fn coalesce(self) -> Self::Output;
}

impl Coalesce for Option<String> {
    type Output = String;

    fn coalesce(self) -> String {
        self.unwrap_or_default()
    }
}

impl Coalesce for Option<i32> {
    type Output = i32;

    fn coalesce(self) -> i32 {
        self.unwrap_or_default()
    }
}

impl Coalesce for Option<i64> {
    type Output = i64;

    fn coalesce(self) -> i64 {
        self.unwrap_or_default()
    }
}

impl Coalesce for Option<bool> {
    type Output = bool;

    fn coalesce(self) -> bool {
        self.unwrap_or_default()
    }
}

/// Timestamps render as RFC 3339 with second precision and a `Z` suffix.
impl Coalesce for Option<DateTime<Utc>> {
    type Output = String;

    fn coalesce(self) -> String {
        self.map(|at| format_timestamp(&at)).unwrap_or_default()
    }
}

/// Renders a timestamp the way it appears on the wire.
#[must_use]
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
