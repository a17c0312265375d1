//! Canonical text forms.
//!
//! [`MarshalText`] is the capability a value implements to render itself as
//! element content. The encoder treats it as opaque: it only looks at whether
//! the call succeeded.
//!
//! Timestamps use a fixed, locale independent form:
//!
//! ```text
//! YYYY-MM-DDTHH:MM:SS[.fraction](Z|±hh:mm)
//! ```
//!
//! The fraction holds the nanoseconds with trailing zeros removed and is left
//! out when there are none. Years must lie in `0..=9999`.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use xml_marshal::MarshalText;
//!
//! let t = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
//! assert_eq!(t.marshal_text().unwrap(), "2024-01-15T10:30:00Z");
//! ```

use crate::{Error, Result};
use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike, Utc};
use std::borrow::Cow;
use std::fmt::Write as _;

/// Seconds between 0001-01-01T00:00:00Z and the Unix epoch.
const ZERO_TIME_UNIX_SECS: i64 = -62_135_596_800;

/// A value that knows its own canonical text representation.
pub trait MarshalText {
    /// Renders the value, or explains why it cannot be rendered.
    fn marshal_text(&self) -> Result<Cow<'_, str>>;
}

impl MarshalText for bool {
    fn marshal_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(if *self { "true" } else { "false" }))
    }
}

impl MarshalText for str {
    fn marshal_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self))
    }
}

impl MarshalText for String {
    fn marshal_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl<Tz: TimeZone> MarshalText for DateTime<Tz> {
    fn marshal_text(&self) -> Result<Cow<'_, str>> {
        let local = self.naive_local();
        let year = local.year();
        if !(0..=9999).contains(&year) {
            return Err(Error::marshal(
                "DateTime",
                format_args!("year {year} outside of range [0,9999]"),
            ));
        }

        let mut out = String::with_capacity(35);
        // `write!` into a String cannot fail.
        let _ = write!(out, "{}", local.format("%Y-%m-%dT%H:%M:%S"));

        let nanos = local.nanosecond() % 1_000_000_000;
        if nanos != 0 {
            let digits = format!("{nanos:09}");
            out.push('.');
            out.push_str(digits.trim_end_matches('0'));
        }

        let offset = self.offset().fix().local_minus_utc();
        if offset == 0 {
            out.push('Z');
        } else {
            let sign = if offset < 0 { '-' } else { '+' };
            let minutes = offset.unsigned_abs() / 60;
            let _ = write!(out, "{sign}{:02}:{:02}", minutes / 60, minutes % 60);
        }

        Ok(Cow::Owned(out))
    }
}

/// The zero timestamp, `0001-01-01T00:00:00Z`.
///
/// This is the creation time of a record that was never stamped.
#[must_use]
pub fn zero_time() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_TIME_UNIX_SECS, 0).unwrap_or_default()
}
