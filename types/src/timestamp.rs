//! Timestamp coercion.
//!
//! Document timestamps are stored as [`DateTime<FixedOffset>`]. Equality on
//! chrono date-times compares the underlying instant, so the same moment
//! written with different offsets compares equal.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::DocumentError;

/// Extended and basic ISO-8601 forms with an offset. `%#z` takes `Z`,
/// `±hh`, `±hhmm` and `±hh:mm`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y%m%dT%H%M%S%.f%#z"];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y%m%dT%H%M%S%.f"];

/// A timestamp as supplied by a caller: either already an instant, or an
/// ISO-8601 string still to be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampInput {
    Instant(DateTime<FixedOffset>),
    Iso8601(String),
}

impl TimestampInput {
    /// Resolve into an instant, parsing string input.
    pub fn resolve(self) -> Result<DateTime<FixedOffset>, DocumentError> {
        match self {
            Self::Instant(instant) => Ok(instant),
            Self::Iso8601(raw) => parse_timestamp(&raw),
        }
    }
}

impl From<DateTime<FixedOffset>> for TimestampInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Instant(value)
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value.fixed_offset())
    }
}

impl From<String> for TimestampInput {
    fn from(value: String) -> Self {
        Self::Iso8601(value)
    }
}

impl From<&str> for TimestampInput {
    fn from(value: &str) -> Self {
        Self::Iso8601(value.to_owned())
    }
}

/// Parse an ISO-8601 date-time.
///
/// Accepts RFC 3339 (`2014-06-23T15:25:00-05:00`, `...Z`), other offset
/// spellings (`...-0500`, `...-05`) and the basic format
/// (`20140623T152500Z`). A date-time with no offset at all is taken to be UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, DocumentError> {
    let trimmed = raw.trim();

    let rfc3339_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(instant) => return Ok(instant),
        Err(err) => err,
    };

    for format in OFFSET_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(trimmed, format) {
            return Ok(instant);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            tracing::debug!(raw = trimmed, "timestamp has no offset; assuming UTC");
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    Err(DocumentError::InvalidTimestamp {
        raw: raw.to_owned(),
        source: rfc3339_err,
    })
}
