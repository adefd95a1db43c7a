use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Date-only display formats seen across the provider's screens.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d %b %Y"];

/// Formats that carry a time component.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Timestamp attached to a ledger entry.
///
/// Provider dates are display-formatted and often date-only. A value that
/// cannot be parsed keeps its record visible; it sorts after every dated
/// entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryTimestamp(Option<NaiveDateTime>);

impl EntryTimestamp {
    /// Wrap a fully specified datetime.
    pub fn new(when: NaiveDateTime) -> Self {
        Self(Some(when))
    }

    /// Wrap a date-only value at midnight.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(Some(date.and_hms_opt(0, 0, 0).unwrap_or_default()))
    }

    /// The unparseable sentinel; orders after every known timestamp.
    pub fn unknown() -> Self {
        Self(None)
    }

    /// Parse a display-formatted provider date, falling back to
    /// [`EntryTimestamp::unknown`] when no known format matches.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::unknown();
        }
        if let Ok(when) = DateTime::parse_from_rfc3339(raw) {
            return Self(Some(when.naive_utc()));
        }
        for format in DATETIME_FORMATS {
            if let Ok(when) = NaiveDateTime::parse_from_str(raw, format) {
                return Self(Some(when));
            }
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                return Self::from_date(date);
            }
        }
        Self::unknown()
    }

    /// The parsed datetime, when one exists.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        self.0
    }

    /// Whether the source date parsed successfully.
    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }
}

impl Ord for EntryTimestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for EntryTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EntryTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(when) => write!(f, "{}", when.format("%Y-%m-%d %H:%M:%S")),
            None => f.write_str("unknown"),
        }
    }
}
