use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ItemId};

const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A championship round or other calendar event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ItemId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(alias = "image", deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl EventItem {
    /// When the event starts. `None` if the date cannot be read.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        parse_api_date(&self.date)
    }

    /// The calendar day of the event, ignoring time of day.
    pub fn day(&self) -> Option<NaiveDate> {
        self.starts_at().map(|d| d.date_naive())
    }
}

/// Read a date the way the API writes them.
///
/// Accepts RFC 3339, naive date-times (taken as UTC) and bare dates
/// (midnight UTC).
pub(crate) fn parse_api_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
}
