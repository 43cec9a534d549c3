use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ItemId};
use super::event::parse_api_date;

/// A news article teaser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ItemId,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
}

impl NewsItem {
    /// Publication time, if the API date is readable.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_api_date(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_at() {
        let item: NewsItem = serde_json::from_str(
            r#"{"id": 4, "date": "2025-06-01T09:30:00.000Z", "title": "Entries open", "imageUrl": null}"#,
        )
        .unwrap();
        assert_eq!(
            item.published_at().map(|d| d.to_rfc3339()),
            Some("2025-06-01T09:30:00+00:00".to_string())
        );
        assert_eq!(item.image_url, "");
    }
}
