use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::EnumString;

use super::common::{lenient_i32, null_as_default};

/// An entry on the championship history timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryItem {
    #[serde(deserialize_with = "lenient_i32")]
    pub year: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub order: i32,
    pub icon: HistoryIcon,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
}

/// Marker shown on a timeline entry. Unknown names fall back to `Event`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HistoryIcon {
    Car,
    Flag,
    Trophy,
    Group,
    #[default]
    Event,
    Star,
}

impl<'de> Deserialize<'de> for HistoryIcon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name
            .and_then(|n| HistoryIcon::from_str(n.trim()).ok())
            .unwrap_or_default())
    }
}
