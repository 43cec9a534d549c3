use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ItemId};

/// A slide in the home page hero carousel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ItemId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    pub link: Option<String>,
}
