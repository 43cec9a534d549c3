use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ItemId};

/// A photo in the gallery grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ItemId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(alias = "image", deserialize_with = "null_as_default")]
    pub image_url: String,
}
