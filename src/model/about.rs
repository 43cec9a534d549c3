use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ItemId};

/// Content of the About page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub whatis: String,
    #[serde(deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub coordinator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub director: String,
    #[serde(deserialize_with = "null_as_default")]
    pub assistant: String,
}
