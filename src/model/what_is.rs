use serde::{Deserialize, Serialize};

use super::common::{json_string, null_as_default};

/// Content of the "What is Gymkhana?" page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhatIsGymkhanaContent {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "json_string::deserialize")]
    pub competition_formats: Vec<String>,
    #[serde(deserialize_with = "json_string::deserialize")]
    pub technical_elements: Vec<String>,
    #[serde(deserialize_with = "json_string::deserialize")]
    pub scoring_elements: Vec<String>,
}
