use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::common::{json_string, null_as_default, ItemId};
use crate::error::{ContentError, Result};

/// Contact details shown on the Contact page and in the footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Platform name to profile URL.
    #[serde(deserialize_with = "social_links")]
    pub social_media: BTreeMap<String, String>,
    pub map_location: Option<String>,
}

/// Keeps the string-valued entries; a `null` platform does not drop the rest.
fn social_links<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let links: BTreeMap<String, Value> = json_string::deserialize(deserializer)?;
    Ok(links
        .into_iter()
        .filter_map(|(platform, url)| match url {
            Value::String(url) => Some((platform, url)),
            _ => None,
        })
        .collect())
}

impl ContactInfo {
    fn social(&self, platform: &str) -> Option<&str> {
        self.social_media
            .get(platform)
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
    }

    pub fn facebook(&self) -> Option<&str> {
        self.social("facebook")
    }

    pub fn twitter(&self) -> Option<&str> {
        self.social("twitter")
    }

    pub fn instagram(&self) -> Option<&str> {
        self.social("instagram")
    }

    pub fn youtube(&self) -> Option<&str> {
        self.social("youtube")
    }

    /// Embeddable map URL, if one is configured.
    pub fn map(&self) -> Option<&str> {
        self.map_location
            .as_deref()
            .filter(|location| !location.trim().is_empty())
    }
}

/// A message sent through the contact form. Never stored locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormSubmission {
    /// Check the fields the form marks as required.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(ContentError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )));
        }
        if !self.email.contains('@') {
            return Err(ContentError::Validation(format!(
                "{:?} is not an email address",
                self.email
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactFormSubmission {
        ContactFormSubmission {
            name: "Aiko".into(),
            email: "aiko@example.com".into(),
            phone: String::new(),
            subject: "Entry".into(),
            message: "How do I register?".into(),
        }
    }

    #[test]
    fn test_social_media_decoded_from_string() {
        let info: ContactInfo = serde_json::from_str(
            r#"{"address": "Bangkok", "socialMedia": "{\"facebook\":\"https://fb.com/aagc\",\"youtube\":\"\"}"}"#,
        )
        .unwrap();
        assert_eq!(info.facebook(), Some("https://fb.com/aagc"));
        assert_eq!(info.youtube(), None);
        assert_eq!(info.twitter(), None);
        assert_eq!(info.map(), None);
    }

    #[test]
    fn test_null_social_platform_keeps_others() {
        let info: ContactInfo = serde_json::from_str(
            r#"{"socialMedia": "{\"facebook\":\"https://fb.com/aagc\",\"twitter\":null,\"youtube\":3}"}"#,
        )
        .unwrap();
        assert_eq!(info.facebook(), Some("https://fb.com/aagc"));
        assert_eq!(info.twitter(), None);
        assert_eq!(info.youtube(), None);
        assert_eq!(info.social_media.len(), 1);
    }

    #[test]
    fn test_malformed_social_media_is_empty() {
        let info: ContactInfo =
            serde_json::from_str(r#"{"socialMedia": "not-json", "mapLocation": ""}"#).unwrap();
        assert!(info.social_media.is_empty());
        assert_eq!(info.map(), None);
    }

    #[test]
    fn test_social_media_already_decoded() {
        let info: ContactInfo =
            serde_json::from_str(r#"{"socialMedia": {"instagram": "https://ig.com/aagc"}}"#)
                .unwrap();
        assert_eq!(info.instagram(), Some("https://ig.com/aagc"));
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_validate_lists_missing_fields() {
        let mut submission = form();
        submission.subject = "  ".into();
        submission.message = String::new();
        let err = submission.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid submission: missing required field(s): subject, message"
        );
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut submission = form();
        submission.email = "aiko".into();
        assert!(matches!(
            submission.validate(),
            Err(ContentError::Validation(_))
        ));
    }
}
