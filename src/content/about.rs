use tracing::{debug, instrument};

use crate::config::ContentConfig;
use crate::content;
use crate::error::Result;
use crate::model::{AboutContent, ItemId, OneOrMany};

/// The API answers `/about` with either an object or a list of them.
/// `null` comes back as `None`.
#[instrument(skip(client, config))]
pub(crate) async fn get_about_content(
    client: &reqwest::Client,
    config: &ContentConfig,
) -> Result<Option<OneOrMany<AboutContent>>> {
    let url = config.endpoint("/about");
    let about: Option<OneOrMany<AboutContent>> = content::get_json(client, &url).await?;
    let (shape, count) = match &about {
        Some(OneOrMany::Many(items)) => ("list", items.len()),
        Some(OneOrMany::One(_)) => ("object", 1),
        None => ("null", 0),
    };
    debug!(shape, count, "fetched about content");
    Ok(about)
}

#[instrument(skip(client, config))]
pub(crate) async fn get_about_by_id(
    client: &reqwest::Client,
    config: &ContentConfig,
    id: &ItemId,
) -> Result<AboutContent> {
    let url = config.endpoint(&format!("/about/{id}"));
    content::get_json(client, &url).await
}
