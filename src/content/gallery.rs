use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ContentConfig;
use crate::content;
use crate::error::{ContentError, Result};
use crate::model::GalleryItem;

/// A body that is not a JSON array (`null`, `{}`) counts as an empty gallery.
#[instrument(skip(client, config))]
pub(crate) async fn get_gallery_items(
    client: &reqwest::Client,
    config: &ContentConfig,
) -> Result<Vec<GalleryItem>> {
    let url = config.endpoint("/gallery");
    let body: Value = content::get_json(client, &url).await?;
    if !body.is_array() {
        warn!(url = %url, "gallery response is not a list, treating it as empty");
        return Ok(Vec::new());
    }
    let items: Vec<GalleryItem> =
        serde_json::from_value(body).map_err(|e| ContentError::Decode { url, source: e })?;
    debug!(count = items.len(), "fetched gallery items");
    Ok(items)
}
