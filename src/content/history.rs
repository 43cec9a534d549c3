use tracing::{debug, instrument};

use crate::config::ContentConfig;
use crate::content;
use crate::error::Result;
use crate::model::HistoryItem;

/// Timeline entries in whatever order the API returns them.
#[instrument(skip(client, config))]
pub(crate) async fn get_history_items(
    client: &reqwest::Client,
    config: &ContentConfig,
) -> Result<Vec<HistoryItem>> {
    let url = config.endpoint("/history");
    let items: Vec<HistoryItem> = content::get_json(client, &url).await?;
    debug!(count = items.len(), "fetched history items");
    Ok(items)
}
