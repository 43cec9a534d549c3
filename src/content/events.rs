use tracing::{debug, instrument};

use crate::config::ContentConfig;
use crate::content;
use crate::error::Result;
use crate::model::EventItem;

#[instrument(skip(client, config))]
pub(crate) async fn get_upcoming_events(
    client: &reqwest::Client,
    config: &ContentConfig,
    limit: u32,
) -> Result<Vec<EventItem>> {
    let url = format!("{}?limit={limit}", config.endpoint("/events"));
    let events: Vec<EventItem> = content::get_json(client, &url).await?;
    debug!(count = events.len(), limit, "fetched events");
    Ok(events)
}
