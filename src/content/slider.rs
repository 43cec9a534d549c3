use tracing::{debug, instrument};

use crate::config::ContentConfig;
use crate::content;
use crate::error::Result;
use crate::model::SliderItem;

#[instrument(skip(client, config))]
pub(crate) async fn get_slider_items(
    client: &reqwest::Client,
    config: &ContentConfig,
) -> Result<Vec<SliderItem>> {
    let url = config.endpoint("/slider");
    let slides: Vec<SliderItem> = content::get_json(client, &url).await?;
    debug!(count = slides.len(), "fetched slider items");
    Ok(slides)
}
