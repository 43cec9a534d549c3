use tracing::{debug, instrument};

use crate::config::ContentConfig;
use crate::content;
use crate::error::Result;
use crate::model::NewsItem;

/// Newest first, at most `limit` items.
#[instrument(skip(client, config))]
pub(crate) async fn get_latest_news(
    client: &reqwest::Client,
    config: &ContentConfig,
    limit: u32,
) -> Result<Vec<NewsItem>> {
    let url = format!("{}?limit={limit}", config.endpoint("/news/latest"));
    let news: Vec<NewsItem> = content::get_json(client, &url).await?;
    debug!(count = news.len(), limit, "fetched latest news");
    Ok(news)
}
