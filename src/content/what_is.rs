use tracing::{debug, instrument};

use crate::config::ContentConfig;
use crate::content;
use crate::error::Result;
use crate::model::WhatIsGymkhanaContent;

#[instrument(skip(client, config))]
pub(crate) async fn get_what_is_gymkhana(
    client: &reqwest::Client,
    config: &ContentConfig,
) -> Result<Option<WhatIsGymkhanaContent>> {
    let url = config.endpoint("/what-is-gymkhana");
    let page: Option<WhatIsGymkhanaContent> = content::get_json(client, &url).await?;
    debug!(present = page.is_some(), "fetched what-is-gymkhana content");
    Ok(page)
}
