use tracing::{debug, instrument};

use crate::config::ContentConfig;
use crate::content;
use crate::error::Result;
use crate::model::{ContactFormSubmission, ContactInfo, ItemId};

#[instrument(skip(client, config))]
pub(crate) async fn get_contacts(
    client: &reqwest::Client,
    config: &ContentConfig,
) -> Result<Vec<ContactInfo>> {
    let url = config.endpoint("/contact");
    let contacts: Vec<ContactInfo> = content::get_json(client, &url).await?;
    debug!(count = contacts.len(), "fetched contact info");
    Ok(contacts)
}

#[instrument(skip(client, config))]
pub(crate) async fn get_contact(
    client: &reqwest::Client,
    config: &ContentConfig,
    id: &ItemId,
) -> Result<ContactInfo> {
    let url = config.endpoint(&format!("/contact/{id}"));
    content::get_json(client, &url).await
}

#[instrument(skip_all, fields(subject = %form.subject))]
pub(crate) async fn submit_contact_form(
    client: &reqwest::Client,
    config: &ContentConfig,
    form: &ContactFormSubmission,
) -> Result<()> {
    let url = config.endpoint("/messages");
    content::post_json(client, &url, form).await?;
    debug!("contact form submitted");
    Ok(())
}
