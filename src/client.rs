use tracing::instrument;

use crate::config::ContentConfig;
use crate::content;
use crate::error::Result;
use crate::model::*;

/// The main entry point for talking to the championship content API.
///
/// `ContentClient` wraps a [`reqwest::Client`] and a [`ContentConfig`] and
/// exposes one method per resource. Every call is a single attempt: no
/// retries, no caching.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> gymkhana_content::Result<()> {
/// use gymkhana_content::ContentClient;
///
/// let client = ContentClient::new();
/// let news = client.get_latest_news(3).await?;
/// println!("Found {} news items", news.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: ContentConfig,
}

impl ContentClient {
    /// Create a new client against the production API.
    pub fn new() -> Self {
        Self::with_config(ContentConfig::default())
    }

    pub fn with_config(config: ContentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: ContentConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Fetch the home page slides. Image URLs are returned as the API sent them.
    #[instrument(skip(self))]
    pub async fn get_slider_items(&self) -> Result<Vec<SliderItem>> {
        content::slider::get_slider_items(&self.http, &self.config).await
    }

    /// Fetch the newest `limit` news items.
    #[instrument(skip(self))]
    pub async fn get_latest_news(&self, limit: u32) -> Result<Vec<NewsItem>> {
        content::news::get_latest_news(&self.http, &self.config, limit).await
    }

    /// Fetch up to `limit` events.
    #[instrument(skip(self))]
    pub async fn get_upcoming_events(&self, limit: u32) -> Result<Vec<EventItem>> {
        content::events::get_upcoming_events(&self.http, &self.config, limit).await
    }

    /// Fetch About page content, as an object or a list depending on the API's mood.
    #[instrument(skip(self))]
    pub async fn get_about_content(&self) -> Result<Option<OneOrMany<AboutContent>>> {
        content::about::get_about_content(&self.http, &self.config).await
    }

    #[instrument(skip(self))]
    pub async fn get_about_by_id(&self, id: &ItemId) -> Result<AboutContent> {
        content::about::get_about_by_id(&self.http, &self.config, id).await
    }

    #[instrument(skip(self))]
    pub async fn get_gallery_items(&self) -> Result<Vec<GalleryItem>> {
        content::gallery::get_gallery_items(&self.http, &self.config).await
    }

    /// Fetch timeline entries, unsorted.
    #[instrument(skip(self))]
    pub async fn get_history_items(&self) -> Result<Vec<HistoryItem>> {
        content::history::get_history_items(&self.http, &self.config).await
    }

    /// Fetch every contact record. Pages only use the first.
    #[instrument(skip(self))]
    pub async fn get_contacts(&self) -> Result<Vec<ContactInfo>> {
        content::contact::get_contacts(&self.http, &self.config).await
    }

    #[instrument(skip(self))]
    pub async fn get_contact(&self, id: &ItemId) -> Result<ContactInfo> {
        content::contact::get_contact(&self.http, &self.config, id).await
    }

    #[instrument(skip(self))]
    pub async fn get_what_is_gymkhana(&self) -> Result<Option<WhatIsGymkhanaContent>> {
        content::what_is::get_what_is_gymkhana(&self.http, &self.config).await
    }

    /// Post a contact form message. The response body is ignored.
    #[instrument(skip_all)]
    pub async fn submit_contact_form(&self, form: &ContactFormSubmission) -> Result<()> {
        content::contact::submit_contact_form(&self.http, &self.config, form).await
    }
}

impl Default for ContentClient {
    fn default() -> Self {
        Self::new()
    }
}
