//! Page data loaders.
//!
//! Each page hands the generic [`loader::load`] its request, a normalizer,
//! and (Events and Gallery only) a fallback collection. Call these once per
//! mount; wrap them in [`loader::spawn_load`] to observe the loading state.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::client::ContentClient;
use crate::content::resolve_in_place;
use crate::fallback::{fallback_events, fallback_gallery};
use crate::filters::sort_timeline;
use crate::loader::{self, PageState};
use crate::model::*;

pub const CONTACT_THANK_YOU: &str = "Thank you for your message! We will get back to you soon.";

/// Records carrying an `imageUrl` that loaders resolve against the backend origin.
pub trait HasImage {
    fn image_url_mut(&mut self) -> &mut String;
}

impl HasImage for SliderItem {
    fn image_url_mut(&mut self) -> &mut String {
        &mut self.image_url
    }
}

impl HasImage for NewsItem {
    fn image_url_mut(&mut self) -> &mut String {
        &mut self.image_url
    }
}

impl HasImage for EventItem {
    fn image_url_mut(&mut self) -> &mut String {
        &mut self.image_url
    }
}

impl HasImage for GalleryItem {
    fn image_url_mut(&mut self) -> &mut String {
        &mut self.image_url
    }
}

impl HasImage for HistoryItem {
    fn image_url_mut(&mut self) -> &mut String {
        &mut self.image_url
    }
}

/// Resolve every non-empty image URL to an absolute one.
pub fn resolve_images<T: HasImage>(origin: &str, mut items: Vec<T>) -> Vec<T> {
    for item in &mut items {
        resolve_in_place(origin, item.image_url_mut());
    }
    items
}

/// Absolute image URLs, sorted by year then order.
pub fn normalize_history(origin: &str, items: Vec<HistoryItem>) -> Vec<HistoryItem> {
    let mut items = resolve_images(origin, items);
    sort_timeline(&mut items);
    items
}

/// The object itself, or the first element when the API sends a list.
pub fn normalize_about(about: Option<OneOrMany<AboutContent>>) -> Option<AboutContent> {
    about.and_then(OneOrMany::into_first)
}

pub fn normalize_contacts(contacts: Vec<ContactInfo>) -> Option<ContactInfo> {
    contacts.into_iter().next()
}

#[instrument(skip(client))]
pub async fn load_home_slider(client: &ContentClient) -> PageState<Vec<SliderItem>> {
    let origin = client.config().origin();
    loader::load(
        client.get_slider_items(),
        |slides| resolve_images(origin, slides),
        None,
    )
    .await
}

#[instrument(skip(client))]
pub async fn load_latest_news(client: &ContentClient, limit: u32) -> PageState<Vec<NewsItem>> {
    let origin = client.config().origin();
    loader::load(
        client.get_latest_news(limit),
        |news| resolve_images(origin, news),
        None,
    )
    .await
}

/// The home page's short list of upcoming rounds. No fallback.
#[instrument(skip(client))]
pub async fn load_upcoming_events(
    client: &ContentClient,
    limit: u32,
) -> PageState<Vec<EventItem>> {
    let origin = client.config().origin();
    loader::load(
        client.get_upcoming_events(limit),
        |events| resolve_images(origin, events),
        None,
    )
    .await
}

/// `data` is `None` when the API has no About content.
#[instrument(skip(client))]
pub async fn load_about(client: &ContentClient) -> PageState<Option<AboutContent>> {
    loader::load(client.get_about_content(), normalize_about, None).await
}

/// The Events page. Falls back to the literal season calendar on failure.
#[instrument(skip(client))]
pub async fn load_events_page(client: &ContentClient) -> PageState<Vec<EventItem>> {
    let origin = client.config().origin();
    loader::load(
        client.get_upcoming_events(client.config().events_limit),
        |events| resolve_images(origin, events),
        Some(fallback_events),
    )
    .await
}

/// The Gallery page. Falls back to stock photos on failure.
#[instrument(skip(client))]
pub async fn load_gallery(client: &ContentClient) -> PageState<Vec<GalleryItem>> {
    let origin = client.config().origin();
    loader::load(
        client.get_gallery_items(),
        |items| resolve_images(origin, items),
        Some(fallback_gallery),
    )
    .await
}

#[instrument(skip(client))]
pub async fn load_history(client: &ContentClient) -> PageState<Vec<HistoryItem>> {
    let origin = client.config().origin();
    loader::load(
        client.get_history_items(),
        |items| normalize_history(origin, items),
        None,
    )
    .await
}

/// The first contact record, if any.
#[instrument(skip(client))]
pub async fn load_contact_info(client: &ContentClient) -> PageState<Option<ContactInfo>> {
    loader::load(client.get_contacts(), normalize_contacts, None).await
}

#[instrument(skip(client))]
pub async fn load_what_is_gymkhana(
    client: &ContentClient,
) -> PageState<Option<WhatIsGymkhanaContent>> {
    loader::load(client.get_what_is_gymkhana(), |content| content, None).await
}

/// Every independently loaded section of the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub slider: PageState<Vec<SliderItem>>,
    pub latest_news: PageState<Vec<NewsItem>>,
    pub upcoming_events: PageState<Vec<EventItem>>,
}

/// Number of news and event cards on the home page.
pub const HOME_CARD_LIMIT: u32 = 3;

/// Load the home page sections concurrently. A failing section does not
/// affect the others.
#[instrument(skip(client))]
pub async fn load_home(client: &ContentClient) -> HomePage {
    let (slider, latest_news, upcoming_events) = tokio::join!(
        load_home_slider(client),
        load_latest_news(client, HOME_CARD_LIMIT),
        load_upcoming_events(client, HOME_CARD_LIMIT),
    );
    HomePage {
        slider,
        latest_news,
        upcoming_events,
    }
}

/// Result of a contact form submission, with the text shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmissionOutcome {
    Sent(String),
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent(_))
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Sent(message) | SubmissionOutcome::Failed(message) => message,
        }
    }
}

/// Validate and send a contact form message.
#[instrument(skip_all)]
pub async fn submit_contact(
    client: &ContentClient,
    form: &ContactFormSubmission,
) -> SubmissionOutcome {
    let result = match form.validate() {
        Ok(()) => client.submit_contact_form(form).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => {
            info!("contact message sent");
            SubmissionOutcome::Sent(CONTACT_THANK_YOU.to_string())
        }
        Err(e) => {
            warn!(error = %e, "contact message not sent");
            SubmissionOutcome::Failed(e.to_string())
        }
    }
}
