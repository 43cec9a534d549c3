use chrono::Utc;
use tracing_subscriber::EnvFilter;

use gymkhana_content::filters::{filter_events, EventFilter};
use gymkhana_content::{loader, pages, ContentClient, ContentConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ContentClient::with_config(ContentConfig::from_env()?);

    let home = pages::load_home(&client).await;
    println!("{}", serde_json::to_string_pretty(&home)?);

    let events_client = client.clone();
    let (mut events, _) =
        loader::spawn_load(async move { pages::load_events_page(&events_client).await });
    println!("events loading: {}", events.borrow().loading);
    events.changed().await?;

    let state = events.borrow().clone();
    if let Some(error) = &state.error {
        println!("events unavailable ({error}), showing the season calendar");
    }
    let upcoming = filter_events(&state.data, EventFilter::Upcoming, Utc::now());
    println!("{} upcoming of {} events", upcoming.len(), state.data.len());

    let (about, gallery, history, contact, what_is) = tokio::join!(
        pages::load_about(&client),
        pages::load_gallery(&client),
        pages::load_history(&client),
        pages::load_contact_info(&client),
        pages::load_what_is_gymkhana(&client),
    );
    println!("{}", serde_json::to_string_pretty(&about)?);
    println!("gallery: {} photos (error: {:?})", gallery.data.len(), gallery.error);
    for item in &history.data {
        println!("{} #{} [{}] {}", item.year, item.order, item.icon, item.title);
    }
    println!("{}", serde_json::to_string_pretty(&contact)?);
    println!("{}", serde_json::to_string_pretty(&what_is)?);

    Ok(())
}
