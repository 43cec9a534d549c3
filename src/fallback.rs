//! Literal content shown when the Events or Gallery request fails.

use crate::model::{EventItem, GalleryItem, ItemId};

const UNSPLASH: &str = "https://images.unsplash.com";

// (title, description, unsplash photo id)
const GALLERY: [(&str, &str, &str); 10] = [
    ("Racing in Rain", "Intense racing action during wet conditions", "photo-1580273916550-e323be2ae537"),
    ("Night Race", "Formula racing under the lights", "photo-1590066221822-0ef9de38b4e4"),
    ("Track Action", "Multiple cars battling for position", "photo-1590066221100-9fdf1004de95"),
    ("Race Start", "The crucial moment at the start of the race", "photo-1568605117036-5fe5e7bab0b7"),
    ("Pit Lane Action", "Quick pit stop during the race", "photo-1547744037-c92247cf0355"),
    ("Racing Spirit", "The thrill of motorsport competition", "photo-1511919884226-fd3cad34687c"),
    ("Championship Battle", "Close racing in the championship", "photo-1494905998402-395d579af36f"),
    ("Racing Line", "Perfect racing line through the corner", "photo-1503376780353-7e6692767b70"),
    ("Speed and Precision", "High-speed action on the track", "photo-1492144534655-ae79c964c9d7"),
    ("Racing Team", "Team celebration after success", "photo-1533473359331-0135ef1b58bf"),
];

fn event(id: u64, title: &str, date: &str, location: &str, description: &str) -> EventItem {
    EventItem {
        id: ItemId::Number(id),
        title: title.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        image_url: format!("/images/event{id}.jpg"),
        description: description.to_string(),
        status: Some("upcoming".to_string()),
    }
}

/// The 2025 championship rounds.
pub fn fallback_events() -> Vec<EventItem> {
    vec![
        event(
            1,
            "AAGC Round 1 - Thailand",
            "2025-07-15",
            "Bangkok, Thailand",
            "Opening round of the 2025 Asia Auto Gymkhana Championship",
        ),
        event(
            2,
            "AAGC Round 2 - Malaysia",
            "2025-08-20",
            "Kuala Lumpur, Malaysia",
            "Second round featuring technical course challenges",
        ),
        event(
            3,
            "AAGC Round 3 - Taiwan",
            "2025-09-10",
            "Taipei, Taiwan",
            "Championship continues with exciting night race",
        ),
    ]
}

pub fn fallback_gallery() -> Vec<GalleryItem> {
    GALLERY
        .iter()
        .zip(1u64..)
        .map(|(&(title, description, photo), id)| GalleryItem {
            id: ItemId::Number(id),
            title: title.to_string(),
            description: description.to_string(),
            image_url: format!("{UNSPLASH}/{photo}"),
        })
        .collect()
}
