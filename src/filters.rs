//! Pure view filters over loaded collections.
//!
//! Anything time-dependent takes `now` as an argument so callers decide
//! which clock to read, once per render.

use chrono::{DateTime, NaiveDate, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, FromRepr};

use crate::model::{EventItem, HistoryItem};

/// Which slice of the events list a view shows.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    FromRepr,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum EventFilter {
    #[default]
    All = 0,
    Upcoming = 1,
    Past = 2,
}

/// Whether an event is still ahead of us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
pub enum EventBucket {
    Upcoming,
    Past,
}

/// `Upcoming` if the event starts strictly after `now`, otherwise `Past`.
/// Events with an unreadable date are in neither bucket.
pub fn bucket(event: &EventItem, now: DateTime<Utc>) -> Option<EventBucket> {
    event.starts_at().map(|starts_at| {
        if starts_at > now {
            EventBucket::Upcoming
        } else {
            EventBucket::Past
        }
    })
}

pub fn is_upcoming(event: &EventItem, now: DateTime<Utc>) -> bool {
    bucket(event, now) == Some(EventBucket::Upcoming)
}

/// Events visible under `filter` at `now`, in their original order.
pub fn filter_events(
    events: &[EventItem],
    filter: EventFilter,
    now: DateTime<Utc>,
) -> Vec<EventItem> {
    events
        .iter()
        .filter(|event| match filter {
            EventFilter::All => true,
            EventFilter::Upcoming => bucket(event, now) == Some(EventBucket::Upcoming),
            EventFilter::Past => bucket(event, now) == Some(EventBucket::Past),
        })
        .cloned()
        .collect_vec()
}

/// Events taking place on `date`, ignoring time of day.
pub fn events_on(events: &[EventItem], date: NaiveDate) -> Vec<EventItem> {
    events
        .iter()
        .filter(|event| event.day() == Some(date))
        .cloned()
        .collect_vec()
}

/// Order timeline entries by year, then by `order` within a year.
///
/// The sort is stable: entries equal on both keys keep their relative order.
pub fn sort_timeline(items: &mut [HistoryItem]) {
    items.sort_by_key(|item| (item.year, item.order));
}

/// Owned convenience wrapper around [`sort_timeline`].
pub fn sorted_timeline(mut items: Vec<HistoryItem>) -> Vec<HistoryItem> {
    sort_timeline(&mut items);
    items
}

/// Selection state of the Events page: the active tab and the calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventsView {
    pub filter: EventFilter,
    pub selected_date: NaiveDate,
}

impl EventsView {
    /// All events, calendar on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            filter: EventFilter::All,
            selected_date: today,
        }
    }

    /// Switch tabs by index (0 all, 1 upcoming, 2 past). Unknown indexes are ignored.
    pub fn select_tab(&mut self, index: u8) {
        if let Some(filter) = EventFilter::from_repr(index) {
            self.filter = filter;
        }
    }

    /// Cards for the current tab.
    pub fn visible(&self, events: &[EventItem], now: DateTime<Utc>) -> Vec<EventItem> {
        filter_events(events, self.filter, now)
    }

    /// Events listed next to the calendar.
    pub fn on_selected_date(&self, events: &[EventItem]) -> Vec<EventItem> {
        events_on(events, self.selected_date)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;

    fn event(id: u64, date: &str) -> EventItem {
        EventItem {
            id: id.into(),
            title: format!("Round {id}"),
            date: date.to_string(),
            ..EventItem::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap()
    }

    fn history(year: i32, order: i32, title: &str) -> HistoryItem {
        HistoryItem {
            year,
            order,
            title: title.to_string(),
            ..HistoryItem::default()
        }
    }

    fn ids(events: &[EventItem]) -> Vec<String> {
        events.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn test_past_event_buckets() {
        let events = vec![event(1, "2025-07-15")];
        assert!(filter_events(&events, EventFilter::Upcoming, now()).is_empty());
        assert_eq!(filter_events(&events, EventFilter::Past, now()).len(), 1);
        assert_eq!(filter_events(&events, EventFilter::All, now()).len(), 1);
        assert_eq!(bucket(&events[0], now()), Some(EventBucket::Past));
    }

    #[test]
    fn test_upcoming_is_strictly_after_now() {
        let exactly_now = event(1, "2025-08-01T12:00:00Z");
        let later = event(2, "2025-08-01T12:00:01Z");
        assert_eq!(bucket(&exactly_now, now()), Some(EventBucket::Past));
        assert!(is_upcoming(&later, now()));
    }

    #[test]
    fn test_bucket_follows_the_clock() {
        let round = event(1, "2025-09-10");
        let before = Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 9, 11, 0, 0, 0).unwrap();
        assert_eq!(bucket(&round, before), Some(EventBucket::Upcoming));
        assert_eq!(bucket(&round, after), Some(EventBucket::Past));
    }

    #[test]
    fn test_undated_events_only_in_all() {
        let events = vec![event(1, "TBA"), event(2, "2025-09-10")];
        assert_eq!(ids(&filter_events(&events, EventFilter::All, now())), vec!["1", "2"]);
        assert_eq!(ids(&filter_events(&events, EventFilter::Upcoming, now())), vec!["2"]);
        assert!(filter_events(&events, EventFilter::Past, now()).is_empty());
    }

    #[test]
    fn test_timeline_sort() {
        let sorted = sorted_timeline(vec![
            history(2020, 2, "a"),
            history(2019, 1, "b"),
            history(2020, 1, "c"),
        ]);
        let keys: Vec<(i32, i32)> = sorted.iter().map(|h| (h.year, h.order)).collect();
        assert_eq!(keys, vec![(2019, 1), (2020, 1), (2020, 2)]);
    }

    #[test]
    fn test_timeline_sort_is_stable() {
        let sorted = sorted_timeline(vec![
            history(2021, 1, "first"),
            history(2018, 3, "early"),
            history(2021, 1, "second"),
            history(2021, 1, "third"),
        ]);
        let titles: Vec<&str> = sorted.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["early", "first", "second", "third"]);
    }

    #[test]
    fn test_events_on_ignores_time_of_day() {
        let events = vec![
            event(1, "2025-08-20T18:30:00Z"),
            event(2, "2025-08-20"),
            event(3, "2025-08-21"),
        ];
        let day = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
        assert_eq!(ids(&events_on(&events, day)), vec!["1", "2"]);
    }

    #[test]
    fn test_events_view_tabs() {
        let events = vec![event(1, "2025-07-15"), event(2, "2025-09-10")];
        let mut view = EventsView::new(NaiveDate::from_ymd_opt(2025, 7, 15).unwrap());
        assert_eq!(view.visible(&events, now()).len(), 2);

        view.select_tab(1);
        assert_eq!(view.filter, EventFilter::Upcoming);
        assert_eq!(ids(&view.visible(&events, now())), vec!["2"]);

        view.select_tab(2);
        assert_eq!(ids(&view.visible(&events, now())), vec!["1"]);

        view.select_tab(9);
        assert_eq!(view.filter, EventFilter::Past);

        assert_eq!(ids(&view.on_selected_date(&events)), vec!["1"]);
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(EventFilter::from_str("Upcoming").unwrap(), EventFilter::Upcoming);
        assert_eq!(EventFilter::Past.to_string(), "past");
        assert!(EventFilter::from_str("soon").is_err());
    }
}
