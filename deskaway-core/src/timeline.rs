//! Journey timeline projected from booking state
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::booking::{BookingCategory, BookingState};

const DEFAULT_TIMELINE_DATA: &str =
    include_str!("../../deskaway-web/static/assets/data/timeline.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStatus {
    Confirmed,
    Active,
}

impl TimelineStatus {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Active => "active",
        }
    }
}

/// Display-ready journey entry. Derived on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub status: TimelineStatus,
    pub time: String,
    pub description: String,
}

/// Presence check a timeline rule fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingCheck {
    Event { id: u32 },
    Logistic { id: u32 },
    Equipment { id: u32 },
    Activity { id: u32 },
    VolcanoTrek,
}

impl BookingCheck {
    #[must_use]
    pub fn matches(self, state: &BookingState) -> bool {
        match self {
            Self::Event { id } => state.contains(BookingCategory::Event, id),
            Self::Logistic { id } => state.contains(BookingCategory::Logistic, id),
            Self::Equipment { id } => state.contains(BookingCategory::Equipment, id),
            Self::Activity { id } => state.contains(BookingCategory::Activity, id),
            Self::VolcanoTrek => state.volcano_trek_booked(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRule {
    pub when: BookingCheck,
    pub entry: TimelineEntry,
}

/// Ordered rule table mapping known bookings to canned journey entries.
///
/// Output follows rule order, not booking order. Bookings no rule mentions
/// produce nothing. An empty result is replaced by the welcome entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineProjector {
    pub welcome: TimelineEntry,
    #[serde(default)]
    pub rules: Vec<TimelineRule>,
}

impl Default for TimelineProjector {
    fn default() -> Self {
        Self {
            welcome: TimelineEntry {
                id: "welcome".to_string(),
                title: "Welcome to DeskAway!".to_string(),
                status: TimelineStatus::Active,
                time: "Getting Started".to_string(),
                description: "Book events and services to see your journey".to_string(),
            },
            rules: Vec::new(),
        }
    }
}

impl TimelineProjector {
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_TIMELINE_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_projector() -> &'static Self {
        static PROJECTOR: OnceLock<TimelineProjector> = OnceLock::new();
        PROJECTOR.get_or_init(Self::load_from_static)
    }

    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a rule table.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn project(&self, state: &BookingState) -> Vec<TimelineEntry> {
        let entries: Vec<TimelineEntry> = self
            .rules
            .iter()
            .filter(|rule| rule.when.matches(state))
            .map(|rule| rule.entry.clone())
            .collect();
        if entries.is_empty() {
            vec![self.welcome.clone()]
        } else {
            entries
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingAction;

    fn ids(entries: &[TimelineEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn bundled_table_covers_known_bookings_in_order() {
        let projector = TimelineProjector::default_projector();
        let checks: Vec<BookingCheck> = projector.rules.iter().map(|r| r.when).collect();
        assert_eq!(
            checks,
            vec![
                BookingCheck::Event { id: 1 },
                BookingCheck::Event { id: 2 },
                BookingCheck::Logistic { id: 1 },
                BookingCheck::Logistic { id: 2 },
                BookingCheck::Logistic { id: 3 },
                BookingCheck::Logistic { id: 4 },
                BookingCheck::VolcanoTrek,
            ]
        );
    }

    #[test]
    fn empty_state_yields_welcome_only() {
        let entries = TimelineProjector::default_projector().project(&BookingState::new());
        assert_eq!(ids(&entries), vec!["welcome"]);
        assert_eq!(entries[0].status, TimelineStatus::Active);
    }

    #[test]
    fn output_follows_rule_order_not_booking_order() {
        let mut state = BookingState::new();
        state.apply(BookingAction::BookVolcanoTrek);
        state.apply(BookingAction::BookLogistic(3));
        state.apply(BookingAction::ConfirmEvent(2));
        state.apply(BookingAction::BookLogistic(1));
        let entries = TimelineProjector::default_projector().project(&state);
        assert_eq!(
            ids(&entries),
            vec!["event-2", "logistic-1", "logistic-3", "volcano-trek"]
        );
    }

    #[test]
    fn statuses_come_from_table() {
        let mut state = BookingState::new();
        for id in 1..=4 {
            state.apply(BookingAction::BookLogistic(id));
        }
        let statuses: Vec<TimelineStatus> = TimelineProjector::default_projector()
            .project(&state)
            .iter()
            .map(|e| e.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                TimelineStatus::Active,
                TimelineStatus::Active,
                TimelineStatus::Confirmed,
                TimelineStatus::Active,
            ]
        );
    }

    #[test]
    fn untracked_bookings_fall_back_to_welcome() {
        let mut state = BookingState::new();
        state.apply(BookingAction::ConfirmEvent(3));
        state.apply(BookingAction::BookActivity(1));
        state.apply(BookingAction::ReserveEquipment(2));
        let entries = TimelineProjector::default_projector().project(&state);
        assert_eq!(ids(&entries), vec!["welcome"]);
    }

    #[test]
    fn custom_table_extends_without_code_changes() {
        let json = r#"{
            "welcome": {"id":"hi","title":"Hi","status":"active","time":"now","description":"start"},
            "rules": [
                {"when":{"kind":"equipment","id":3},"entry":{"id":"chair","title":"Ergo Chair","status":"confirmed","time":"14 days","description":"Delivered to your desk"}}
            ]
        }"#;
        let projector = TimelineProjector::from_json(json).unwrap();
        let mut state = BookingState::new();
        assert_eq!(ids(&projector.project(&state)), vec!["hi"]);
        state.apply(BookingAction::ReserveEquipment(3));
        assert_eq!(ids(&projector.project(&state)), vec!["chair"]);
    }
}
