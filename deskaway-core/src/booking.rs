//! Persisted booking state and the store that owns it
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::BookingStorage;
use crate::timeline::{TimelineEntry, TimelineProjector};

/// Kinds of id-keyed bookings tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingCategory {
    Event,
    Logistic,
    Equipment,
    Activity,
}

impl BookingCategory {
    pub const ALL: [Self; 4] = [Self::Event, Self::Logistic, Self::Equipment, Self::Activity];
}

/// A single user action against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    ConfirmEvent(u32),
    BookLogistic(u32),
    ReserveEquipment(u32),
    BookActivity(u32),
    BookVolcanoTrek,
}

/// Snapshot of everything the user has booked on this device.
///
/// Id lists keep append order and never hold the same id twice. Nothing in
/// this type removes an id or clears the trek flag once set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingState {
    confirmed_events: Vec<u32>,
    booked_logistics: Vec<u32>,
    reserved_equipment: Vec<u32>,
    booked_activities: Vec<u32>,
    volcano_trek_booked: bool,
}

impl BookingState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn confirmed_events(&self) -> &[u32] {
        &self.confirmed_events
    }

    #[must_use]
    pub fn booked_logistics(&self) -> &[u32] {
        &self.booked_logistics
    }

    #[must_use]
    pub fn reserved_equipment(&self) -> &[u32] {
        &self.reserved_equipment
    }

    #[must_use]
    pub fn booked_activities(&self) -> &[u32] {
        &self.booked_activities
    }

    #[must_use]
    pub const fn volcano_trek_booked(&self) -> bool {
        self.volcano_trek_booked
    }

    /// Ids booked under `category`, in the order they were added.
    #[must_use]
    pub fn ids(&self, category: BookingCategory) -> &[u32] {
        match category {
            BookingCategory::Event => &self.confirmed_events,
            BookingCategory::Logistic => &self.booked_logistics,
            BookingCategory::Equipment => &self.reserved_equipment,
            BookingCategory::Activity => &self.booked_activities,
        }
    }

    #[must_use]
    pub fn contains(&self, category: BookingCategory, id: u32) -> bool {
        self.ids(category).contains(&id)
    }

    /// True when nothing has been booked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.volcano_trek_booked && BookingCategory::ALL.iter().all(|c| self.ids(*c).is_empty())
    }

    /// Append `id` to `category` unless already present.
    /// Returns whether the state changed.
    pub fn insert(&mut self, category: BookingCategory, id: u32) -> bool {
        let ids = self.ids_mut(category);
        if ids.contains(&id) {
            return false;
        }
        ids.push(id);
        true
    }

    /// Set the trek flag. Returns whether the state changed.
    pub fn mark_volcano_trek(&mut self) -> bool {
        let changed = !self.volcano_trek_booked;
        self.volcano_trek_booked = true;
        changed
    }

    /// Apply `action`, returning whether the state changed.
    pub fn apply(&mut self, action: BookingAction) -> bool {
        match action {
            BookingAction::ConfirmEvent(id) => self.insert(BookingCategory::Event, id),
            BookingAction::BookLogistic(id) => self.insert(BookingCategory::Logistic, id),
            BookingAction::ReserveEquipment(id) => self.insert(BookingCategory::Equipment, id),
            BookingAction::BookActivity(id) => self.insert(BookingCategory::Activity, id),
            BookingAction::BookVolcanoTrek => self.mark_volcano_trek(),
        }
    }

    /// Drop repeated ids left by older or hand-edited snapshots, keeping the first occurrence.
    pub fn normalize(&mut self) {
        for category in BookingCategory::ALL {
            let ids = self.ids_mut(category);
            let mut seen = Vec::with_capacity(ids.len());
            ids.retain(|id| {
                if seen.contains(id) {
                    false
                } else {
                    seen.push(*id);
                    true
                }
            });
        }
    }

    fn ids_mut(&mut self, category: BookingCategory) -> &mut Vec<u32> {
        match category {
            BookingCategory::Event => &mut self.confirmed_events,
            BookingCategory::Logistic => &mut self.booked_logistics,
            BookingCategory::Equipment => &mut self.reserved_equipment,
            BookingCategory::Activity => &mut self.booked_activities,
        }
    }
}

/// Single source of truth for the user's bookings.
///
/// Every mutation that changes the state is written to the storage backend
/// before the call returns. Storage failures are logged and never surface to
/// the caller: the in-memory state stays authoritative.
#[derive(Debug, Clone)]
pub struct BookingStore<S> {
    state: BookingState,
    storage: S,
    last_save_failed: bool,
}

impl<S> BookingStore<S>
where
    S: BookingStorage,
{
    /// Open the store, rehydrating from `storage`.
    /// Missing or unreadable snapshots fall back to the empty state.
    pub fn open(storage: S) -> Self {
        let state = match storage.load() {
            Ok(Some(mut state)) => {
                state.normalize();
                log::info!("rehydrated booking snapshot");
                state
            }
            Ok(None) => {
                log::debug!("no booking snapshot found, starting empty");
                BookingState::default()
            }
            Err(err) => {
                log::warn!("discarding unreadable booking snapshot: {err}");
                BookingState::default()
            }
        };
        Self {
            state,
            storage,
            last_save_failed: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &BookingState {
        &self.state
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether the most recent write attempt was rejected by the backend.
    #[must_use]
    pub const fn last_save_failed(&self) -> bool {
        self.last_save_failed
    }

    /// Apply `action` and persist on change. Returns whether anything new was booked.
    pub fn apply(&mut self, action: BookingAction) -> bool {
        let changed = self.state.apply(action);
        if changed {
            log::debug!("booking applied: {action:?}");
            self.persist();
        }
        changed
    }

    pub fn confirm_event(&mut self, event_id: u32) -> bool {
        self.apply(BookingAction::ConfirmEvent(event_id))
    }

    pub fn book_logistic(&mut self, service_id: u32) -> bool {
        self.apply(BookingAction::BookLogistic(service_id))
    }

    pub fn reserve_equipment(&mut self, equipment_id: u32) -> bool {
        self.apply(BookingAction::ReserveEquipment(equipment_id))
    }

    pub fn book_activity(&mut self, activity_id: u32) -> bool {
        self.apply(BookingAction::BookActivity(activity_id))
    }

    pub fn book_volcano_trek(&mut self) -> bool {
        self.apply(BookingAction::BookVolcanoTrek)
    }

    #[must_use]
    pub fn is_event_confirmed(&self, event_id: u32) -> bool {
        self.state.contains(BookingCategory::Event, event_id)
    }

    #[must_use]
    pub fn is_logistic_booked(&self, service_id: u32) -> bool {
        self.state.contains(BookingCategory::Logistic, service_id)
    }

    #[must_use]
    pub fn is_equipment_reserved(&self, equipment_id: u32) -> bool {
        self.state.contains(BookingCategory::Equipment, equipment_id)
    }

    #[must_use]
    pub fn is_activity_booked(&self, activity_id: u32) -> bool {
        self.state.contains(BookingCategory::Activity, activity_id)
    }

    #[must_use]
    pub const fn is_volcano_trek_booked(&self) -> bool {
        self.state.volcano_trek_booked()
    }

    /// Journey entries for the current state using the bundled rule table.
    #[must_use]
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        TimelineProjector::default_projector().project(&self.state)
    }

    fn persist(&mut self) {
        match self.storage.save(&self.state) {
            Ok(()) => self.last_save_failed = false,
            Err(err) => {
                log::warn!("failed to save bookings, keeping in-memory state: {err}");
                self.last_save_failed = true;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MemoryStorageError {
    #[error("stored snapshot is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("write rejected: storage quota exceeded")]
    WriteRejected,
}

/// In-process storage slot holding the serialized snapshot.
///
/// Clones share the same slot, which lets tests reopen a store over the
/// data a previous store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with raw slot content, valid or not.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let storage = Self::default();
        *storage.slot.borrow_mut() = Some(raw.into());
        storage
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Make subsequent writes fail, as a full browser quota would.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl BookingStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn load(&self) -> Result<Option<BookingState>, Self::Error> {
        match self.slot.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &BookingState) -> Result<(), Self::Error> {
        if self.reject_writes.get() {
            return Err(MemoryStorageError::WriteRejected);
        }
        let raw = serde_json::to_string(state)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_event_is_idempotent() {
        let mut store = BookingStore::open(MemoryStorage::new());
        assert!(store.confirm_event(7));
        assert!(!store.confirm_event(7));
        assert_eq!(store.state().confirmed_events(), &[7]);
        assert!(store.is_event_confirmed(7));
    }

    #[test]
    fn categories_are_isolated() {
        let mut store = BookingStore::open(MemoryStorage::new());
        store.book_activity(1);
        assert!(store.is_activity_booked(1));
        assert!(!store.is_logistic_booked(1));
        assert!(!store.is_event_confirmed(1));
        assert!(!store.is_equipment_reserved(1));
        assert!(!store.is_volcano_trek_booked());
    }

    #[test]
    fn unknown_ids_are_accepted() {
        let mut store = BookingStore::open(MemoryStorage::new());
        assert!(store.reserve_equipment(9_999));
        assert!(store.is_equipment_reserved(9_999));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut state = BookingState::new();
        for id in [4, 2, 3, 2, 1] {
            state.insert(BookingCategory::Logistic, id);
        }
        assert_eq!(state.booked_logistics(), &[4, 2, 3, 1]);
    }

    #[test]
    fn volcano_trek_flag_sets_once() {
        let storage = MemoryStorage::new();
        let mut store = BookingStore::open(storage.clone());
        assert!(store.book_volcano_trek());
        let first_write = storage.raw();
        assert!(!store.book_volcano_trek());
        assert!(store.is_volcano_trek_booked());
        assert_eq!(storage.raw(), first_write);
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let mut state = BookingState::new();
        state.apply(BookingAction::ConfirmEvent(5));
        state.apply(BookingAction::BookVolcanoTrek);
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "confirmedEvents": [5],
                "bookedLogistics": [],
                "reservedEquipment": [],
                "bookedActivities": [],
                "volcanoTrekBooked": true,
            })
        );
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_empty() {
        let store = BookingStore::open(MemoryStorage::with_raw("{not json"));
        assert!(store.state().is_empty());
    }

    #[test]
    fn partial_snapshot_fills_missing_fields() {
        let store = BookingStore::open(MemoryStorage::with_raw(r#"{"bookedActivities":[3]}"#));
        assert!(store.is_activity_booked(3));
        assert!(store.state().confirmed_events().is_empty());
        assert!(!store.is_volcano_trek_booked());
    }

    #[test]
    fn rehydration_drops_duplicate_ids() {
        let raw = r#"{"confirmedEvents":[1,1,2,1],"bookedLogistics":[],"reservedEquipment":[],"bookedActivities":[],"volcanoTrekBooked":false}"#;
        let store = BookingStore::open(MemoryStorage::with_raw(raw));
        assert_eq!(store.state().confirmed_events(), &[1, 2]);
    }

    #[test]
    fn rejected_write_keeps_memory_state() {
        let storage = MemoryStorage::new();
        storage.set_reject_writes(true);
        let mut store = BookingStore::open(storage.clone());
        assert!(store.book_logistic(2));
        assert!(store.last_save_failed());
        assert!(store.is_logistic_booked(2));
        assert_eq!(storage.raw(), None);

        storage.set_reject_writes(false);
        assert!(store.book_logistic(3));
        assert!(!store.last_save_failed());
        let reopened = BookingStore::open(storage);
        assert_eq!(reopened.state().booked_logistics(), &[2, 3]);
    }

    #[test]
    fn empty_state_reports_empty() {
        let mut state = BookingState::new();
        assert!(state.is_empty());
        state.mark_volcano_trek();
        assert!(!state.is_empty());
    }
}
