//! DeskAway Dashboard Core
//!
//! Platform-agnostic logic behind the DeskAway workation dashboard: the
//! persisted booking store, the journey timeline derived from it, the static
//! service catalogs, and the faceted activity filter.
//! This crate has no browser or filesystem dependencies; front-ends plug in a
//! [`BookingStorage`] backend.

pub mod activities;
pub mod booking;
pub mod catalog;
pub mod timeline;
pub mod waitlist;

pub use activities::{
    Activity, ActivityFilter, ActivityType, BestTime, DistanceBucket, DurationBucket,
    DurationSelection, FacetParseError, Price,
};
pub use booking::{
    BookingAction, BookingCategory, BookingState, BookingStore, MemoryStorage, MemoryStorageError,
};
pub use catalog::{Catalog, CatalogError, EquipmentItem, EventListing, FeaturedTrek, LogisticsService};
pub use timeline::{BookingCheck, TimelineEntry, TimelineProjector, TimelineRule, TimelineStatus};
pub use waitlist::{WaitlistError, WaitlistSource, WaitlistSubmission, is_email_valid};

/// Storage slot every backend reads and writes the booking snapshot under.
pub const BOOKINGS_STORAGE_KEY: &str = "deskaway_dashboard_bookings";

/// Trait for abstracting the durable booking snapshot slot.
/// Platform-specific implementations should provide this
pub trait BookingStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the persisted snapshot, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or its content does not parse.
    fn load(&self) -> Result<Option<BookingState>, Self::Error>;

    /// Overwrite the slot with the given snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be serialized or written.
    fn save(&self, state: &BookingState) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingStorage {
        writes: Rc<RefCell<Vec<BookingState>>>,
    }

    impl BookingStorage for RecordingStorage {
        type Error = Infallible;

        fn load(&self) -> Result<Option<BookingState>, Self::Error> {
            Ok(self.writes.borrow().last().cloned())
        }

        fn save(&self, state: &BookingState) -> Result<(), Self::Error> {
            self.writes.borrow_mut().push(state.clone());
            Ok(())
        }
    }

    #[test]
    fn store_writes_through_custom_backend() {
        let storage = RecordingStorage::default();
        let mut store = BookingStore::open(storage.clone());
        assert!(store.confirm_event(1));
        assert!(store.book_volcano_trek());
        assert_eq!(storage.writes.borrow().len(), 2);

        let reopened = BookingStore::open(storage);
        assert!(reopened.is_event_confirmed(1));
        assert!(reopened.state().volcano_trek_booked());
    }

    #[test]
    fn storage_key_matches_dashboard_slot() {
        assert_eq!(BOOKINGS_STORAGE_KEY, "deskaway_dashboard_bookings");
    }
}
