//! Browser `localStorage` backend for the booking store

use deskaway_core::{BOOKINGS_STORAGE_KEY, BookingState, BookingStorage, BookingStore};

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WebStorageError {
    fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        Self::Storage(dom::js_error_message(value))
    }
}

/// Booking snapshot kept under [`BOOKINGS_STORAGE_KEY`] in `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebBookingStorage;

impl BookingStorage for WebBookingStorage {
    type Error = WebStorageError;

    fn load(&self) -> Result<Option<BookingState>, Self::Error> {
        let storage = dom::local_storage().map_err(|e| WebStorageError::from_js(&e))?;
        let raw = storage
            .get_item(BOOKINGS_STORAGE_KEY)
            .map_err(|e| WebStorageError::from_js(&e))?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &BookingState) -> Result<(), Self::Error> {
        let raw = serde_json::to_string(state)?;
        dom::local_storage()
            .and_then(|storage| storage.set_item(BOOKINGS_STORAGE_KEY, &raw))
            .map_err(|e| WebStorageError::from_js(&e))
    }
}

/// Open the dashboard store over the browser slot.
#[must_use]
pub fn open_web_store() -> BookingStore<WebBookingStorage> {
    BookingStore::open(WebBookingStorage)
}
