#![cfg(target_arch = "wasm32")]

use deskaway_core::{BOOKINGS_STORAGE_KEY, BookingStorage};
use wasm_bindgen_test::*;

use deskaway_web::dom;
use deskaway_web::storage::{WebBookingStorage, WebStorageError, open_web_store};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn reset_slot(raw: Option<&str>) {
    let storage = dom::local_storage().expect("localStorage");
    match raw {
        Some(raw) => storage.set_item(BOOKINGS_STORAGE_KEY, raw).expect("seed slot"),
        None => storage.remove_item(BOOKINGS_STORAGE_KEY).expect("clear slot"),
    }
}

fn raw_slot() -> Option<String> {
    dom::local_storage()
        .expect("localStorage")
        .get_item(BOOKINGS_STORAGE_KEY)
        .expect("read slot")
}

#[wasm_bindgen_test]
fn corrupt_slot_opens_empty() {
    reset_slot(Some("{not json"));
    assert!(matches!(
        WebBookingStorage.load(),
        Err(WebStorageError::Serialization(_))
    ));
    let store = open_web_store();
    assert!(store.state().is_empty());
    reset_slot(None);
}

#[wasm_bindgen_test]
fn booking_writes_camel_case_snapshot() {
    reset_slot(None);
    let mut store = open_web_store();
    assert!(store.confirm_event(5));
    assert!(!store.last_save_failed());

    let raw = raw_slot().expect("snapshot written");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json snapshot");
    assert_eq!(value["confirmedEvents"], serde_json::json!([5]));
    assert_eq!(value["bookedLogistics"], serde_json::json!([]));
    assert_eq!(value["volcanoTrekBooked"], false);
    reset_slot(None);
}

#[wasm_bindgen_test]
fn reopened_store_rehydrates_bookings() {
    reset_slot(None);
    {
        let mut store = open_web_store();
        store.confirm_event(5);
        store.book_volcano_trek();
    }
    let reopened = open_web_store();
    assert!(reopened.is_event_confirmed(5));
    assert!(reopened.is_volcano_trek_booked());
    assert!(!reopened.is_logistic_booked(5));
    reset_slot(None);
}

#[wasm_bindgen_test]
fn missing_slot_loads_nothing() {
    reset_slot(None);
    assert!(WebBookingStorage.load().expect("load").is_none());
    assert!(raw_slot().is_none());
}
