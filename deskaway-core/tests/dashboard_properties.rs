use deskaway_core::{
    Activity, ActivityFilter, ActivityType, BookingAction, BookingStorage, BookingStore, Catalog,
    DistanceBucket, DurationBucket, DurationSelection, MemoryStorage, Price, TimelineStatus,
};

fn sample_ids(filter: &ActivityFilter) -> Vec<u32> {
    filter
        .apply(&Catalog::default_catalog().activities)
        .iter()
        .map(|a| a.id)
        .collect()
}

fn distances(activities: &[&Activity]) -> Vec<f64> {
    activities.iter().map(|a| a.distance_km).collect()
}

#[test]
fn sample_catalog_distances_match_fixture() {
    let catalog = Catalog::default_catalog();
    let all: Vec<&Activity> = catalog.activities.iter().collect();
    assert_eq!(distances(&all), vec![0.4, 4.2, 1.8, 0.9, 0.5, 45.0]);
}

#[test]
fn confirm_twice_matches_confirm_once() {
    let mut once = BookingStore::open(MemoryStorage::new());
    once.confirm_event(4);
    let mut twice = BookingStore::open(MemoryStorage::new());
    twice.confirm_event(4);
    twice.confirm_event(4);
    assert_eq!(once.state(), twice.state());
    assert!(twice.is_event_confirmed(4));
}

#[test]
fn persisted_snapshot_rehydrates_in_fresh_store() {
    let storage = MemoryStorage::new();
    let mut store = BookingStore::open(storage.clone());
    store.confirm_event(5);

    let raw = storage.raw().expect("snapshot written");
    let reopened = BookingStore::open(MemoryStorage::with_raw(raw));
    assert!(reopened.is_event_confirmed(5));
    assert_eq!(storage.load().unwrap().as_ref(), Some(store.state()));
}

#[test]
fn no_action_sequence_unbooks_anything() {
    let actions = [
        BookingAction::BookActivity(1),
        BookingAction::ConfirmEvent(2),
        BookingAction::BookActivity(1),
        BookingAction::BookVolcanoTrek,
        BookingAction::ReserveEquipment(3),
        BookingAction::BookLogistic(4),
        BookingAction::ConfirmEvent(2),
        BookingAction::BookVolcanoTrek,
    ];
    let mut store = BookingStore::open(MemoryStorage::new());
    let mut applied = Vec::new();
    for action in actions {
        store.apply(action);
        applied.push(action);
        for seen in &applied {
            let held = match *seen {
                BookingAction::ConfirmEvent(id) => store.is_event_confirmed(id),
                BookingAction::BookLogistic(id) => store.is_logistic_booked(id),
                BookingAction::ReserveEquipment(id) => store.is_equipment_reserved(id),
                BookingAction::BookActivity(id) => store.is_activity_booked(id),
                BookingAction::BookVolcanoTrek => store.is_volcano_trek_booked(),
            };
            assert!(held, "{seen:?} lost after {action:?}");
        }
    }
}

#[test]
fn fresh_store_timeline_is_welcome_sentinel() {
    let store = BookingStore::open(MemoryStorage::new());
    let timeline = store.timeline();
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0].id, "welcome");
}

#[test]
fn confirming_first_event_replaces_sentinel() {
    let mut store = BookingStore::open(MemoryStorage::new());
    store.confirm_event(1);
    let timeline = store.timeline();
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0].id, "event-1");
    assert_eq!(timeline[0].status, TimelineStatus::Confirmed);
}

#[test]
fn out_of_table_ids_are_tracked_but_not_projected() {
    let mut store = BookingStore::open(MemoryStorage::new());
    store.confirm_event(1);
    store.book_logistic(99);
    assert!(store.is_logistic_booked(99));
    let ids: Vec<String> = store.timeline().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["event-1".to_string()]);
}

#[test]
fn distance_facet_selects_by_bucket() {
    let mut filter = ActivityFilter::new();
    filter.toggle_distance(DistanceBucket::UnderOneKm);
    let catalog = Catalog::default_catalog();
    assert_eq!(distances(&filter.apply(&catalog.activities)), vec![0.4, 0.9, 0.5]);

    let mut filter = ActivityFilter::new();
    filter.toggle_distance(DistanceBucket::OneToFiveKm);
    assert_eq!(distances(&filter.apply(&catalog.activities)), vec![4.2, 1.8]);

    let mut with_boundary = catalog.activities.clone();
    with_boundary.push(Activity {
        id: 7,
        name: "Harbour Walk".to_string(),
        category: "Wellness".to_string(),
        activity_type: ActivityType::Wellness,
        best_time: Default::default(),
        duration: DurationBucket::UnderOneHour,
        work_vibe: String::new(),
        distance_km: 1.0,
        price: Price::Free,
    });
    let ids: Vec<u32> = filter.apply(&with_boundary).iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 3, 7]);
}

#[test]
fn empty_distance_facet_keeps_everything() {
    assert_eq!(sample_ids(&ActivityFilter::new()), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn physical_under_one_km_is_empty() {
    let mut filter = ActivityFilter::new();
    filter.toggle_type(ActivityType::Physical);
    filter.toggle_distance(DistanceBucket::UnderOneKm);
    assert!(sample_ids(&filter).is_empty());
}

#[test]
fn type_facet_ors_within_and_ands_across() {
    let mut filter = ActivityFilter::new();
    filter.toggle_type(ActivityType::Physical);
    filter.toggle_type(ActivityType::Eats);
    assert_eq!(sample_ids(&filter), vec![2, 5, 6]);

    filter.set_duration(DurationSelection::Only(DurationBucket::FullDay));
    assert_eq!(sample_ids(&filter), vec![2, 6]);

    filter.toggle_distance(DistanceBucket::OverFiveKm);
    assert_eq!(sample_ids(&filter), vec![6]);
}
