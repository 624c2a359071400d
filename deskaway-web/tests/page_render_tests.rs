use deskaway_core::{BookingAction, BookingState, Catalog};
use deskaway_web::components::waitlist_form::{self, FinalWaitlistForm, QuickWaitlistForm};
use deskaway_web::pages::{
    dashboard::{DashboardPage, DashboardPageProps},
    home::{HomePage, HomePageProps},
    not_found::{NotFound, Props as NotFoundProps},
};
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn dashboard_props(bookings: BookingState, notice: Option<&'static str>) -> DashboardPageProps {
    DashboardPageProps {
        bookings,
        catalog: Catalog::default_catalog().clone(),
        on_action: Callback::noop(),
        notice: notice.map(AttrValue::from),
        display_name: AttrValue::from("Alex"),
    }
}

#[test]
fn home_page_renders_both_waitlist_forms() {
    let props = HomePageProps {
        on_open_dashboard: Callback::noop(),
        on_waitlist: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("home-screen"));
    assert!(html.contains("open-dashboard"));
    assert!(html.contains("id=\"quick-waitlist\""));
    assert!(html.contains("id=\"final-waitlist\""));
    assert!(html.contains("Chiang Mai, Thailand"));
}

#[test]
fn waitlist_forms_show_thank_you_once_submitted() {
    let props = waitlist_form::Props {
        on_submit: Callback::noop(),
        now: Callback::from(|()| "2026-01-01T00:00:00Z".to_string()),
        submitted: true,
    };
    let html = block_on(LocalServerRenderer::<QuickWaitlistForm>::with_props(props.clone()).render());
    assert!(html.contains("on the list!"));
    assert!(!html.contains("quick-waitlist"));

    let html = block_on(LocalServerRenderer::<FinalWaitlistForm>::with_props(props).render());
    assert!(html.contains("Welcome aboard!"));
    assert!(!html.contains("final-full-name"));
}

#[test]
fn dashboard_page_starts_with_welcome_entry() {
    let props = dashboard_props(BookingState::new(), None);
    let html = block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render());
    assert!(html.contains("dashboard-screen"));
    assert!(html.contains("Welcome back, Alex"));
    assert!(html.contains("data-entry-id=\"welcome\""));
    assert!(html.contains("events-panel"));
    assert!(html.contains("logistics-panel"));
    assert!(html.contains("equipment-panel"));
    assert!(html.contains("activities-panel"));
    assert!(!html.contains("booking-notice"));
}

#[test]
fn dashboard_page_projects_bookings_and_notice() {
    let mut bookings = BookingState::new();
    bookings.apply(BookingAction::ConfirmEvent(1));
    bookings.apply(BookingAction::BookVolcanoTrek);
    let props = dashboard_props(bookings, Some("Volcano Trek booked!"));
    let html = block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render());
    assert!(html.contains("data-entry-id=\"event-1\""));
    assert!(html.contains("data-entry-id=\"volcano-trek\""));
    assert!(!html.contains("data-entry-id=\"welcome\""));
    assert!(html.contains("booking-notice"));
}

#[test]
fn not_found_offers_way_home() {
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Lost at sea"));
    assert!(html.contains("Back to home"));
}
