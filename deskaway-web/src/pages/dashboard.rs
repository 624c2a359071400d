use deskaway_core::{BookingAction, BookingState, Catalog, TimelineProjector};
use yew::prelude::*;

use crate::components::dashboard::activities_panel::ActivitiesPanel;
use crate::components::dashboard::equipment_panel::EquipmentPanel;
use crate::components::dashboard::events_panel::EventsPanel;
use crate::components::dashboard::logistics_panel::LogisticsPanel;
use crate::components::timeline::JourneyTimeline;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardPageProps {
    pub bookings: BookingState,
    pub catalog: Catalog,
    pub on_action: Callback<BookingAction>,
    #[prop_or_default]
    pub notice: Option<AttrValue>,
    #[prop_or(AttrValue::from("there"))]
    pub display_name: AttrValue,
}

/// Message shown after `action` books something new.
#[must_use]
pub fn confirmation_message(action: BookingAction, catalog: &Catalog) -> String {
    match action {
        BookingAction::ConfirmEvent(id) => catalog.event(id).map_or_else(
            || "You're in! 🌴".to_string(),
            |event| format!("You're in! 🌴 See you {} at {}", event.date, event.time),
        ),
        BookingAction::BookLogistic(id) => catalog.logistic(id).map_or_else(
            || "Sorted! 🛵".to_string(),
            |service| format!("{} sorted! 🛵 {}", service.label, service.tagline),
        ),
        BookingAction::ReserveEquipment(id) => catalog.equipment(id).map_or_else(
            || "Equipment reserved".to_string(),
            |item| format!("{} reserved for {}", item.name, item.duration),
        ),
        BookingAction::BookActivity(id) => catalog.activity(id).map_or_else(
            || "Activity booked!".to_string(),
            |activity| {
                if activity.price.is_free() {
                    format!("{} booked! Free experience", activity.name)
                } else {
                    format!("{} booked! Price: {}", activity.name, activity.price)
                }
            },
        ),
        BookingAction::BookVolcanoTrek => format!(
            "{} booked! Full-day adventure to Mount Rinjani • {}",
            catalog.volcano_trek.title, catalog.volcano_trek.price
        ),
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let timeline = TimelineProjector::default_projector().project(&props.bookings);
    let catalog = &props.catalog;

    html! {
        <div class="dashboard min-h-screen" data-testid="dashboard-screen">
            <div class="text-center mb-14">
                <span class="badge">{ "Your workation command center" }</span>
                <h1 class="text-5xl font-display font-bold">{ format!("Welcome back, {}", props.display_name) }</h1>
                <p class="text-lg opacity-70">
                    { "Manage your stays, discover experiences, and optimize your remote work environment" }
                </p>
            </div>
            if let Some(notice) = props.notice.clone() {
                <div class="alert alert-success" role="status" data-testid="booking-notice">{ notice }</div>
            }
            <section class="max-w-5xl mx-auto" aria-label="Crafted Experiences">
                <div class="grid lg:grid-cols-2 gap-6 mb-10">
                    <EventsPanel events={catalog.events.clone()} bookings={props.bookings.clone()} on_action={props.on_action.clone()} />
                    <LogisticsPanel services={catalog.logistics.clone()} bookings={props.bookings.clone()} on_action={props.on_action.clone()} />
                </div>
                <JourneyTimeline entries={timeline} />
            </section>
            <EquipmentPanel items={catalog.equipment.clone()} bookings={props.bookings.clone()} on_action={props.on_action.clone()} />
            <ActivitiesPanel
                activities={catalog.activities.clone()}
                trek={catalog.volcano_trek.clone()}
                bookings={props.bookings.clone()}
                on_action={props.on_action.clone()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_catalog_details() {
        let catalog = Catalog::default_catalog();
        assert_eq!(
            confirmation_message(BookingAction::ConfirmEvent(1), catalog),
            "You're in! 🌴 See you Jan 27 at 7:00 PM"
        );
        assert_eq!(
            confirmation_message(BookingAction::BookLogistic(2), catalog),
            "Island Wheels sorted! 🛵 Freedom awaits"
        );
        assert_eq!(
            confirmation_message(BookingAction::BookActivity(6), catalog),
            "Rinjani Trek booked! Price: $"
        );
        assert_eq!(
            confirmation_message(BookingAction::BookActivity(1), catalog),
            "Kuta Cabana booked! Free experience"
        );
        assert!(confirmation_message(BookingAction::BookVolcanoTrek, catalog).ends_with("$50"));
    }

    #[test]
    fn unknown_ids_get_generic_messages() {
        let catalog = Catalog::default_catalog();
        assert_eq!(
            confirmation_message(BookingAction::ReserveEquipment(77), catalog),
            "Equipment reserved"
        );
    }
}
