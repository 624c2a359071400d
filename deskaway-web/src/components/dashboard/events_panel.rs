use deskaway_core::{BookingAction, BookingCategory, BookingState, EventListing};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub events: Vec<EventListing>,
    pub bookings: BookingState,
    pub on_action: Callback<BookingAction>,
}

/// Weekly community events with an RSVP button each.
#[function_component(EventsPanel)]
pub fn events_panel(p: &Props) -> Html {
    html! {
        <section class="card bg-base-200 p-6" aria-labelledby="events-title" data-testid="events-panel">
            <h3 id="events-title" class="text-lg font-display font-semibold">{ "Sunset Gatherings" }</h3>
            <p class="text-sm opacity-70">{ "Where nomads become family" }</p>
            <div class="space-y-4 mt-4">
                { for p.events.iter().map(|event| {
                    let confirmed = p.bookings.contains(BookingCategory::Event, event.id);
                    let onclick = {
                        let cb = p.on_action.clone();
                        let id = event.id;
                        Callback::from(move |_| {
                            if !confirmed {
                                cb.emit(BookingAction::ConfirmEvent(id));
                            }
                        })
                    };
                    html! {
                        <article class="card bg-base-100 p-4" data-event-id={event.id.to_string()}>
                            <h4 class="font-display font-semibold">{ event.title.clone() }</h4>
                            <p class="text-sm opacity-70">{ format!("{} • {}", event.date, event.time) }</p>
                            <p class="text-sm italic">{ format!("\"{}\"", event.tagline) }</p>
                            <button type="button" class="btn btn-primary w-full" disabled={confirmed} {onclick}>
                                { if confirmed { "I'm in! See you there ✨" } else { "Count me in" } }
                            </button>
                        </article>
                    }
                }) }
            </div>
        </section>
    }
}
