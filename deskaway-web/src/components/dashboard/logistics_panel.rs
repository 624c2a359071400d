use deskaway_core::{BookingAction, BookingCategory, BookingState, LogisticsService};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub services: Vec<LogisticsService>,
    pub bookings: BookingState,
    pub on_action: Callback<BookingAction>,
}

#[function_component(LogisticsPanel)]
pub fn logistics_panel(p: &Props) -> Html {
    html! {
        <section class="card bg-base-200 p-6" aria-labelledby="logistics-title" data-testid="logistics-panel">
            <h3 id="logistics-title" class="text-lg font-display font-semibold">{ "Island Essentials" }</h3>
            <p class="text-sm opacity-70">{ "Life, simplified" }</p>
            <div class="grid grid-cols-2 gap-3 mt-4">
                { for p.services.iter().map(|service| {
                    let booked = p.bookings.contains(BookingCategory::Logistic, service.id);
                    let onclick = {
                        let cb = p.on_action.clone();
                        let id = service.id;
                        Callback::from(move |_| {
                            if !booked {
                                cb.emit(BookingAction::BookLogistic(id));
                            }
                        })
                    };
                    html! {
                        <button type="button" class="card bg-base-100 p-4 text-left" data-service-id={service.id.to_string()} disabled={booked} {onclick}>
                            <span class="font-medium text-sm">
                                { if booked { "Sorted! ✨".to_string() } else { service.label.clone() } }
                            </span>
                            <span class="text-xs opacity-70">{ service.price.clone() }</span>
                        </button>
                    }
                }) }
            </div>
        </section>
    }
}
