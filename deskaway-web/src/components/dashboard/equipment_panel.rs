use deskaway_core::{BookingAction, BookingCategory, BookingState, EquipmentItem};
use yew::prelude::*;

/// Static readings shown above the marketplace.
pub const SYSTEM_STATUS: [(&str, &str); 3] =
    [("Main Grid", "OK"), ("Battery", "85%"), ("ISP", "150Mbps")];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<EquipmentItem>,
    pub bookings: BookingState,
    pub on_action: Callback<BookingAction>,
}

/// Workplace suite: system status and the equipment rental marketplace.
#[function_component(EquipmentPanel)]
pub fn equipment_panel(p: &Props) -> Html {
    html! {
        <section class="space-y-6" aria-labelledby="workplace-title" data-testid="equipment-panel">
            <h3 id="workplace-title" class="text-xl font-display">{ "Workplace Suite" }</h3>
            <div class="flex flex-wrap gap-3" role="list" aria-label="System Status">
                { for SYSTEM_STATUS.iter().map(|(label, status)| html! {
                    <span class="badge badge-outline" role="listitem">
                        <span class="font-medium">{ format!("{label}:") }</span>
                        <span class="text-success">{ *status }</span>
                    </span>
                }) }
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                { for p.items.iter().map(|item| {
                    let reserved = p.bookings.contains(BookingCategory::Equipment, item.id);
                    let onclick = {
                        let cb = p.on_action.clone();
                        let id = item.id;
                        Callback::from(move |_| {
                            if !reserved {
                                cb.emit(BookingAction::ReserveEquipment(id));
                            }
                        })
                    };
                    html! {
                        <article class="card bg-base-100 p-4" data-equipment-id={item.id.to_string()}>
                            <h5 class="font-medium">{ item.name.clone() }</h5>
                            <p class="text-sm opacity-70">{ format!("{} / {}", item.price, item.duration) }</p>
                            <button type="button" class="btn btn-accent btn-sm w-full" disabled={reserved} {onclick}>
                                { if reserved { "Reserved ✓" } else { "Rent Now" } }
                            </button>
                        </article>
                    }
                }) }
            </div>
        </section>
    }
}
