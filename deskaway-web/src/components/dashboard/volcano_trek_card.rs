use deskaway_core::{BookingAction, FeaturedTrek};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub trek: FeaturedTrek,
    pub booked: bool,
    pub on_action: Callback<BookingAction>,
}

#[function_component(VolcanoTrekCard)]
pub fn volcano_trek_card(p: &Props) -> Html {
    let booked = p.booked;
    let onclick = {
        let cb = p.on_action.clone();
        Callback::from(move |_| {
            if !booked {
                cb.emit(BookingAction::BookVolcanoTrek);
            }
        })
    };
    html! {
        <aside class="card bg-neutral text-neutral-content p-6" data-testid="volcano-trek">
            <h3 class="text-2xl font-display font-bold">{ p.trek.title.clone() }</h3>
            <p class="opacity-80">
                { if booked { "You're going! Your guide will be in touch.".to_string() } else { p.trek.description.clone() } }
            </p>
            <div class="flex items-center justify-between mt-4">
                <span class="text-3xl font-bold">{ p.trek.price.clone() }</span>
                <button type="button" class="btn btn-warning" disabled={booked} {onclick}>
                    { if booked { "Booked ✓" } else { "Book the Trek" } }
                </button>
            </div>
        </aside>
    }
}
