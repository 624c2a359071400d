use deskaway_core::{
    Activity, ActivityFilter, ActivityType, BookingAction, BookingCategory, BookingState,
    DistanceBucket, DurationBucket, DurationSelection, FeaturedTrek,
};
use web_sys::HtmlSelectElement;
use yew::html::TargetCast;
use yew::prelude::*;

use super::volcano_trek_card::VolcanoTrekCard;
use crate::components::filter::{FacetFilter, FilterOption};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub activities: Vec<Activity>,
    pub trek: FeaturedTrek,
    pub bookings: BookingState,
    pub on_action: Callback<BookingAction>,
    /// Starting facet selection; the panel owns it afterwards.
    #[prop_or_default]
    pub initial_filter: ActivityFilter,
}

fn type_options() -> Vec<FilterOption> {
    ActivityType::ALL
        .iter()
        .map(|t| FilterOption::new(t.label(), t.label()))
        .collect()
}

fn distance_options() -> Vec<FilterOption> {
    DistanceBucket::ALL
        .iter()
        .map(|d| FilterOption::new(d.label(), d.label()))
        .collect()
}

fn selected_values<T: ToString>(values: &[T]) -> Vec<AttrValue> {
    values.iter().map(|v| AttrValue::from(v.to_string())).collect()
}

fn activity_card(activity: &Activity, booked: bool, on_action: &Callback<BookingAction>) -> Html {
    let onclick = {
        let cb = on_action.clone();
        let id = activity.id;
        Callback::from(move |_| {
            if !booked {
                cb.emit(BookingAction::BookActivity(id));
            }
        })
    };
    let cta = if booked {
        "Booked ✓"
    } else if activity.price.is_free() {
        "Explore"
    } else {
        "Book Now"
    };
    html! {
        <article key={activity.id.to_string()} class="card bg-base-100 p-4" data-activity-id={activity.id.to_string()}>
            <div class="flex justify-between">
                <h4 class="font-semibold">{ activity.name.clone() }</h4>
                <span class="badge">{ activity.category.clone() }</span>
            </div>
            <p class="text-sm opacity-70">
                { format!("{} • {} km • {}", activity.duration.display_name(), activity.distance_km, activity.work_vibe) }
            </p>
            <div class="flex items-center justify-between mt-2">
                <span class="font-bold">{ activity.price.to_string() }</span>
                <button type="button" class="btn btn-sm" disabled={booked} {onclick}>{ cta }</button>
            </div>
        </article>
    }
}

/// Leisure browser: three facet controls over the activity list, plus the trek.
#[function_component(ActivitiesPanel)]
pub fn activities_panel(p: &Props) -> Html {
    let filter = {
        let initial = p.initial_filter.clone();
        use_state(move || initial)
    };

    let on_duration = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(selection) = select.value().parse::<DurationSelection>() {
                let mut next = (*filter).clone();
                next.set_duration(selection);
                filter.set(next);
            }
        })
    };
    let on_type = {
        let filter = filter.clone();
        Callback::from(move |value: AttrValue| {
            if let Ok(activity_type) = value.parse::<ActivityType>() {
                let mut next = (*filter).clone();
                next.toggle_type(activity_type);
                filter.set(next);
            }
        })
    };
    let on_distance = {
        let filter = filter.clone();
        Callback::from(move |value: AttrValue| {
            if let Ok(bucket) = value.parse::<DistanceBucket>() {
                let mut next = (*filter).clone();
                next.toggle_distance(bucket);
                filter.set(next);
            }
        })
    };
    let on_clear = {
        let filter = filter.clone();
        Callback::from(move |_| {
            let mut next = (*filter).clone();
            next.clear();
            filter.set(next);
        })
    };

    let visible = filter.apply(&p.activities);
    let current_duration = filter.duration();

    html! {
        <section class="space-y-6" aria-labelledby="leisure-title" data-testid="activities-panel">
            <h2 id="leisure-title" class="text-3xl font-display font-bold">{ "Leisure & Lombok" }</h2>
            <div class="flex flex-wrap gap-4 items-center">
                <label class="form-control">
                    <span class="label-text">{ "Time available" }</span>
                    <select id="duration-filter" class="select select-bordered select-sm" onchange={on_duration}>
                        <option value="all" selected={current_duration == DurationSelection::All}>{ "Any time" }</option>
                        { for DurationBucket::ALL.iter().map(|bucket| html! {
                            <option value={bucket.label()} selected={current_duration == DurationSelection::Only(*bucket)}>
                                { bucket.display_name() }
                            </option>
                        }) }
                    </select>
                </label>
                <FacetFilter label="Activity type" options={type_options()} selected={selected_values(filter.types())} on_toggle={on_type} />
                <FacetFilter label="Distance" options={distance_options()} selected={selected_values(filter.distances())} on_toggle={on_distance} />
                if !filter.is_unrestricted() {
                    <button type="button" id="clear-filters" class="btn btn-ghost btn-sm" onclick={on_clear}>{ "Clear filters" }</button>
                }
            </div>
            <p class="text-sm opacity-70" aria-live="polite">
                { format!("Showing {} of {} activities", visible.len(), p.activities.len()) }
            </p>
            if visible.is_empty() {
                <p class="empty-state" data-testid="no-activities">{ "No activities match these filters." }</p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    { for visible.iter().map(|activity| {
                        let booked = p.bookings.contains(BookingCategory::Activity, activity.id);
                        activity_card(activity, booked, &p.on_action)
                    }) }
                </div>
            }
            <VolcanoTrekCard trek={p.trek.clone()} booked={p.bookings.volcano_trek_booked()} on_action={p.on_action.clone()} />
        </section>
    }
}
