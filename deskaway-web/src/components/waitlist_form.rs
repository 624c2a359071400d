use deskaway_core::{WaitlistError, WaitlistSubmission};
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

/// Locations teased on the quick sign-up form.
pub const UPCOMING_LOCATIONS: [&str; 4] = [
    "Chiang Mai, Thailand",
    "Lisbon, Portugal",
    "Medellín, Colombia",
    "Cape Town, South Africa",
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_submit: Callback<WaitlistSubmission>,
    /// Clock used to stamp submissions.
    #[prop_or(Callback::from(|()| crate::dom::now_iso()))]
    pub now: Callback<(), String>,
    #[prop_or_default]
    pub submitted: bool,
}

fn text_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

fn error_line(error: &Option<WaitlistError>) -> Html {
    error.as_ref().map_or_else(Html::default, |err| {
        html! { <p class="text-error text-sm" role="alert">{ err.to_string() }</p> }
    })
}

fn thank_you(heading: &'static str) -> Html {
    html! {
        <div class="waitlist-done" role="status">
            <h3 class="font-display font-semibold">{ heading }</h3>
            <p class="text-sm opacity-80">{ "We'll be in touch as soon as new stays open." }</p>
        </div>
    }
}

/// Email-only "be first in new locations" form.
#[function_component(QuickWaitlistForm)]
pub fn quick_waitlist_form(p: &Props) -> Html {
    let email = use_state(String::new);
    let destination = use_state(|| None::<&'static str>);
    let error = use_state(|| None::<WaitlistError>);
    let done = use_state(|| p.submitted);

    if *done {
        return thank_you("You're on the list!");
    }

    let onsubmit = {
        let email = email.clone();
        let destination = destination.clone();
        let error = error.clone();
        let done = done.clone();
        let on_submit = p.on_submit.clone();
        let now = p.now.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match WaitlistSubmission::quick(&email, *destination, now.emit(())) {
                Ok(submission) => {
                    on_submit.emit(submission);
                    email.set(String::new());
                    error.set(None);
                    done.set(true);
                }
                Err(err) => error.set(Some(err)),
            }
        })
    };

    html! {
        <section class="waitlist bg-primary text-primary-content p-8" aria-labelledby="waitlist-title">
            <span class="badge">{ "Beta Testing" }</span>
            <h2 id="waitlist-title" class="text-3xl font-display font-bold">{ "Be first in new locations" }</h2>
            <div class="flex flex-wrap gap-3" role="group" aria-label="Upcoming locations">
                { for UPCOMING_LOCATIONS.iter().map(|location| {
                    let picked = *destination == Some(*location);
                    let onclick = {
                        let destination = destination.clone();
                        let location = *location;
                        Callback::from(move |_| {
                            destination.set(if picked { None } else { Some(location) });
                        })
                    };
                    html! {
                        <button type="button" class="badge badge-outline" aria-pressed={picked.to_string()} {onclick}>{ *location }</button>
                    }
                }) }
            </div>
            <form id="quick-waitlist" {onsubmit}>
                <input type="email" name="email" placeholder="Enter your email" value={(*email).clone()} oninput={text_input(&email)} />
                <button type="submit" class="btn">{ "Join Waitlist" }</button>
                { error_line(&error) }
            </form>
        </section>
    }
}

/// Closing form with full name, email, and an updates opt-in.
#[function_component(FinalWaitlistForm)]
pub fn final_waitlist_form(p: &Props) -> Html {
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let wants_updates = use_state(|| false);
    let error = use_state(|| None::<WaitlistError>);
    let done = use_state(|| p.submitted);

    if *done {
        return thank_you("Welcome aboard!");
    }

    let on_updates = {
        let wants_updates = wants_updates.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            wants_updates.set(input.checked());
        })
    };
    let onsubmit = {
        let full_name = full_name.clone();
        let email = email.clone();
        let wants_updates = wants_updates.clone();
        let error = error.clone();
        let done = done.clone();
        let on_submit = p.on_submit.clone();
        let now = p.now.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match WaitlistSubmission::full(&full_name, &email, *wants_updates, now.emit(())) {
                Ok(submission) => {
                    on_submit.emit(submission);
                    full_name.set(String::new());
                    email.set(String::new());
                    error.set(None);
                    done.set(true);
                }
                Err(err) => error.set(Some(err)),
            }
        })
    };

    html! {
        <section class="final-waitlist bg-secondary p-8" aria-labelledby="final-waitlist-title">
            <h2 id="final-waitlist-title" class="text-2xl font-display font-bold">{ "Where will you work next?" }</h2>
            <form id="final-waitlist" class="space-y-4" {onsubmit}>
                <label for="final-full-name">{ "Full Name" }</label>
                <input id="final-full-name" type="text" placeholder="Your full name" value={(*full_name).clone()} oninput={text_input(&full_name)} />
                <label for="final-email">{ "Email Address" }</label>
                <input id="final-email" type="email" placeholder="you@example.com" value={(*email).clone()} oninput={text_input(&email)} />
                <label class="label cursor-pointer gap-2">
                    <input id="final-updates" type="checkbox" class="checkbox" checked={*wants_updates} onchange={on_updates} />
                    <span>{ "Send me updates about new locations" }</span>
                </label>
                <button type="submit" class="btn btn-primary w-full">{ "Join the Waitlist" }</button>
                { error_line(&error) }
            </form>
        </section>
    }
}
