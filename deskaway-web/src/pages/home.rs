use deskaway_core::WaitlistSubmission;
use yew::prelude::*;

use crate::components::waitlist_form::{FinalWaitlistForm, QuickWaitlistForm};

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub on_open_dashboard: Callback<()>,
    pub on_waitlist: Callback<WaitlistSubmission>,
}

/// Landing page: brand hero and the two waitlist forms.
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let open_dashboard = {
        let cb = props.on_open_dashboard.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="landing" data-testid="home-screen">
            <section class="hero min-h-[60vh] bg-base-200">
                <div class="hero-content text-center flex-col">
                    <h1 class="text-5xl font-display font-bold">{ "Work from paradise. Belong from day one." }</h1>
                    <p class="text-lg opacity-80">{ "Work-ready stays, a community of nomads, and everything sorted before you land." }</p>
                    <button id="open-dashboard" type="button" class="btn btn-primary" onclick={open_dashboard}>
                        { "Open your dashboard" }
                    </button>
                </div>
            </section>
            <QuickWaitlistForm on_submit={props.on_waitlist.clone()} />
            <FinalWaitlistForm on_submit={props.on_waitlist.clone()} />
        </div>
    }
}
