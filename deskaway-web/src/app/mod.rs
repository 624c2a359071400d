#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod state;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    use crate::components::{footer::Footer, header::Header};
    use crate::pages::{dashboard::DashboardPage, home::HomePage, not_found::NotFound};
    use deskaway_core::Catalog;

    let dashboard = state::use_dashboard_state();
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    let go = Callback::from(move |target: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&target);
        }
    });
    let on_waitlist = Callback::from(crate::waitlist::submit_waitlist);

    let body = match route.clone() {
        Route::Home => html! {
            <HomePage on_open_dashboard={go.reform(|()| Route::Dashboard)} {on_waitlist} />
        },
        Route::Dashboard => html! {
            <DashboardPage
                bookings={dashboard.store.state().clone()}
                catalog={Catalog::default_catalog().clone()}
                on_action={dashboard.on_action.clone()}
                notice={(*dashboard.notice).clone()}
            />
        },
        Route::NotFound => html! { <NotFound on_go_home={go.reform(|()| Route::Home)} /> },
    };

    html! {
        <>
            <Header current={route} on_navigate={go} />
            <main id="main" class="container mx-auto px-4 py-10">{ body }</main>
            <Footer />
        </>
    }
}
