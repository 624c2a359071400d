use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let nav_button = |route: Route, label: &'static str, id: &'static str| {
        let cb = p.on_navigate.clone();
        let target = route.clone();
        let onclick = Callback::from(move |_| cb.emit(target.clone()));
        let current = (p.current == route).then_some("page");
        html! {
            <button id={id} class="btn btn-ghost btn-sm" aria-current={current} {onclick}>{ label }</button>
        }
    };
    html! {
        <header role="banner" class="navbar bg-base-100 shadow-sm">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="navbar-start">
                <span class="text-xl font-display font-bold">{ "DeskAway" }</span>
            </div>
            <nav aria-label="Main" class="navbar-end gap-2">
                { nav_button(Route::Home, "Home", "nav-home") }
                { nav_button(Route::Dashboard, "Dashboard", "nav-dashboard") }
            </nav>
        </header>
    }
}
