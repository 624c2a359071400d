use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center p-6 text-sm opacity-70">
            <p>{ "© DeskAway. Work from anywhere, belong somewhere." }</p>
        </footer>
    }
}
