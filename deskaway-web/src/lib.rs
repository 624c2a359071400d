#![forbid(unsafe_code)]
//! DeskAway web front-end: the landing page with waitlist sign-up and the
//! workation dashboard, rendered with Yew over the `deskaway-core` store.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod pages;
pub mod paths;
pub mod router;
pub mod storage;
pub mod waitlist;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
