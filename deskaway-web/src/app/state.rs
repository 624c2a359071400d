use deskaway_core::{BookingAction, BookingStorage, BookingStore, Catalog};

use crate::pages::dashboard::confirmation_message;

/// Notice appended when the browser refuses the write.
pub const UNSAVED_NOTICE: &str = "Saved for this visit only; we couldn't store it on this device.";

/// Apply a dashboard action to a copy of `store`.
///
/// Returns the updated store plus the confirmation notice, or `None` when the
/// action booked nothing new.
pub fn apply_action<S>(
    store: &BookingStore<S>,
    action: BookingAction,
    catalog: &Catalog,
) -> (BookingStore<S>, Option<String>)
where
    S: BookingStorage + Clone,
{
    let mut next = store.clone();
    if !next.apply(action) {
        return (next, None);
    }
    let mut notice = confirmation_message(action, catalog);
    if next.last_save_failed() {
        notice.push(' ');
        notice.push_str(UNSAVED_NOTICE);
    }
    (next, Some(notice))
}

#[cfg(target_arch = "wasm32")]
pub use hooks::{DashboardState, use_dashboard_state};

#[cfg(target_arch = "wasm32")]
mod hooks {
    use deskaway_core::{BookingAction, BookingStore, Catalog};
    use yew::prelude::*;

    use crate::storage::{WebBookingStorage, open_web_store};

    #[derive(Clone)]
    pub struct DashboardState {
        pub store: UseStateHandle<BookingStore<WebBookingStorage>>,
        pub notice: UseStateHandle<Option<AttrValue>>,
        pub on_action: Callback<BookingAction>,
    }

    #[hook]
    pub fn use_dashboard_state() -> DashboardState {
        let store = use_state(open_web_store);
        let notice = use_state(|| None::<AttrValue>);
        let on_action = {
            let store = store.clone();
            let notice = notice.clone();
            Callback::from(move |action: BookingAction| {
                let (next, message) = super::apply_action(&store, action, Catalog::default_catalog());
                if let Some(message) = message {
                    notice.set(Some(AttrValue::from(message)));
                }
                store.set(next);
            })
        };
        DashboardState {
            store,
            notice,
            on_action,
        }
    }
}
