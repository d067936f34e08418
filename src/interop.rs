//! Browser glue hooks: window event listeners and the toast handle.
//!
//! # Usage
//! ```rust,ignore
//! use yew::prelude::*;
//! use yew_monnify::{use_toast, ToastOptions};
//!
//! #[function_component(SaveButton)]
//! fn save_button() -> Html {
//!     let toast = use_toast();
//!     let onclick = Callback::from(move |_| {
//!         if let Some(toast) = &toast {
//!             toast.show("Saved", ToastOptions::default());
//!         }
//!     });
//!     html! { <button {onclick}>{ "Save" }</button> }
//! }
//! ```

use wasm_bindgen::{prelude::Closure, JsCast};
use yew::functional::hook;
use yew::prelude::*;

use crate::toast::{ToastAction, ToastOptions, ToastState};

/// Subscribe `callback` to `event` on `window` for as long as the calling
/// component is mounted (or until `callback` changes).
///
/// The listener is removed in the effect's teardown, so pass a stable
/// callback (e.g. from `use_callback`) to avoid re-registering every render.
#[hook]
pub fn use_window_event<E: JsCast + 'static>(event: &'static str, callback: Callback<E>) {
    use_effect_with(callback, move |callback| {
        let callback = callback.clone();
        let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |e: web_sys::Event| {
            callback.emit(e.unchecked_into::<E>());
        });

        let window = web_sys::window();
        if let Some(window) = &window {
            if let Err(err) =
                window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                log::error!("failed to listen for window {event} events: {err:?}");
            }
        }

        move || {
            if let Some(window) = window {
                let _ = window
                    .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
            drop(listener);
        }
    });
}

/// Imperative access to the provider's toast.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastState>,
}

impl ToastHandle {
    pub(crate) fn new(dispatcher: UseReducerDispatcher<ToastState>) -> Self {
        Self { dispatcher }
    }

    /// Show `message`, replacing any toast already on screen.
    pub fn show(&self, message: impl Into<String>, options: ToastOptions) {
        self.dispatch(ToastAction::Show {
            message: message.into(),
            options,
        });
    }

    /// Start dismissing the current toast, if any.
    pub fn hide(&self) {
        self.dispatch(ToastAction::Hide);
    }

    pub(crate) fn dispatch(&self, action: ToastAction) {
        self.dispatcher.dispatch(action);
    }
}

/// The toast of the enclosing `MonnifyCheckoutProvider`, if there is one.
#[hook]
pub fn use_toast() -> Option<ToastHandle> {
    use_context::<ToastHandle>()
}
