//! The checkout provider your app wraps around anything that needs to take payments.
//!
//! `MonnifyCheckoutProvider` owns one [`CheckoutSession`], a toast, and the
//! modal that hosts the Monnify checkout frame. Descendants reach it through
//! [`use_monnify_checkout`], which hands back a [`CheckoutHandle`]. There is no
//! global instance: each provider serves only its own subtree.

use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::JsValue;
use web_sys::{HtmlIFrameElement, KeyboardEvent, MessageEvent};
use yew::functional::{hook, use_force_update, UseForceUpdateHandle};
use yew::prelude::*;

use crate::components::{CloseBar, LoadingIndicator, Toast};
use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, RelayError};
use crate::interop::{use_window_event, ToastHandle};
use crate::relay::RelayMessage;
use crate::session::{CheckoutSession, Resolution};
use crate::toast::{ToastOptions, ToastPosition, ToastState};
use crate::types::CheckoutRequest;

/// Properties for [`MonnifyCheckoutProvider`].
///
/// * `api_key` – Your Monnify API key (`MK_PROD_…` / `MK_TEST_…`). Always
///   takes precedence over `config.api_key`.
/// * `config` – SDK location, poll timing and document title overrides.
/// * `children` – The part of your app that may open a checkout.
#[derive(Properties, PartialEq)]
pub struct MonnifyCheckoutProviderProps {
    pub api_key: AttrValue,
    #[prop_or_default]
    pub config: Option<CheckoutConfig>,
    #[prop_or_default]
    pub children: Children,
}

/// The capability handed to descendants of [`MonnifyCheckoutProvider`].
#[derive(Clone, PartialEq)]
pub struct CheckoutHandle {
    open: Callback<(CheckoutRequest, Option<ToastPosition>)>,
}

impl CheckoutHandle {
    /// Validate `request` and present the checkout.
    ///
    /// Returns immediately. If the request is invalid, or a checkout is
    /// already on screen, an error toast is shown at `placement`
    /// (default: bottom) and nothing else happens.
    pub fn open(&self, request: CheckoutRequest, placement: Option<ToastPosition>) {
        self.open.emit((request, placement));
    }
}

/// Yew function component providing the checkout capability to its children.
///
/// # Example
///
/// ```rust,ignore
/// use yew::prelude::*;
/// use yew_monnify::{
///     use_monnify_checkout, CheckoutFailure, CheckoutParams, CheckoutRequest, CheckoutResponse,
///     MonnifyCheckoutProvider,
/// };
///
/// #[function_component(PayButton)]
/// fn pay_button() -> Html {
///     let checkout = use_monnify_checkout();
///     let onclick = Callback::from(move |_| {
///         let params = CheckoutParams::new(100.0, "John", "johndoe@example.com", "5867418298")
///             .with_currency("NGN")
///             .with_payment_description("Need");
///         let request = CheckoutRequest::new(params)
///             .on_success(Callback::from(|res: CheckoutResponse| log::info!("paid {}", res.transaction_reference)))
///             .on_close(Callback::from(|_| log::info!("closed")))
///             .on_error(Callback::from(|err: CheckoutFailure| log::error!("{}", err.message)));
///         checkout.open(request, None);
///     });
///     html! { <button {onclick}>{ "Pay" }</button> }
/// }
///
/// #[function_component(App)]
/// fn app() -> Html {
///     html! {
///         <MonnifyCheckoutProvider api_key="MK_TEST_GC3B8XG2XX">
///             <PayButton />
///         </MonnifyCheckoutProvider>
///     }
/// }
/// ```
///
/// # Dismissal
///
/// The "Close" bar, the Escape key and a click on the backdrop all end the
/// session with `on_close(None)`. A later message from the frame for the same
/// session is ignored, so `on_close` never fires twice.
///
/// # Errors
///
/// Load failures reported by the frame's own `error` event are only logged.
/// An SDK that never becomes ready is reported through `on_error` once the
/// configured poll limit is reached.
#[function_component(MonnifyCheckoutProvider)]
pub fn monnify_checkout_provider(props: &MonnifyCheckoutProviderProps) -> Html {
    let config = use_memo(
        (props.api_key.clone(), props.config.clone()),
        |(api_key, config)| {
            let config = config
                .clone()
                .unwrap_or_else(|| CheckoutConfig::new(api_key.as_str()));
            CheckoutConfig {
                api_key: api_key.to_string(),
                ..config
            }
        },
    );
    {
        let config = config.clone();
        use_effect_with(config, |config| {
            if config.is_test_mode() {
                log::info!("Monnify checkout running against the sandbox");
            }
            || ()
        });
    }

    let session = use_mut_ref(CheckoutSession::new);
    let rerender = use_force_update();
    let toast = use_reducer(ToastState::default);
    let toast_handle = ToastHandle::new(toast.dispatcher());
    let loading = use_state_eq(|| true);
    let frame_ref = use_node_ref();
    let backdrop_ref = use_node_ref();

    let open = {
        let session = session.clone();
        let rerender = rerender.clone();
        let loading = loading.clone();
        let toast_handle = toast_handle.clone();
        use_callback(
            (),
            move |(request, placement): (CheckoutRequest, Option<ToastPosition>), _| {
                let opened = session.borrow_mut().open(request);
                match opened {
                    Ok(()) => {
                        loading.set(true);
                        rerender.force_update();
                    }
                    Err(err) => {
                        let options = ToastOptions::error(placement.unwrap_or_default());
                        toast_handle.show(err.to_string(), options);
                    }
                }
            },
        )
    };

    let dismiss = {
        let session = session.clone();
        let rerender = rerender.clone();
        use_callback((), move |_: (), _| {
            let resolution = session.borrow_mut().dismiss();
            settle(&rerender, resolution);
        })
    };

    let on_message = {
        let session = session.clone();
        let rerender = rerender.clone();
        let frame_ref = frame_ref.clone();
        use_callback((), move |event: MessageEvent, _| {
            if !is_from_frame(&frame_ref, &event) {
                return;
            }
            let message = match decode_message(&event) {
                Ok(message) => message,
                Err(err) => {
                    log::warn!("{err}");
                    return;
                }
            };
            let resolution = session.borrow_mut().relay(message);
            settle(&rerender, resolution);
        })
    };
    use_window_event("message", on_message);

    let on_keydown = {
        let session = session.clone();
        let dismiss = dismiss.clone();
        use_callback((), move |event: KeyboardEvent, _| {
            if event.key() == "Escape" && session.borrow().modal_visible() {
                dismiss.emit(());
            }
        })
    };
    use_window_event("keydown", on_keydown);

    let handle = CheckoutHandle { open };

    let modal = if session.borrow().modal_visible() {
        let document = session.borrow().document(&config);

        let on_close = dismiss.reform(|_: MouseEvent| ());
        let on_backdrop = {
            let dismiss = dismiss.clone();
            let backdrop_ref = backdrop_ref.clone();
            Callback::from(move |event: MouseEvent| {
                if is_backdrop_click(&backdrop_ref, &event) {
                    dismiss.emit(());
                }
            })
        };
        let on_load = {
            let loading = loading.clone();
            Callback::from(move |_: Event| loading.set(false))
        };
        let on_error = Callback::from(|event: Event| {
            log::error!("checkout frame error: {}", event.type_());
        });

        html! {
            <div
                ref={backdrop_ref.clone()}
                role="dialog"
                aria-modal="true"
                onclick={on_backdrop}
                style="position: fixed; inset: 0; z-index: 9000; background: rgba(0, 0, 0, 0.4); display: flex; justify-content: center;"
            >
                <div style="display: flex; flex-direction: column; width: 100%; max-width: 520px; height: 100%; background: white;">
                    <CloseBar {on_close} />
                    <div style="position: relative; flex: 1;">
                        <iframe
                            ref={frame_ref.clone()}
                            title={config.title.clone()}
                            srcdoc={document}
                            allow="payment"
                            onload={on_load}
                            onerror={on_error}
                            style="border: none; width: 100%; height: 100%;"
                        />
                        if *loading {
                            <LoadingIndicator />
                        }
                    </div>
                </div>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <ContextProvider<CheckoutHandle> context={handle}>
            <ContextProvider<ToastHandle> context={toast_handle.clone()}>
                { for props.children.iter() }
                { modal }
                <Toast state={(*toast).clone()} handle={toast_handle} />
            </ContextProvider<ToastHandle>>
        </ContextProvider<CheckoutHandle>>
    }
}

/// Every terminal transition funnels through here: state first, callback after.
fn settle(rerender: &UseForceUpdateHandle, resolution: Option<Resolution>) {
    if let Some(resolution) = resolution {
        rerender.force_update();
        resolution.notify();
    }
}

/// Only messages posted by our own checkout frame are relayed.
fn is_from_frame(frame_ref: &NodeRef, event: &MessageEvent) -> bool {
    let Some(frame_window) = frame_ref
        .cast::<HtmlIFrameElement>()
        .and_then(|frame| frame.content_window())
    else {
        return false;
    };
    event
        .source()
        .map_or(false, |source| JsValue::from(source) == JsValue::from(frame_window))
}

/// Yew delegates listeners to the app root, so `current_target` is never the
/// backdrop itself; compare the click target against the backdrop node.
fn is_backdrop_click(backdrop_ref: &NodeRef, event: &MouseEvent) -> bool {
    match (backdrop_ref.get(), event.target()) {
        (Some(backdrop), Some(target)) => JsValue::from(backdrop) == JsValue::from(target),
        _ => false,
    }
}

fn decode_message(event: &MessageEvent) -> Result<RelayMessage, RelayError> {
    let data = event.data();
    match data.as_string() {
        Some(raw) => RelayMessage::parse(&raw),
        None => {
            let value: serde_json::Value = data.into_serde()?;
            RelayMessage::from_value(value)
        }
    }
}

/// Checkout capability of the enclosing provider, or
/// [`CheckoutError::OutsideProvider`] when there is none.
#[hook]
pub fn use_monnify_checkout_result() -> Result<CheckoutHandle, CheckoutError> {
    use_context::<CheckoutHandle>().ok_or(CheckoutError::OutsideProvider)
}

/// Checkout capability of the enclosing provider.
///
/// # Panics
///
/// Panics when called outside a [`MonnifyCheckoutProvider`]; that is a wiring
/// mistake, not a runtime condition.
#[hook]
pub fn use_monnify_checkout() -> CheckoutHandle {
    match use_monnify_checkout_result() {
        Ok(handle) => handle,
        Err(err) => panic!("{err}"),
    }
}
