// src/lib.rs
use serde_json::{json, Map};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_monnify::{
    use_monnify_checkout, use_toast, CheckoutFailure, CheckoutParams, CheckoutRequest,
    CheckoutResponse, CloseEvent, MonnifyCheckoutProvider, PaymentMethod, ToastKind,
    ToastOptions, ToastPosition,
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <MonnifyCheckoutProvider api_key="MK_TEST_GC3B8XG2XX">
            <BasicCheckout />
        </MonnifyCheckoutProvider>
    }
}

#[function_component(BasicCheckout)]
fn basic_checkout() -> Html {
    let checkout = use_monnify_checkout();
    let toast = use_toast();
    let status = use_state(|| None::<String>);

    let on_click = {
        let status = status.clone();
        Callback::from(move |amount: f64| {
            let mut metadata = Map::new();
            metadata.insert("cart".into(), json!(["rice", "beans"]));

            // Millisecond timestamp makes a unique enough reference for a demo.
            let reference = date_now().to_string();
            let params = CheckoutParams::new(amount, "John", "johndoe@example.com", "5867418298")
                .with_currency("NGN")
                .with_reference(reference)
                .with_payment_description("Need")
                .with_payment_methods([PaymentMethod::Card, PaymentMethod::Ussd])
                .with_metadata(metadata);

            let on_success = {
                let status = status.clone();
                let toast = toast.clone();
                Callback::from(move |res: CheckoutResponse| {
                    log::info!("payment complete: {:?}", res);
                    status.set(Some(format!("Paid {} ({})", res.amount_paid, res.transaction_reference)));
                    if let Some(toast) = &toast {
                        toast.show(
                            "Payment received",
                            ToastOptions {
                                kind: ToastKind::Success,
                                position: ToastPosition::Top,
                                ..ToastOptions::default()
                            },
                        );
                    }
                })
            };
            let on_close = {
                let status = status.clone();
                Callback::from(move |event: Option<CloseEvent>| {
                    log::info!("checkout closed: {:?}", event);
                    status.set(Some("Checkout closed".into()));
                })
            };
            let on_error = {
                let status = status.clone();
                Callback::from(move |err: CheckoutFailure| {
                    log::error!("checkout failed: {}", err.message);
                    status.set(Some(err.message));
                })
            };

            let request = CheckoutRequest::new(params)
                .on_success(on_success)
                .on_close(on_close)
                .on_error(on_error);
            checkout.open(request, Some(ToastPosition::Bottom));
        })
    };

    html! {
        <div style="display: flex; flex-direction: column; gap: 1rem; align-items: center; padding: 2rem;">
            <button onclick={on_click.reform(|_: MouseEvent| 100.0)}>{ "Open Checkout" }</button>
            // Amount 0 is rejected by validation and only shows an error toast.
            <button onclick={on_click.reform(|_: MouseEvent| 0.0)}>{ "Open Invalid Checkout" }</button>
            {
                if let Some(msg) = &*status {
                    html! { <p>{ msg.clone() }</p> }
                } else {
                    Html::default()
                }
            }
        </div>
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}
