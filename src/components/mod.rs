use std::time::Duration;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::interop::ToastHandle;
use crate::toast::{
    ToastAction, ToastPhase, ToastPosition, ToastState, ENTER_DURATION, EXIT_DURATION,
};

/// Header strip above the checkout frame with a single "Close" control.
#[derive(Properties, PartialEq)]
pub struct CloseBarProps {
    /// Click handler
    pub on_close: Callback<MouseEvent>,
    /// Label text
    #[prop_or(AttrValue::Static("Close"))]
    pub label: AttrValue,
}

#[function_component(CloseBar)]
pub fn close_bar(props: &CloseBarProps) -> Html {
    html! {
        <div style="padding: 10px; border-bottom: 1px solid lightgray;">
            <button
                type="button"
                onclick={props.on_close.clone()}
                style="background: none; border: none; padding: 0; color: red; font-size: 16px; cursor: pointer;"
            >
                { &props.label }
            </button>
        </div>
    }
}

/// Centered spinner shown while the checkout frame loads.
#[function_component(LoadingIndicator)]
pub fn loading_indicator() -> Html {
    html! {
        <div
            role="progressbar"
            aria-label="Loading checkout"
            style="position: absolute; inset: 0; display: flex; justify-content: center; align-items: center; background: white;"
        >
            <style>
                { "@keyframes monnify-spin { to { transform: rotate(360deg); } }" }
            </style>
            <div style="width: 36px; height: 36px; border: 4px solid #e5e7eb; border-top-color: #3b82f6; border-radius: 50%; animation: monnify-spin 0.8s linear infinite;" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    /// Current toast state, owned by the provider's reducer.
    pub state: ToastState,
    /// Dispatches timer and tap actions back to that reducer.
    pub handle: ToastHandle,
}

/// Renders the provider's toast and drives its phase timers.
///
/// Exactly one timer is live at a time. It belongs to the current
/// `(phase, cycle)` pair and is dropped (cancelled) as soon as either changes.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let state = &props.state;

    {
        let handle = props.handle.clone();
        let dwell = state.options.duration;
        use_effect_with((state.phase, state.cycle), move |&(phase, cycle)| {
            let timer = match phase {
                ToastPhase::Appearing => Some(Timeout::new(millis(ENTER_DURATION), move || {
                    handle.dispatch(ToastAction::Entered { cycle })
                })),
                ToastPhase::Visible => Some(Timeout::new(millis(dwell), move || {
                    handle.dispatch(ToastAction::Dismiss { cycle })
                })),
                ToastPhase::Dismissing => Some(Timeout::new(millis(EXIT_DURATION), move || {
                    handle.dispatch(ToastAction::Exited { cycle })
                })),
                ToastPhase::Hidden => None,
            };
            move || drop(timer)
        });
    }

    if !state.is_shown() {
        return Html::default();
    }

    let onclick = {
        let handle = props.handle.clone();
        Callback::from(move |_: MouseEvent| handle.hide())
    };

    html! {
        <div
            key={state.cycle.to_string()}
            role="status"
            aria-live="polite"
            {onclick}
            style={container_style(state.options.position)}
        >
            <style>{ toast_keyframes() }</style>
            <div style={toast_style(state)}>
                <span style="display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden;">
                    { &state.message }
                </span>
            </div>
        </div>
    }
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

const POSITIONS: [ToastPosition; 3] = [ToastPosition::Top, ToastPosition::Center, ToastPosition::Bottom];

/// Entrance and exit keyframes for every position.
pub(crate) fn toast_keyframes() -> String {
    POSITIONS
        .iter()
        .map(|position| {
            format!(
                "@keyframes monnify-toast-in-{name} {{ from {{ opacity: 0; transform: translateY({enter}px); }} to {{ opacity: 1; transform: translateY(0); }} }}\n\
                 @keyframes monnify-toast-out-{name} {{ from {{ opacity: 1; transform: translateY(0); }} to {{ opacity: 0; transform: translateY({exit}px); }} }}\n",
                name = position.as_str(),
                enter = position.entrance_offset(),
                exit = position.exit_offset(),
            )
        })
        .collect()
}

fn container_style(position: ToastPosition) -> String {
    let anchor = match position {
        ToastPosition::Top => "top: 16px;",
        ToastPosition::Center => "top: 50%; margin-top: -32px;",
        ToastPosition::Bottom => "bottom: 32px;",
    };
    format!(
        "position: fixed; left: 16px; right: 16px; z-index: 9999; display: flex; justify-content: center; cursor: pointer; {anchor}"
    )
}

pub(crate) fn toast_style(state: &ToastState) -> String {
    let animation = match state.phase {
        ToastPhase::Appearing => format!(
            "animation: monnify-toast-in-{} {}ms ease-out forwards;",
            state.options.position.as_str(),
            ENTER_DURATION.as_millis()
        ),
        ToastPhase::Dismissing => format!(
            "animation: monnify-toast-out-{} {}ms ease-in forwards;",
            state.options.position.as_str(),
            EXIT_DURATION.as_millis()
        ),
        ToastPhase::Visible | ToastPhase::Hidden => "opacity: 1;".to_string(),
    };
    format!(
        "background-color: {}; border-radius: 10px; padding: 12px 16px; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15); color: #fff; font-size: 14px; line-height: 20px; {}",
        state.options.kind.background(),
        animation
    )
}
