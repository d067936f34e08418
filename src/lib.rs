//! Monnify hosted checkout for Yew.
//!
//! Wrap your app in [`MonnifyCheckoutProvider`], grab a [`CheckoutHandle`]
//! with [`use_monnify_checkout`], and call `open` with a [`CheckoutRequest`].
//! The request is validated, rendered into a small document that loads the
//! Monnify Web SDK inside a modal frame, and resolved through exactly one of
//! its `on_success` / `on_close` / `on_error` callbacks.

mod checkout_component;
pub mod components;
mod config;
pub mod document;
mod error;
mod interop;
mod relay;
mod session;
mod toast;
mod types;
mod validate;

pub use checkout_component::*;
pub use config::*;
pub use document::{placeholder_document, render_document};
pub use error::*;
pub use interop::*;
pub use relay::*;
pub use session::*;
pub use toast::*;
pub use types::*;
pub use validate::*;
