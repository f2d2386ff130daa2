//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The confirmation dialog is `window.confirm` and external URLs go through `window.open`. On
//! native targets the adapters compile to inert fallbacks so the crate can be tested anywhere.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod dialog;
pub mod external_url;

pub use adapters::{
    build_host_services, confirm_dialog_service, external_url_service, host_capabilities,
    selected_host_strategy, ConfirmDialogServiceAdapter, ExternalUrlServiceAdapter,
};
pub use dialog::WebConfirmDialogService;
pub use external_url::WebExternalUrlService;
