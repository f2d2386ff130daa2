//! Tauri desktop host for the rating prompt.
//!
//! Command registration is kept local to this crate so the application shell only has to call
//! [`register`] on its builder; the controller itself stays free of Tauri types.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod dialog;
mod external_url;
#[doc(hidden)]
pub mod rate;

use app_rate::RateController;

pub use dialog::TauriConfirmDialogService;
pub use external_url::TauriExternalUrlService;
pub use rate::{PromptReport, RateState};

/// IPC commands registered by [`register`], for the application's capability file.
///
/// The webview gets no generic URL opener; only the computed review URL can be opened.
pub const COMMANDS: &[&str] = &[
    "rate_set_store_identifier",
    "rate_store_url",
    "rate_open_store_page",
    "rate_show_prompt",
];

/// Installs the dialog and opener plugins, the managed controller, and the rating commands.
pub fn register(
    builder: tauri::Builder<tauri::Wry>,
    controller: RateController,
) -> tauri::Builder<tauri::Wry> {
    builder
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .manage(RateState::new(controller))
        .invoke_handler(tauri::generate_handler![
            rate::rate_set_store_identifier,
            rate::rate_store_url,
            rate::rate_open_store_page,
            rate::rate_show_prompt
        ])
}
