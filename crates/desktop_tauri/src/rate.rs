//! Managed controller state and rating command handlers.

use std::sync::{Mutex, MutexGuard};

use app_rate::{OpenOutcome, PromptOutcome, RateController};
use futures::executor::block_on;
use serde::Serialize;

use crate::{TauriConfirmDialogService, TauriExternalUrlService};

/// Controller shared between command invocations.
#[derive(Debug, Default)]
pub struct RateState {
    controller: Mutex<RateController>,
}

impl RateState {
    /// Wraps a configured controller.
    pub fn new(controller: RateController) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RateController>, String> {
        self.controller
            .lock()
            .map_err(|_| "rate controller lock poisoned".to_string())
    }

    /// Returns a copy of the current controller so it can be used off the command thread.
    pub fn snapshot(&self) -> Result<RateController, String> {
        Ok(self.lock()?.clone())
    }

    /// Replaces the store identifier.
    pub fn set_store_identifier(&self, id: String) -> Result<(), String> {
        self.lock()?.set_store_identifier(id);
        Ok(())
    }
}

/// Serializable result of an open or prompt command, as seen by the webview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PromptReport {
    /// The user declined the prompt.
    Declined,
    /// No usable store URL was configured, so nothing was opened.
    Skipped,
    /// The review page was opened.
    Opened {
        /// URL handed to the opener.
        url: String,
    },
}

impl From<OpenOutcome> for PromptReport {
    fn from(outcome: OpenOutcome) -> Self {
        match outcome {
            OpenOutcome::Opened(url) => Self::Opened { url: url.into() },
            OpenOutcome::Skipped => Self::Skipped,
        }
    }
}

impl From<PromptOutcome> for PromptReport {
    fn from(outcome: PromptOutcome) -> Self {
        match outcome {
            PromptOutcome::Declined => Self::Declined,
            PromptOutcome::Accepted(opened) => opened.into(),
        }
    }
}

/// Sets the store identifier used by later commands.
#[tauri::command]
pub fn rate_set_store_identifier(
    state: tauri::State<'_, RateState>,
    id: String,
) -> Result<(), String> {
    state.set_store_identifier(id)
}

/// Returns the review URL, or `null` when no usable identifier is configured.
#[tauri::command]
pub fn rate_store_url(state: tauri::State<'_, RateState>) -> Result<Option<String>, String> {
    Ok(state.lock()?.store_url().map(String::from))
}

/// Opens the review page without asking.
#[tauri::command]
pub async fn rate_open_store_page(
    app: tauri::AppHandle,
    state: tauri::State<'_, RateState>,
) -> Result<PromptReport, String> {
    let controller = state.snapshot()?;
    tauri::async_runtime::spawn_blocking(move || {
        let opener = TauriExternalUrlService::new(app);
        block_on(controller.open_store_page(&opener)).map(PromptReport::from)
    })
    .await
    .map_err(|err| format!("open task failed: {err}"))?
    .map_err(|err| err.to_string())
}

/// Shows the rating prompt and opens the review page on acceptance.
///
/// The native dialog blocks, so the prompt runs on a blocking worker rather than the main thread.
#[tauri::command]
pub async fn rate_show_prompt(
    app: tauri::AppHandle,
    state: tauri::State<'_, RateState>,
) -> Result<PromptReport, String> {
    let controller = state.snapshot()?;
    tauri::async_runtime::spawn_blocking(move || {
        let dialog = TauriConfirmDialogService::new(app.clone());
        let opener = TauriExternalUrlService::new(app);
        let outcome = block_on(controller.show_rate_prompt(&dialog, &opener));
        if let Err(err) = &outcome {
            tracing::warn!(error = %err, "rate prompt failed");
        }
        outcome.map(PromptReport::from)
    })
    .await
    .map_err(|err| format!("prompt task failed: {err}"))?
    .map_err(|err| err.to_string())
}
