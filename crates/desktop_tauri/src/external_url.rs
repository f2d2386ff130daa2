//! External URL adapter for desktop host integration.

use platform_host::{ExternalUrlFuture, ExternalUrlService};
use tauri_plugin_opener::OpenerExt;

/// Desktop URL opener backed by the Tauri opener plugin.
#[derive(Clone)]
pub struct TauriExternalUrlService {
    app: tauri::AppHandle,
}

impl TauriExternalUrlService {
    /// Wraps an application handle.
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }
}

impl ExternalUrlService for TauriExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.app
                .opener()
                .open_url(url, None::<String>)
                .map_err(|err| format!("external URL open failed: {err}"))
        })
    }
}
