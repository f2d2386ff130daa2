use std::rc::Rc;

use platform_host::{
    ConfirmDialogService, ConfirmRequest, DialogChoice, DialogFuture, ExternalUrlFuture,
    ExternalUrlService, HostCapabilities, HostServices, HostStrategy, NoopConfirmDialogService,
    NoopExternalUrlService,
};

use crate::{WebConfirmDialogService, WebExternalUrlService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Adapter enum that erases the concrete dialog backend behind [`ConfirmDialogService`].
#[derive(Debug, Clone, Copy)]
pub enum ConfirmDialogServiceAdapter {
    /// Browser `window.confirm` dialog.
    Browser(WebConfirmDialogService),
    /// No-op fallback that always declines.
    Stub(NoopConfirmDialogService),
}

impl ConfirmDialogService for ConfirmDialogServiceAdapter {
    fn confirm<'a>(
        &'a self,
        request: &'a ConfirmRequest,
    ) -> DialogFuture<'a, Result<DialogChoice, String>> {
        match self {
            Self::Browser(service) => service.confirm(request),
            Self::Stub(service) => service.confirm(request),
        }
    }
}

/// Adapter enum that erases the concrete URL opener behind [`ExternalUrlService`].
#[derive(Debug, Clone, Copy)]
pub enum ExternalUrlServiceAdapter {
    /// Browser `window.open` navigation.
    Browser(WebExternalUrlService),
    /// No-op fallback.
    Stub(NoopExternalUrlService),
}

impl ExternalUrlService for ExternalUrlServiceAdapter {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.open_url(url),
            Self::Stub(service) => service.open_url(url),
        }
    }
}

/// Builds the dialog adapter for the compile-time selected host strategy.
pub fn confirm_dialog_service() -> ConfirmDialogServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ConfirmDialogServiceAdapter::Browser(WebConfirmDialogService),
        _ => ConfirmDialogServiceAdapter::Stub(NoopConfirmDialogService),
    }
}

/// Builds the external-URL adapter for the compile-time selected host strategy.
pub fn external_url_service() -> ExternalUrlServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ExternalUrlServiceAdapter::Browser(WebExternalUrlService),
        _ => ExternalUrlServiceAdapter::Stub(NoopExternalUrlService),
    }
}

/// Returns the capability posture for the compile-time selected host strategy.
pub fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(),
        _ => HostCapabilities::stub(),
    }
}

/// Builds the host service bundle for the compile-time selected host strategy.
pub fn build_host_services() -> HostServices {
    HostServices {
        dialogs: Rc::new(confirm_dialog_service()),
        external_urls: Rc::new(external_url_service()),
        capabilities: host_capabilities(),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "host-stub"))]
    #[test]
    fn default_build_selects_browser_adapters() {
        let host = build_host_services();
        assert_eq!(host.host_strategy, HostStrategy::Browser);
        assert_eq!(host.capabilities.require_prompt(), Ok(()));
        assert!(matches!(
            confirm_dialog_service(),
            ConfirmDialogServiceAdapter::Browser(_)
        ));
    }

    #[cfg(feature = "host-stub")]
    #[test]
    fn stub_build_selects_noop_adapters() {
        let host = build_host_services();
        assert_eq!(host.host_strategy, HostStrategy::Stub);
        assert!(host.capabilities.require_prompt().is_err());
    }
}
