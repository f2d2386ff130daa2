//! Shared host-bundle and capability models for browser, desktop, and terminal composition.

use std::rc::Rc;

use crate::{
    ConfirmDialogService, ExternalUrlService, NoopConfirmDialogService, NoopExternalUrlService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition.
    Browser,
    /// Tauri-hosted desktop composition.
    DesktopTauri,
    /// Interactive terminal composition.
    Terminal,
    /// Placeholder/no-op adapters.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::DesktopTauri => "desktop-tauri",
            Self::Terminal => "terminal",
            Self::Stub => "stub",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not implemented or not supported on the active host.
    Unavailable,
    /// Capability exists but remains disabled until explicit host/user activation.
    RequiresUserActivation,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Typed error describing capability-level rejection before a host operation executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The host does not support the requested capability.
    Unavailable {
        /// Stable capability identifier used in diagnostics.
        capability: &'static str,
    },
    /// The capability requires an explicit user activation or permission grant first.
    RequiresUserActivation {
        /// Stable capability identifier used in diagnostics.
        capability: &'static str,
    },
}

impl CapabilityError {
    /// Returns a stable capability label for diagnostics.
    pub const fn capability(&self) -> &'static str {
        match self {
            Self::Unavailable { capability } | Self::RequiresUserActivation { capability } => {
                capability
            }
        }
    }

    /// Converts a non-available status into the matching error.
    pub const fn check(
        capability: &'static str,
        status: CapabilityStatus,
    ) -> Result<(), CapabilityError> {
        match status {
            CapabilityStatus::Available => Ok(()),
            CapabilityStatus::Unavailable => Err(Self::Unavailable { capability }),
            CapabilityStatus::RequiresUserActivation => {
                Err(Self::RequiresUserActivation { capability })
            }
        }
    }
}

impl std::fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { capability } => write!(f, "capability unavailable: {capability}"),
            Self::RequiresUserActivation { capability } => {
                write!(f, "capability requires user activation: {capability}")
            }
        }
    }
}

impl std::error::Error for CapabilityError {}

/// Host capability snapshot consulted before a prompt is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Modal confirmation dialog availability.
    pub dialogs: CapabilityStatus,
    /// External URL opening availability.
    pub external_urls: CapabilityStatus,
}

impl HostCapabilities {
    /// Capability label for dialog presentation.
    pub const DIALOGS: &'static str = "dialogs";
    /// Capability label for external URL opening.
    pub const EXTERNAL_URLS: &'static str = "external_urls";

    /// Browser-default capability posture.
    ///
    /// Popup blockers only let `window.open` through inside a user gesture; the dialog answer
    /// counts as one, so the opener is reported as available.
    pub const fn browser() -> Self {
        Self {
            dialogs: CapabilityStatus::Available,
            external_urls: CapabilityStatus::Available,
        }
    }

    /// Desktop Tauri capability posture.
    pub const fn desktop_tauri() -> Self {
        Self {
            dialogs: CapabilityStatus::Available,
            external_urls: CapabilityStatus::Available,
        }
    }

    /// Interactive terminal capability posture.
    pub const fn terminal() -> Self {
        Self {
            dialogs: CapabilityStatus::Available,
            external_urls: CapabilityStatus::Available,
        }
    }

    /// Stub capability posture.
    pub const fn stub() -> Self {
        Self {
            dialogs: CapabilityStatus::Unavailable,
            external_urls: CapabilityStatus::Unavailable,
        }
    }

    /// Fails with the first capability a rating prompt needs that is not available.
    pub fn require_prompt(&self) -> Result<(), CapabilityError> {
        CapabilityError::check(Self::DIALOGS, self.dialogs)?;
        CapabilityError::check(Self::EXTERNAL_URLS, self.external_urls)
    }
}

/// Host service bundle injected into the rating controller's prompt flow.
#[derive(Clone)]
pub struct HostServices {
    /// Host UI context used to present the confirmation dialog.
    pub dialogs: Rc<dyn ConfirmDialogService>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Host availability snapshot for optional capability domains.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics and policy.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a stub bundle whose services do nothing and whose capabilities are unavailable.
    pub fn stub() -> Self {
        Self {
            dialogs: Rc::new(NoopConfirmDialogService),
            external_urls: Rc::new(NoopExternalUrlService),
            capabilities: HostCapabilities::stub(),
            host_strategy: HostStrategy::Stub,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("capabilities", &self.capabilities)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_requirement_reports_first_missing_capability() {
        assert_eq!(
            HostCapabilities::stub().require_prompt(),
            Err(CapabilityError::Unavailable {
                capability: HostCapabilities::DIALOGS
            })
        );
        let gated = HostCapabilities {
            external_urls: CapabilityStatus::RequiresUserActivation,
            ..HostCapabilities::browser()
        };
        assert_eq!(
            gated.require_prompt(),
            Err(CapabilityError::RequiresUserActivation {
                capability: HostCapabilities::EXTERNAL_URLS
            })
        );
        assert_eq!(HostCapabilities::desktop_tauri().require_prompt(), Ok(()));
    }

    #[test]
    fn capability_errors_render_their_label() {
        let err = CapabilityError::Unavailable {
            capability: "dialogs",
        };
        assert_eq!(err.capability(), "dialogs");
        assert_eq!(err.to_string(), "capability unavailable: dialogs");
    }

    #[test]
    fn strategy_tokens_are_stable() {
        assert_eq!(HostStrategy::DesktopTauri.as_str(), "desktop-tauri");
        assert_eq!(HostStrategy::Terminal.as_str(), "terminal");
        assert_eq!(HostServices::stub().host_strategy.as_str(), "stub");
    }
}
