//! Typed host-domain contracts shared by the rating controller and its host adapters.
//!
//! This crate is the API-first boundary for the two platform capabilities a rating prompt needs:
//! presenting a confirmation dialog and handing a URL to the operating system. Browser adapters
//! live in `platform_host_web`, terminal adapters in `app_rate_cli`, and desktop transport stays
//! behind `desktop_tauri`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dialog;
pub mod external_url;
pub mod host;

pub use dialog::{
    ConfirmDialogService, ConfirmRequest, DialogChoice, DialogFuture, NoopConfirmDialogService,
    ScriptedConfirmDialogService,
};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use host::{CapabilityError, CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
