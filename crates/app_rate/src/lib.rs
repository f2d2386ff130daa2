//! Rating prompt controller for applications distributed through a storefront.
//!
//! [`RateController`] owns the configured store identifier and derives the storefront review URL
//! from it. Showing the prompt and opening the review page go through host services injected by
//! the caller (see [`platform_host`]), so the controller itself never touches a UI toolkit or the
//! operating system.
//!
//! ```
//! use app_rate::RateController;
//!
//! let mut controller = RateController::default();
//! assert!(controller.store_url().is_none());
//!
//! controller.set_store_identifier("123456789");
//! assert_eq!(
//!     controller.store_url().map(String::from).as_deref(),
//!     Some("https://apps.apple.com/app/id123456789?action=write-review")
//! );
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod controller;
pub mod error;
pub mod prompt;
pub mod storefront;

pub use config::{RateConfig, ENV_STOREFRONT, ENV_STORE_ID};
pub use controller::{OpenOutcome, PromptOutcome, RateController};
pub use error::RateError;
pub use prompt::PromptCopy;
pub use storefront::{Storefront, ID_PLACEHOLDER};
