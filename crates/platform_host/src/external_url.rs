//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening external URLs in the default browser or storefront application.
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory external URL service that records every URL it is asked to open.
///
/// Clones share the same log, so a test can hand one clone to the code under test and inspect
/// the other.
pub struct MemoryExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
    failure: Option<String>,
}

impl MemoryExternalUrlService {
    /// Creates a recorder whose every open attempt fails with `message`.
    ///
    /// Failed attempts are still recorded.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            opened: Rc::default(),
            failure: Some(message.into()),
        }
    }

    /// Returns every URL passed to [`ExternalUrlService::open_url`], oldest first.
    pub fn opened_urls(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    /// Returns how many open requests were made.
    pub fn open_count(&self) -> usize {
        self.opened.borrow().len()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(url.to_string());
            match &self.failure {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            }
        })
    }
}
