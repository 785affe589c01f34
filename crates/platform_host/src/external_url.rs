//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening links that leave the desktop. Links always open in a new browsing
/// context so the desktop session survives.
pub trait ExternalUrlService {
    /// Opens `url` using the host's navigation mechanism.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for hosts without navigation.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
/// In-memory service that records every opened link.
pub struct RecordingExternalUrlService {
    opened: RefCell<Vec<String>>,
}

impl RecordingExternalUrlService {
    /// Links opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if url.trim().is_empty() {
                return Err("refusing to open an empty url".to_string());
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}
