// src/providers/mod.rs
//! # Profile providers
//!
//! One provider per platform. Each knows **where the data lives** on its
//! platform and how to read it into a normalized [`Record`](crate::model::Record).
//!
//! ## Contract
//! - `fetch` never fails past its boundary: any network, browser or parse
//!   error comes back as `ProviderOutput::Failed(message)`.
//! - Field extraction is best-effort: a missing node yields the `"N/A"`
//!   sentinel for that field, the fetch carries on.
//! - Every `fetch` opens its own browsing context and drops it before
//!   returning. Cookies and cache never cross calls.
//! - `close` releases the provider's browser session. The dispatcher calls
//!   it exactly once per instance, whatever `fetch` returned.
//!
//! ## What does **not** live here
//! - Timing and the `Performance` field (dispatcher).
//! - Presentation and thumbnails (sinks).
//! - Retries, backoff or rate limiting. A fetch is attempted once.

pub mod facebook;
pub mod instagram;
pub mod twitter;

use crate::{
    config::options::{BrowserOptions, FetchOptions},
    core::{BrowserSession, FetchError},
    model::{Platform, ProviderOutput},
};

pub use facebook::FacebookProvider;
pub use instagram::InstagramProvider;
pub use twitter::TwitterProvider;

pub trait ProfileProvider {
    fn platform(&self) -> Platform;

    /// Fetch one identifier. Blocking; runs on the caller's thread.
    fn fetch(&mut self, identifier: &str, opts: &FetchOptions) -> ProviderOutput;

    /// Release the provider's session resource.
    fn close(&mut self);
}

/// Builds a fresh provider per dispatch. Shared by every fetch thread.
pub trait ProviderFactory: Send + Sync {
    fn create(&self, platform: Platform) -> Result<Box<dyn ProfileProvider>, FetchError>;
}

/// Factory for the real, network-backed providers.
#[derive(Clone, Debug, Default)]
pub struct LiveProviders {
    browser: BrowserOptions,
}

impl LiveProviders {
    pub fn new(browser: BrowserOptions) -> Self {
        Self { browser }
    }
}

impl ProviderFactory for LiveProviders {
    fn create(&self, platform: Platform) -> Result<Box<dyn ProfileProvider>, FetchError> {
        let session = BrowserSession::open(&self.browser)?;
        Ok(match platform {
            Platform::Facebook => Box::new(FacebookProvider::new(session)),
            Platform::Instagram => Box::new(InstagramProvider::new(session)),
            Platform::Twitter => Box::new(TwitterProvider::new(session)),
        })
    }
}

/// Blank identifiers are rejected before any navigation.
pub(crate) fn require_identifier(identifier: &str) -> Result<&str, FetchError> {
    let id = identifier.trim();
    if id.is_empty() {
        Err(FetchError::NotFound(s!("no username or ID given")))
    } else {
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Discard port: connection refused, no real traffic.
    fn unreachable() -> BrowserOptions {
        BrowserOptions {
            render_endpoint: Some(s!("http://127.0.0.1:9")),
            ..BrowserOptions::default()
        }
    }

    #[test]
    fn factory_builds_matching_provider() {
        let f = LiveProviders::default();
        for p in Platform::ALL {
            let mut prov = f.create(p).unwrap();
            assert_eq!(prov.platform(), p);
            prov.close();
        }
    }

    #[test]
    fn blank_identifier_fails_without_navigation() {
        let f = LiveProviders::new(unreachable());
        for p in Platform::ALL {
            let mut prov = f.create(p).unwrap();
            match prov.fetch("   ", &FetchOptions::default()) {
                ProviderOutput::Failed(msg) => assert!(msg.contains("no username or ID given"), "{msg}"),
                other => panic!("expected failure, got {other:?}"),
            }
            prov.close();
        }
    }

    #[test]
    fn unreachable_renderer_is_contained_as_failure() {
        let f = LiveProviders::new(unreachable());
        let opts = FetchOptions { settle: std::time::Duration::ZERO, ..FetchOptions::default() };
        for p in [Platform::Facebook, Platform::Twitter] {
            let mut prov = f.create(p).unwrap();
            assert!(matches!(prov.fetch("someone", &opts), ProviderOutput::Failed(_)));
            prov.close();
        }
    }
}
