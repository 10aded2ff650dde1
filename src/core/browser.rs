// src/core/browser.rs
//! Scoped browsing for providers.
//!
//! A [`BrowserSession`] is the per-provider resource: it is opened when the
//! provider is built and closed exactly once, by [`BrowserSession::close`] or
//! on drop. Each fetch then opens its own [`BrowserContext`], a fresh HTTP
//! client with a private cookie jar, so nothing one call picks up (cookies,
//! redirects, consent walls) is visible to another call, concurrent or not.
//!
//! Navigation goes either straight to the site or through a Browserless-style
//! `/content` endpoint, which renders the page in a real headless browser.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    thread,
    time::Duration,
};

use reqwest::blocking::Client;

use crate::config::options::BrowserOptions;
use super::{
    error::{FetchError, Result},
    net,
    page::Page,
};

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

pub struct BrowserSession {
    id: u64,
    opts: BrowserOptions,
    open: bool,
}

impl BrowserSession {
    pub fn open(opts: &BrowserOptions) -> Result<Self> {
        if let Some(ep) = &opts.render_endpoint {
            if !(ep.starts_with("http://") || ep.starts_with("https://")) {
                return Err(FetchError::Browser(format!("render endpoint is not an http(s) URL: {ep}")));
            }
        }
        let id = NEXT_SESSION.fetch_add(1, Ordering::Relaxed);
        logd!("Browser: session #{id} opened (rendered={})", opts.render_endpoint.is_some());
        Ok(Self { id, opts: opts.clone(), open: true })
    }

    pub fn id(&self) -> u64 { self.id }

    pub fn is_open(&self) -> bool { self.open }

    /// New isolated context for one fetch.
    pub fn new_context(&self) -> Result<BrowserContext<'_>> {
        if !self.open {
            return Err(FetchError::Browser(format!("session #{} is closed", self.id)));
        }
        Ok(BrowserContext {
            session: self,
            client: net::isolated_client(&self.opts)?,
        })
    }

    /// Release the session. Later calls are no-ops.
    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            logd!("Browser: session #{} closed", self.id);
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.close();
    }
}

/// One fetch's private browsing state. Dropped at the end of the fetch.
pub struct BrowserContext<'s> {
    session: &'s BrowserSession,
    client: Client,
}

impl BrowserContext<'_> {
    /// Plain HTTP client of this context, for JSON endpoints.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Navigate and wait `settle` for late content, then parse.
    pub fn goto(&self, url: &str, settle: Duration) -> Result<Page> {
        let opts = &self.session.opts;
        let html = match &opts.render_endpoint {
            Some(ep) => self.render(ep, opts.render_token.as_deref(), url, settle)?,
            None => {
                let html = net::get_text(&self.client, url)?;
                thread::sleep(settle);
                html
            }
        };
        logd!("Browser: #{} loaded {} ({} bytes)", self.session.id, url, html.len());
        Ok(Page::parse(&html))
    }

    /// Render through the `/content` endpoint; the browser side does the settle wait.
    fn render(&self, endpoint: &str, token: Option<&str>, url: &str, settle: Duration) -> Result<String> {
        let mut target = format!("{}/content", endpoint.trim_end_matches('/'));
        if let Some(token) = token {
            target.push_str(&format!("?token={token}"));
        }

        let body = serde_json::json!({
            "url": url,
            "gotoOptions": { "waitUntil": "networkidle2" },
            "waitForTimeout": settle.as_millis() as u64,
        });

        let resp = self.client.post(&target).json(&body).send()?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().unwrap_or_default();
            return Err(FetchError::Browser(format!(
                "render failed (status {}): {}",
                status.as_u16(),
                message.trim()
            )));
        }
        Ok(resp.text()?)
    }
}
