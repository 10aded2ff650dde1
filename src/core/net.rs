// src/core/net.rs

// Blocking HTTP helpers. Callers always sit on their own fetch thread.

use reqwest::blocking::Client;
use crate::config::options::BrowserOptions;
use super::error::{FetchError, Result};

/// Fresh client with its own cookie jar. Nothing is shared between two clients.
pub fn isolated_client(opts: &BrowserOptions) -> Result<Client> {
    Client::builder()
        .cookie_store(true)
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()
        .map_err(|e| FetchError::Browser(format!("client setup failed: {e}")))
}

/// GET `url` as text; non-2xx is an error.
pub fn get_text(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}

/// GET `url` as raw bytes; non-2xx is an error.
pub fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.bytes()?.to_vec())
}
