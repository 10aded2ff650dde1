// src/providers/facebook.rs
//! Facebook profile provider.
//!
//! Purpose:
//! - Navigate to a **profile URL** and read the display name and profile picture.
//! - Name: first `<h1>`.
//! - Picture: the avatar `<image xlink:href>` inside the profile header SVG,
//!   falling back to `og:image` when the page is server-rendered only.
//!
//! Output fields: `ID`, `Name`, `Profile Picture`.

use crate::{
    config::options::FetchOptions,
    core::{error::Result, sanitize::facebook_url, BrowserSession, Page},
    model::{record::or_sentinel, Platform, ProviderOutput, Record},
};
use super::{require_identifier, ProfileProvider};

const NAME_SELECTOR: &str = "h1";
const AVATAR_SELECTOR: &str = "div.x15sbx0n:nth-child(1) > div:nth-child(1) > a:nth-child(1) > div:nth-child(1) > svg:nth-child(1) > g:nth-child(2) > image:nth-child(1)";
const AVATAR_FALLBACK: &str = "meta[property='og:image']";

pub struct FacebookProvider {
    browser: BrowserSession,
}

impl FacebookProvider {
    pub fn new(browser: BrowserSession) -> Self {
        Self { browser }
    }

    fn scrape(&self, identifier: &str, opts: &FetchOptions) -> Result<Record> {
        let id = require_identifier(identifier)?;
        let ctx = self.browser.new_context()?;
        let page = ctx.goto(&facebook_url(id), opts.settle)?;
        Ok(extract_profile(&page, id))
    }
}

impl ProfileProvider for FacebookProvider {
    fn platform(&self) -> Platform { Platform::Facebook }

    fn fetch(&mut self, identifier: &str, opts: &FetchOptions) -> ProviderOutput {
        match self.scrape(identifier, opts) {
            Ok(rec) => ProviderOutput::Single(rec),
            Err(e) => ProviderOutput::Failed(e.to_string()),
        }
    }

    fn close(&mut self) {
        self.browser.close();
    }
}

/// Read the profile fields out of a loaded page. `id` is echoed as `ID`.
pub fn extract_profile(page: &Page, id: &str) -> Record {
    let picture = page
        .attr(AVATAR_SELECTOR, "xlink:href")
        .or_else(|| page.attr(AVATAR_FALLBACK, "content"));

    record! {
        "ID" => id,
        "Name" => or_sentinel(page.text(NAME_SELECTOR)),
        "Profile Picture" => or_sentinel(picture),
    }
}
