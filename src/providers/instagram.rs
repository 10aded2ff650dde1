// src/providers/instagram.rs
//! Instagram profile provider.
//!
//! Reads the public `web_profile_info` JSON endpoint (the one the web app
//! itself calls) for a bare handle. No page rendering is involved, so there is
//! no settle delay; the call still runs in its own cookie-isolated context.
//!
//! Output fields: `Username`, `Full Name`, `Bio`, `Followers Count`,
//! `Following Count`, `Posts Count`, `Profile Picture`.

use serde::Deserialize;

use crate::{
    config::{consts::{INSTAGRAM_APP_ID, INSTAGRAM_PROFILE_API}, options::FetchOptions},
    core::{error::{FetchError, Result}, sanitize::bare_handle, BrowserSession},
    model::{record::or_sentinel, Platform, ProviderOutput, Record},
};
use super::{require_identifier, ProfileProvider};

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    data: Option<ProfileData>,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    user: Option<User>,
}

#[derive(Debug, Deserialize)]
struct User {
    username: Option<String>,
    full_name: Option<String>,
    biography: Option<String>,
    edge_followed_by: Option<Count>,
    edge_follow: Option<Count>,
    edge_owner_to_timeline_media: Option<Count>,
    profile_pic_url_hd: Option<String>,
    profile_pic_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Count {
    count: Option<u64>,
}

fn count_of(c: Option<Count>) -> Option<String> {
    c.and_then(|c| c.count).map(|n| n.to_string())
}

pub struct InstagramProvider {
    browser: BrowserSession,
}

impl InstagramProvider {
    pub fn new(browser: BrowserSession) -> Self {
        Self { browser }
    }

    fn lookup(&self, identifier: &str) -> Result<Record> {
        let handle = bare_handle(require_identifier(identifier)?);
        let ctx = self.browser.new_context()?;

        let url = format!("{INSTAGRAM_PROFILE_API}{handle}");
        let resp = ctx
            .client()
            .get(&url)
            .header("x-ig-app-id", INSTAGRAM_APP_ID)
            .send()?;

        let status = resp.status();
        if status.as_u16() == 404 {
            return Err(not_found(&handle));
        }
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url });
        }
        parse_profile(&resp.text()?, &handle)
    }
}

impl ProfileProvider for InstagramProvider {
    fn platform(&self) -> Platform { Platform::Instagram }

    fn fetch(&mut self, identifier: &str, _opts: &FetchOptions) -> ProviderOutput {
        match self.lookup(identifier) {
            Ok(rec) => ProviderOutput::Single(rec),
            Err(e) => ProviderOutput::Failed(e.to_string()),
        }
    }

    fn close(&mut self) {
        self.browser.close();
    }
}

fn not_found(handle: &str) -> FetchError {
    FetchError::NotFound(format!("Profile {handle} does not exist."))
}

/// Turn a `web_profile_info` body into the profile record.
pub fn parse_profile(body: &str, handle: &str) -> Result<Record> {
    let resp: ProfileResponse = serde_json::from_str(body)?;
    let user = resp
        .data
        .and_then(|d| d.user)
        .ok_or_else(|| not_found(handle))?;

    let picture = user.profile_pic_url_hd.or(user.profile_pic_url);

    Ok(record! {
        "Username" => or_sentinel(user.username),
        "Full Name" => or_sentinel(user.full_name),
        "Bio" => or_sentinel(user.biography),
        "Followers Count" => or_sentinel(count_of(user.edge_followed_by)),
        "Following Count" => or_sentinel(count_of(user.edge_follow)),
        "Posts Count" => or_sentinel(count_of(user.edge_owner_to_timeline_media)),
        "Profile Picture" => or_sentinel(picture),
    })
}
