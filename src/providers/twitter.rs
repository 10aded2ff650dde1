// src/providers/twitter.rs
//! Twitter/X feed provider.
//!
//! Loads `twitter.com/<handle>` and reads up to `count` tweets from the
//! timeline. Tweet text, images and timestamps are collected as three
//! parallel lists (`article div[lang]`, `article img[src]`, `article time`)
//! and zipped by position; a shorter list yields `"N/A"` for the tail.
//!
//! Every item repeats the account's display name and profile picture so each
//! one can be rendered on its own.

use crate::{
    config::{consts::TWITTER_BASE, options::FetchOptions},
    core::{error::Result, sanitize::bare_handle, BrowserSession, Page},
    model::{record::or_sentinel, Platform, ProviderOutput, Record},
};
use super::{require_identifier, ProfileProvider};

const PROFILE_PICTURE: &str = "img[src*='profile_images']";
const USER_NAME: &str = "div[data-testid='UserName'] span";
const TWEET_TEXT: &str = "article div[lang]";
const TWEET_TIME: &str = "article time";
const TWEET_IMAGE: &str = "article img[src]";

pub struct TwitterProvider {
    browser: BrowserSession,
}

impl TwitterProvider {
    pub fn new(browser: BrowserSession) -> Self {
        Self { browser }
    }

    fn timeline(&self, identifier: &str, opts: &FetchOptions) -> Result<Vec<Record>> {
        let handle = bare_handle(require_identifier(identifier)?);
        let ctx = self.browser.new_context()?;
        let page = ctx.goto(&format!("{TWITTER_BASE}{handle}"), opts.settle)?;
        Ok(extract_feed(&page, opts.count))
    }
}

impl ProfileProvider for TwitterProvider {
    fn platform(&self) -> Platform { Platform::Twitter }

    fn fetch(&mut self, identifier: &str, opts: &FetchOptions) -> ProviderOutput {
        match self.timeline(identifier, opts) {
            Ok(items) => ProviderOutput::Items(items),
            Err(e) => ProviderOutput::Failed(format!("Failed to fetch data: {e}")),
        }
    }

    fn close(&mut self) {
        self.browser.close();
    }
}

/// At most `count` tweet records, in page order.
pub fn extract_feed(page: &Page, count: usize) -> Vec<Record> {
    let profile_picture = or_sentinel(page.attr(PROFILE_PICTURE, "src"));
    let user_name = or_sentinel(page.text(USER_NAME));

    let texts = page.all_text(TWEET_TEXT);
    let times = page.all_attr(TWEET_TIME, "datetime");
    let images = page.all_attr(TWEET_IMAGE, "src");

    texts
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, text)| {
            record! {
                "user_name" => user_name.clone(),
                "text" => text,
                "image" => or_sentinel(images.get(i).cloned().flatten()),
                "created_at" => or_sentinel(times.get(i).cloned().flatten()),
                "profile_picture" => profile_picture.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::SENTINEL;

    fn feed(n: usize, with_media: usize) -> String {
        let mut html = s!(r#"<html><body>
            <div data-testid="UserName"><div><span>Jack</span></div><span>@jack</span></div>
            <img src="https://pbs.twimg.com/profile_images/1/jack_normal.jpg">"#);
        for i in 0..n {
            html.push_str("<article>");
            html.push_str(&format!(r#"<time datetime="2024-01-0{}T10:00:00.000Z">Jan</time>"#, (i % 9) + 1));
            html.push_str(&format!(r#"<div lang="en">tweet number {i}</div>"#));
            if i < with_media {
                html.push_str(&format!(r#"<img src="https://pbs.twimg.com/media/{i}.jpg">"#));
            }
            html.push_str("</article>");
        }
        html.push_str("</body></html>");
        html
    }

    #[test]
    fn count_bounds_items_and_shares_profile_fields() {
        let page = Page::parse(&feed(8, 8));
        let items = extract_feed(&page, 5);
        assert_eq!(items.len(), 5);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.get("user_name"), Some("Jack"));
            assert_eq!(item.get("profile_picture"), Some("https://pbs.twimg.com/profile_images/1/jack_normal.jpg"));
            assert_eq!(item.get("text").map(str::to_string), Some(format!("tweet number {i}")));
        }
        assert_eq!(
            items[0].keys().collect::<Vec<_>>(),
            vec!["user_name", "text", "image", "created_at", "profile_picture"]
        );
    }

    #[test]
    fn fewer_tweets_than_count() {
        let items = extract_feed(&Page::parse(&feed(2, 2)), 5);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn short_media_list_yields_sentinel_images() {
        let items = extract_feed(&Page::parse(&feed(3, 1)), 5);
        assert_eq!(items[0].get("image"), Some("https://pbs.twimg.com/media/0.jpg"));
        assert_eq!(items[2].get("image"), Some(SENTINEL));
        assert_eq!(items[2].get("created_at"), Some("2024-01-03T10:00:00.000Z"));
    }

    #[test]
    fn empty_page_has_no_items() {
        assert!(extract_feed(&Page::parse("<html></html>"), 5).is_empty());
    }
}
