// src/sink/mod.rs
//! Where a finished dispatch goes.
//!
//! One sink per session, never shared. Presentation is the same for every
//! platform: ordered `key: value` lines plus one thumbnail. Platform
//! differences live only in the record contents.

pub mod thumbnail;

use crate::model::{FetchResult, FetchSuccess, Record};

pub use thumbnail::{HttpImageLoader, ImageLoader, Thumbnail};

pub trait ResultSink: Send {
    /// Receives the one result of one dispatch. Must not panic on bad data.
    fn present(&mut self, result: FetchResult);
}

/// Everything a front end shows for a result.
#[derive(Clone, Debug)]
pub struct Presentation {
    pub text: String,
    pub thumbnail: Thumbnail,
}

impl Presentation {
    /// Render text and resolve the thumbnail. Downloads on the calling thread.
    pub fn build(result: &FetchResult, loader: &dyn ImageLoader) -> Self {
        Self {
            text: render_text(result),
            thumbnail: thumbnail::resolve(result, loader),
        }
    }
}

fn lines(rec: &Record) -> String {
    rec.iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `key: value` lines; feeds get one `Tweet n:` block per item, blank-line separated.
pub fn render_text(result: &FetchResult) -> String {
    match result {
        FetchResult::Ok(FetchSuccess { items: Some(items), .. }) if !items.is_empty() => items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("Tweet {}:\n{}", i + 1, lines(item)))
            .collect::<Vec<_>>()
            .join("\n\n"),
        FetchResult::Ok(ok) => lines(&ok.fields),
        FetchResult::Err(err) => lines(&err.record()),
    }
}
