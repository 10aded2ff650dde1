// src/gui/sink.rs
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eframe::egui;

use crate::{
    config::options::BrowserOptions,
    core::FetchError,
    model::FetchResult,
    sink::{HttpImageLoader, ImageLoader, Presentation, ResultSink, Thumbnail},
};

/// What one session window shows. Written by its fetch thread, read by the UI thread.
#[derive(Clone, Debug)]
pub struct SessionView {
    pub text: String,
    pub thumbnail: Option<Thumbnail>,
    /// Bumped on every delivered result; the UI rebuilds its texture when it moves.
    pub generation: u64,
}

impl Default for SessionView {
    fn default() -> Self {
        Self {
            text: s!("Results will appear here"),
            thumbnail: None,
            generation: 0,
        }
    }
}

pub type SharedView = Arc<Mutex<SessionView>>;

pub fn lock_view(view: &SharedView) -> MutexGuard<'_, SessionView> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Loader stand-in when no HTTP client could be built; every load fails inline.
struct NoLoader(String);

impl ImageLoader for NoLoader {
    fn load(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Browser(self.0.clone()))
    }
}

pub struct GuiSink {
    view: SharedView,
    loader: Box<dyn ImageLoader>,
    ctx: egui::Context,
}

impl GuiSink {
    pub fn new(view: SharedView, browser: &BrowserOptions, ctx: egui::Context) -> Self {
        let loader: Box<dyn ImageLoader> = match HttpImageLoader::new(browser) {
            Ok(l) => Box::new(l),
            Err(e) => Box::new(NoLoader(e.to_string())),
        };
        Self { view, loader, ctx }
    }
}

impl ResultSink for GuiSink {
    fn present(&mut self, result: FetchResult) {
        // Download + decode happen here, on the fetch thread, outside the view lock.
        let p = Presentation::build(&result, &*self.loader);
        {
            let mut v = lock_view(&self.view);
            v.text = p.text;
            v.thumbnail = Some(p.thumbnail);
            v.generation += 1;
        }
        self.ctx.request_repaint();
    }
}
