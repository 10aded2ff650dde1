// src/core/mod.rs

pub mod browser;
pub mod error;
pub mod net;
pub mod page;
pub mod sanitize;

pub use browser::BrowserSession;
pub use error::FetchError;
pub use page::Page;
