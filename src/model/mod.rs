// src/model/mod.rs
//! Normalized data every provider emits and every sink consumes.

pub mod platform;
pub mod record;
pub mod result;

pub use platform::{Platform, UnknownPlatform};
pub use record::Record;
pub use result::{FetchFailure, FetchResult, FetchSuccess, ProviderOutput};
