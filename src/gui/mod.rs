// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod sink;

pub use app::run;
