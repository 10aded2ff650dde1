// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod model;

pub mod providers;
pub mod dispatch;
pub mod table;
pub mod session;
pub mod sink;

pub mod cli;
pub mod gui;

pub use dispatch::FetchDispatcher;
pub use model::{FetchResult, Platform};
pub use session::{Session, SessionManager};
pub use table::ResultsTable;
