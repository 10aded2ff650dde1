// src/gui/components/mod.rs
pub mod inspector;
pub mod launcher;
pub mod session_window;
