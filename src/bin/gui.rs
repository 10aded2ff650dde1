// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use social_fetch::{
    config::{options::AppOptions, state::AppState},
    gui, log,
};

fn main() {
    log::init();

    let state = AppState {
        options: AppOptions::from_env(),
        ..AppState::default()
    };

    if let Err(e) = gui::run(state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
