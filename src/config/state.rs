// src/config/state.rs
use super::consts::*;
use super::options::AppOptions;

/// Launcher-window state. Lives on the UI thread only.
#[derive(Clone, Debug)]
pub struct GuiState {
    /// Raw text of the "number of sessions" entry
    pub session_count_text: String,

    pub window_w: f32,
    pub window_h: f32,

    /// Aggregate table inspector visible?
    pub show_inspector: bool,

    /// Last launcher-level message (validation failures, counts)
    pub launcher_message: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            session_count_text: s!(DEFAULT_SESSION_TEXT),
            window_w: LAUNCHER_W,
            window_h: LAUNCHER_H,
            show_inspector: false,
            launcher_message: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
