// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::{
        consts::{DEFAULT_TWEET_COUNT, LAUNCHER_H, LAUNCHER_W},
        state::AppState,
    },
    session::{Session, SessionManager},
};

use super::sink::{GuiSink, SharedView};

pub fn run(state: AppState) -> Result<(), Box<dyn Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h])
            .with_min_inner_size([LAUNCHER_W, LAUNCHER_H]),
        ..Default::default()
    };
    eframe::run_native(
        "Social Media Fetcher",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// One open session window and the UI-side caches that go with it.
pub struct SessionSlot {
    pub session: Session,
    pub view: SharedView,
    pub texture: Option<egui::TextureHandle>,
    pub seen_generation: u64,
    pub tweet_count: usize,
    pub open: bool,
    /// Last trigger refusal, shown under the button
    pub notice: Option<String>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub manager: SessionManager,
    pub slots: Vec<SessionSlot>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let manager = SessionManager::live(&state.options);
        logf!(
            "Init: rendered={} settle={:?}",
            state.options.browser.render_endpoint.is_some(),
            state.options.fetch.settle
        );
        Self { state, manager, slots: Vec::new() }
    }

    /// Launcher "Open Sessions": validate the count and add that many windows.
    pub fn open_sessions(&mut self, ctx: &egui::Context) {
        let browser = self.state.options.browser.clone();
        let mut views: Vec<SharedView> = Vec::new();

        let created = self.manager.create_sessions(&self.state.gui.session_count_text, |_index| {
            let view: SharedView = Arc::default();
            views.push(Arc::clone(&view));
            Box::new(GuiSink::new(view, &browser, ctx.clone()))
        });

        match created {
            Ok(sessions) => {
                let n = sessions.len();
                for (session, view) in sessions.into_iter().zip(views) {
                    self.slots.push(SessionSlot {
                        session,
                        view,
                        texture: None,
                        seen_generation: 0,
                        tweet_count: DEFAULT_TWEET_COUNT,
                        open: true,
                        notice: None,
                    });
                }
                self.state.gui.launcher_message = Some(format!("Opened {n} session(s)"));
            }
            Err(e) => {
                self.state.gui.launcher_message = Some(format!("Invalid Input: {e}"));
            }
        }
    }

    /// Drop closed windows whose fetch has finished. Busy ones stay until their result lands.
    fn reap_closed(&mut self) {
        self.slots.retain(|s| s.open || s.session.is_busy());
    }

    #[inline]
    pub fn busy_count(&self) -> usize {
        self.slots.iter().filter(|s| s.session.is_busy()).count()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::launcher::draw(ui, self);
        });

        for slot in self.slots.iter_mut() {
            super::components::session_window::draw(ctx, slot);
        }

        if self.state.gui.show_inspector {
            super::components::inspector::draw(ctx, self);
        }

        self.reap_closed();
    }
}
