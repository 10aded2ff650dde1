// src/gui/components/launcher.rs
//
// Main window: session count entry, "Open Sessions", inspector toggle.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.heading("Social Media Fetcher");
        ui.add_space(10.0);

        ui.label("Enter Number of Sessions:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.session_count_text)
                .desired_width(120.0)
                .horizontal_align(egui::Align::Center),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(10.0);
        let open = ui.button(egui::RichText::new("Open Sessions").strong());
        if open.clicked() || submitted {
            logd!("UI: Open Sessions ← {:?}", app.state.gui.session_count_text);
            let ctx = ui.ctx().clone();
            app.open_sessions(&ctx);
        }

        if let Some(msg) = &app.state.gui.launcher_message {
            let color = if msg.starts_with("Invalid Input") {
                egui::Color32::from_rgb(220, 30, 30)
            } else {
                ui.visuals().text_color()
            };
            ui.colored_label(color, msg.as_str());
        }

        ui.add_space(16.0);
        ui.separator();

        ui.horizontal(|ui| {
            ui.checkbox(&mut app.state.gui.show_inspector, "Show aggregate results");
            let busy = app.busy_count();
            if busy > 0 {
                ui.add(egui::Spinner::new().size(14.0));
                ui.label(format!("{busy} fetch(es) running"));
            } else {
                ui.label(format!("{} session(s) open", app.slots.len()));
            }
        });
    });
}
