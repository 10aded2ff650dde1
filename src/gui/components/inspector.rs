// src/gui/components/inspector.rs
//
// Read-only view of the aggregate results table: latest result per platform.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, model::FetchResult};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    // One short lock for the copy; rendering works on the snapshot.
    let rows = app.manager.snapshot();

    let mut open = app.state.gui.show_inspector;
    egui::Window::new("Aggregate Results")
        .open(&mut open)
        .default_width(460.0)
        .show(ctx, |ui| {
            if rows.is_empty() {
                ui.label("No fetch has finished yet.");
                return;
            }
            TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .column(Column::initial(80.0).resizable(true))
                .column(Column::initial(160.0).resizable(true).clip(true))
                .column(Column::initial(60.0))
                .column(Column::remainder().clip(true))
                .header(22.0, |mut header| {
                    for h in ["Platform", "Subject", "Elapsed", "Status"] {
                        header.col(|ui| { ui.strong(h); });
                    }
                })
                .body(|mut body| {
                    for (platform, result) in &rows {
                        body.row(20.0, |mut row| {
                            row.col(|ui| { ui.label(platform.name()); });
                            row.col(|ui| { ui.label(result.subject()); });
                            row.col(|ui| { ui.label(format!("{:.2}s", result.elapsed())); });
                            row.col(|ui| { ui.label(status(result)); });
                        });
                    }
                });
        });
    app.state.gui.show_inspector = open;
}

fn status(result: &FetchResult) -> String {
    match result {
        FetchResult::Ok(ok) => match &ok.items {
            Some(items) => format!("OK ({} items)", items.len()),
            None => s!("OK"),
        },
        FetchResult::Err(err) => format!("Error: {}", err.message),
    }
}
