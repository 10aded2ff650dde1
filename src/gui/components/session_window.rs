// src/gui/components/session_window.rs
//
// One floating window per session: platform picker, identifier entry,
// Fetch Data, rendered result text and thumbnail.

use eframe::egui::{self, load::SizedTexture};

use crate::{
    config::consts::{SESSION_H, SESSION_W, THUMBNAIL_SIZE},
    gui::{app::SessionSlot, sink::lock_view},
    model::Platform,
    sink::Thumbnail,
};

pub fn draw(ctx: &egui::Context, slot: &mut SessionSlot) {
    sync_texture(ctx, slot);

    let mut open = slot.open;
    egui::Window::new(slot.session.title())
        .id(egui::Id::new(("session", slot.session.index())))
        .open(&mut open)
        .default_size([SESSION_W, SESSION_H])
        .default_pos([40.0 + 24.0 * slot.session.index() as f32, 40.0 + 24.0 * slot.session.index() as f32])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                controls(ui, slot);
                ui.separator();
                results(ui, slot);
            });
        });
    slot.open = open;
}

fn controls(ui: &mut egui::Ui, slot: &mut SessionSlot) {
    let busy = slot.session.is_busy();

    ui.label("Select Platform:");
    let mut selected = s!(slot.session.platform());
    egui::ComboBox::from_id_salt(("platform", slot.session.index()))
        .selected_text(selected.clone())
        .show_ui(ui, |ui| {
            for p in Platform::ALL {
                ui.selectable_value(&mut selected, s!(p.name()), p.name());
            }
        });
    if selected != slot.session.platform() {
        logd!("UI: {} platform → {}", slot.session.title(), selected);
        slot.session.set_platform(selected);
    }

    let platform: Option<Platform> = slot.session.platform().parse().ok();

    ui.label("Enter Username/ID:");
    let hint = platform.map(|p| p.identifier_hint()).unwrap_or("");
    ui.add(egui::TextEdit::singleline(slot.session.identifier_mut()).hint_text(hint));

    if platform == Some(Platform::Twitter) {
        ui.horizontal(|ui| {
            ui.label("Tweets:");
            ui.add(egui::DragValue::new(&mut slot.tweet_count).range(1..=50));
        });
        slot.session.set_count(Some(slot.tweet_count));
    } else {
        slot.session.set_count(None);
    }

    ui.horizontal(|ui| {
        let fetch = ui.add_enabled(!busy, egui::Button::new(egui::RichText::new("Fetch Data").strong()));
        if fetch.clicked() {
            // The thread is detached; its result arrives through the sink.
            slot.notice = slot.session.trigger_fetch().err().map(|e| e.to_string());
        }
        if busy {
            ui.add(egui::Spinner::new().size(16.0));
            ui.label("Fetching…");
        }
    });
    if let Some(n) = &slot.notice {
        ui.small(n.as_str());
    }
}

fn results(ui: &mut egui::Ui, slot: &SessionSlot) {
    let (text, label) = {
        let v = lock_view(&slot.view);
        let label = match &v.thumbnail {
            None => Some(s!("Profile image will appear here")),
            Some(t) => t.label(),
        };
        (v.text.clone(), label)
    };

    ui.add(egui::Label::new(text).wrap());
    ui.add_space(8.0);

    match (&slot.texture, label) {
        (Some(tex), _) => {
            let size = egui::vec2(THUMBNAIL_SIZE as f32, THUMBNAIL_SIZE as f32);
            ui.add(egui::Image::from_texture(SizedTexture::new(tex.id(), size)));
        }
        (None, Some(label)) => {
            ui.label(label);
        }
        (None, None) => {}
    }
}

/// Rebuild (or drop) the thumbnail texture when a new result has landed.
fn sync_texture(ctx: &egui::Context, slot: &mut SessionSlot) {
    let v = lock_view(&slot.view);
    if v.generation == slot.seen_generation {
        return;
    }
    slot.texture = match &v.thumbnail {
        Some(Thumbnail::Image(img)) => {
            let size = [img.width() as usize, img.height() as usize];
            let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
            Some(ctx.load_texture(
                format!("thumb-{}-{}", slot.session.index(), v.generation),
                color,
                egui::TextureOptions::LINEAR,
            ))
        }
        _ => None,
    };
    slot.seen_generation = v.generation;
}
