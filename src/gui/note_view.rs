use eframe::egui;

use crate::core::markup::{
    parse_detail,
    NoteSpan,
};

/// Render a card's detail notes: bold runs, bullet lines and blank-line
/// spacing, straight from the stored markup.
pub fn show_detail(ui: &mut egui::Ui, detail: &str) {
    for line in parse_detail(detail) {
        if line.is_empty() {
            ui.add_space(8.0);
            continue;
        }

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            if line.bullet {
                ui.label("•  ");
            }
            for span in &line.spans {
                match span {
                    NoteSpan::Text(text) => {
                        ui.label(text);
                    }
                    NoteSpan::Bold(text) => {
                        ui.label(egui::RichText::new(text).strong());
                    }
                }
            }
        });
    }
}
