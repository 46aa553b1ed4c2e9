use eframe::egui;

/// What a confirmed deletion applies to, carried by id.
#[derive(Debug, Clone)]
pub enum DeleteTarget {
    Group(String),
    Notebook(String),
    Flashcard(String),
}

/// Two-step confirmation for destructive actions.
pub struct ConfirmModal {
    open: bool,
    message: String,
    target: Option<DeleteTarget>,
}

impl ConfirmModal {
    pub fn new() -> Self {
        Self { open: false, message: String::new(), target: None }
    }

    pub fn request(&mut self, message: impl Into<String>, target: DeleteTarget) {
        self.message = message.into();
        self.target = Some(target);
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<DeleteTarget> {
        if !self.open {
            return None;
        }

        let mut confirmed = None;

        let modal = egui::Modal::new(egui::Id::new("confirm_modal")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.label(&self.message);
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
                if ui
                    .button(egui::RichText::new("Delete").color(egui::Color32::LIGHT_RED))
                    .clicked()
                {
                    confirmed = self.target.take();
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            if confirmed.is_none() {
                self.target = None;
            }
        }

        confirmed
    }
}

impl Default for ConfirmModal {
    fn default() -> Self {
        Self::new()
    }
}
