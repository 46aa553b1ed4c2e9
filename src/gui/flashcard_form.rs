use eframe::egui;

use super::note_view;
use crate::{
    api::client::FlashcardPayload,
    core::{
        markup::{
            escape_detail,
            unescape_detail,
        },
        models::Flashcard,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormTab {
    Edit,
    Preview,
}

#[derive(Debug, Clone)]
pub struct FlashcardFormResult {
    /// None when creating a new card.
    pub flashcard_id: Option<String>,
    pub payload: FlashcardPayload,
}

pub struct FlashcardFormModal {
    open: bool,
    editing_id: Option<String>,
    tab: FormTab,
    front_text: String,
    back_text: String,
    detail: String,
    bookmarked: bool,
    validation: Option<String>,
}

impl FlashcardFormModal {
    pub fn new() -> Self {
        Self {
            open: false,
            editing_id: None,
            tab: FormTab::Edit,
            front_text: String::new(),
            back_text: String::new(),
            detail: String::new(),
            bookmarked: false,
            validation: None,
        }
    }

    pub fn open_create(&mut self) {
        self.editing_id = None;
        self.tab = FormTab::Edit;
        self.front_text.clear();
        self.back_text.clear();
        self.detail.clear();
        self.bookmarked = false;
        self.validation = None;
        self.open = true;
    }

    pub fn open_edit(&mut self, card: &Flashcard) {
        self.editing_id = Some(card.flashcard_id.clone());
        self.tab = FormTab::Edit;
        self.front_text = card.front_text.clone();
        self.back_text = card.back_text.clone();
        // Stored detail carries escaped entities; edit the raw text.
        self.detail = unescape_detail(&card.detail);
        self.bookmarked = card.bookmarked;
        self.validation = None;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<FlashcardFormResult> {
        if !self.open {
            return None;
        }

        let mut result = None;

        let modal = egui::Modal::new(egui::Id::new("flashcard_form_modal")).show(ctx, |ui| {
            ui.set_width(460.0);
            ui.heading(if self.editing_id.is_some() { "Edit Card" } else { "New Card" });
            ui.add_space(10.0);

            ui.label("Front");
            ui.add(
                egui::TextEdit::singleline(&mut self.front_text)
                    .desired_width(f32::INFINITY)
                    .hint_text("prompt"),
            );

            ui.add_space(5.0);

            ui.label("Back");
            ui.add(
                egui::TextEdit::singleline(&mut self.back_text)
                    .desired_width(f32::INFINITY)
                    .hint_text("answer"),
            );

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, FormTab::Edit, "Notes");
                ui.selectable_value(&mut self.tab, FormTab::Preview, "Preview");
            });

            match self.tab {
                FormTab::Edit => {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.detail)
                            .desired_width(f32::INFINITY)
                            .desired_rows(6)
                            .hint_text("**bold**, \"- \" for bullets, blank line for a break"),
                    );
                }
                FormTab::Preview => {
                    egui::ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                        if self.detail.trim().is_empty() {
                            ui.weak("Nothing to preview");
                        } else {
                            note_view::show_detail(ui, &self.detail);
                        }
                    });
                }
            }

            ui.add_space(8.0);
            ui.checkbox(&mut self.bookmarked, "Bookmark this card");

            if let Some(validation) = &self.validation {
                ui.add_space(5.0);
                ui.colored_label(egui::Color32::RED, format!("⚠ {}", validation));
            }

            ui.add_space(10.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
                if ui.button("Save").clicked() {
                    if self.front_text.trim().is_empty() {
                        self.validation = Some("Enter the front text".to_string());
                    } else if self.back_text.trim().is_empty() {
                        self.validation = Some("Enter the back text".to_string());
                    } else {
                        result = Some(FlashcardFormResult {
                            flashcard_id: self.editing_id.clone(),
                            payload: FlashcardPayload {
                                front_text: self.front_text.trim().to_string(),
                                back_text: self.back_text.trim().to_string(),
                                detail: escape_detail(&self.detail),
                                bookmarked: self.bookmarked,
                            },
                        });
                        ui.close();
                    }
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for FlashcardFormModal {
    fn default() -> Self {
        Self::new()
    }
}
