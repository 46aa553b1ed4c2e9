use eframe::egui;

use crate::core::models::Notebook;

#[derive(Debug, Clone)]
pub struct NotebookFormResult {
    /// None when creating a new notebook.
    pub notebook_id: Option<String>,
    pub title: String,
    pub description: String,
}

pub struct NotebookFormModal {
    open: bool,
    editing_id: Option<String>,
    title: String,
    description: String,
    validation: Option<String>,
}

impl NotebookFormModal {
    pub fn new() -> Self {
        Self {
            open: false,
            editing_id: None,
            title: String::new(),
            description: String::new(),
            validation: None,
        }
    }

    pub fn open_create(&mut self) {
        self.editing_id = None;
        self.title.clear();
        self.description.clear();
        self.validation = None;
        self.open = true;
    }

    pub fn open_edit(&mut self, notebook: &Notebook) {
        self.editing_id = Some(notebook.notebook_id.clone());
        self.title = notebook.title.clone();
        self.description = notebook.description.clone();
        self.validation = None;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<NotebookFormResult> {
        if !self.open {
            return None;
        }

        let mut result = None;

        let modal = egui::Modal::new(egui::Id::new("notebook_form_modal")).show(ctx, |ui| {
            ui.set_width(400.0);
            ui.heading(if self.editing_id.is_some() { "Edit Notebook" } else { "New Notebook" });
            ui.add_space(10.0);

            ui.label("Title");
            ui.add(
                egui::TextEdit::singleline(&mut self.title)
                    .desired_width(f32::INFINITY)
                    .hint_text("e.g. Phrasal verbs"),
            );

            ui.add_space(5.0);

            ui.label("Description");
            ui.add(
                egui::TextEdit::multiline(&mut self.description)
                    .desired_width(f32::INFINITY)
                    .desired_rows(3),
            );

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
                    if self.title.trim().is_empty() {
                        self.validation = Some("Enter a title".to_string());
                    } else {
                        result = Some(NotebookFormResult {
                            notebook_id: self.editing_id.clone(),
                            title: self.title.trim().to_string(),
                            description: self.description.trim().to_string(),
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

impl Default for NotebookFormModal {
    fn default() -> Self {
        Self::new()
    }
}
