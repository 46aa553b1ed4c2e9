use eframe::egui;

use crate::core::models::Group;

#[derive(Debug, Clone)]
pub struct GroupFormResult {
    /// None when creating a new group.
    pub group_id: Option<String>,
    pub groupname: String,
    pub description: String,
}

pub struct GroupFormModal {
    open: bool,
    editing_id: Option<String>,
    groupname: String,
    description: String,
    validation: Option<String>,
}

impl GroupFormModal {
    pub fn new() -> Self {
        Self {
            open: false,
            editing_id: None,
            groupname: String::new(),
            description: String::new(),
            validation: None,
        }
    }

    pub fn open_create(&mut self) {
        self.editing_id = None;
        self.groupname.clear();
        self.description.clear();
        self.validation = None;
        self.open = true;
    }

    pub fn open_edit(&mut self, group: &Group) {
        self.editing_id = Some(group.group_id.clone());
        self.groupname = group.groupname.clone();
        self.description = group.description.clone();
        self.validation = None;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<GroupFormResult> {
        if !self.open {
            return None;
        }

        let mut result = None;

        let modal = egui::Modal::new(egui::Id::new("group_form_modal")).show(ctx, |ui| {
            ui.set_width(400.0);
            ui.heading(if self.editing_id.is_some() { "Edit Group" } else { "New Group" });
            ui.add_space(10.0);

            ui.label("Group name");
            ui.add(
                egui::TextEdit::singleline(&mut self.groupname)
                    .desired_width(f32::INFINITY)
                    .hint_text("e.g. TOEIC prep"),
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
                    if self.groupname.trim().is_empty() {
                        self.validation = Some("Enter a group name".to_string());
                    } else {
                        result = Some(GroupFormResult {
                            group_id: self.editing_id.clone(),
                            groupname: self.groupname.trim().to_string(),
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

impl Default for GroupFormModal {
    fn default() -> Self {
        Self::new()
    }
}
