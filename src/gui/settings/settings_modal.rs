use eframe::egui;

use super::data::{
    SettingsData,
    SyncFailurePolicy,
};

pub struct SettingsModal {
    open: bool,
    temp: SettingsData,
    original: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, temp: SettingsData::default(), original: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.temp = current_settings.clone();
        self.original = current_settings;
        self.open = true;
    }

    fn is_dirty(&self) -> bool {
        self.temp.api_base_url != self.original.api_base_url
            || self.temp.user_sub != self.original.user_sub
            || self.temp.bookmark_sync_failure != self.original.bookmark_sync_failure
    }

    /// Returns the new settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Settings");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("API base URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.temp.api_base_url)
                        .desired_width(240.0)
                        .hint_text("http://localhost:8080"),
                );
            });

            if self.temp.api_base_url.trim().is_empty() {
                ui.colored_label(egui::Color32::RED, "⚠ The API base URL cannot be empty");
            }

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label("Account id:");
                ui.add(egui::TextEdit::singleline(&mut self.temp.user_sub).desired_width(240.0));
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label("On failed bookmark sync:");
                egui::ComboBox::from_id_salt("sync_failure_policy")
                    .selected_text(self.temp.bookmark_sync_failure.label())
                    .show_ui(ui, |ui| {
                        for policy in SyncFailurePolicy::ALL {
                            ui.selectable_value(
                                &mut self.temp.bookmark_sync_failure,
                                policy,
                                policy.label(),
                            );
                        }
                    });
            });

            ui.add_space(10.0);
            ui.separator();

            let is_dirty = self.is_dirty();

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    if !self.temp.api_base_url.trim().is_empty() {
                        self.temp.api_base_url =
                            self.temp.api_base_url.trim_end_matches('/').to_string();
                        result = Some(self.temp.clone());
                        ui.close();
                    }
                } else if cancel_clicked {
                    ui.close();
                } else if reset_clicked {
                    let defaults = SettingsData::default();
                    self.temp.api_base_url = defaults.api_base_url;
                    self.temp.bookmark_sync_failure = defaults.bookmark_sync_failure;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
