use eframe::egui::{
    self,
    containers,
};

use crate::gui::{
    actions::{
        ActionQueue,
        UiAction,
    },
    app::Page,
    settings::{
        SettingsData,
        SettingsModal,
    },
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings_modal: &mut SettingsModal,
        current_settings: &SettingsData,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Preferences").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                        ui.close();
                    }
                });

                ui.separator();

                if ui.button("Groups").clicked() {
                    actions.push(UiAction::Navigate(Page::Groups));
                }
                if ui.button("❤ Liked Notebooks").clicked() {
                    actions.push(UiAction::Navigate(Page::Liked));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(&current_settings.api_base_url)
                        .on_hover_text("API server this app talks to");
                });
            });
        });
    }
}
