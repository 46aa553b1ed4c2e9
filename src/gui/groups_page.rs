use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    app::{
        Page,
        TangochoApp,
    },
    theme::Theme,
};
use crate::core::models::Group;

pub fn show(ctx: &egui::Context, app: &mut TangochoApp) {
    let theme = &app.theme;
    let data = &app.groups_data;
    let recent = &app.recent;
    let actions = &mut app.actions;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(theme.heading(ctx, "Groups"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("＋ New Group").clicked() {
                    actions.push(UiAction::OpenGroupForm(None));
                }
                if ui.button("❤ Liked Notebooks").clicked() {
                    actions.push(UiAction::Navigate(Page::Liked));
                }
            });
        });
        ui.label("Organize your notebooks by theme.");
        ui.add_space(10.0);

        if let Some(error) = &data.error {
            ui.colored_label(theme.red(ctx), format!("error: {}", error));
            return;
        }
        let Some(groups) = &data.groups else {
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            if groups.is_empty() {
                ui.add_space(60.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Create your first group!").size(18.0));
                });
            } else {
                ui.horizontal_wrapped(|ui| {
                    for group in groups {
                        group_card(ui, ctx, theme, group, actions);
                    }
                });
            }

            if !recent.is_empty() {
                ui.add_space(16.0);
                ui.separator();
                ui.label(theme.accent(ctx, "Recently studied"));
                ui.add_space(4.0);
                for entry in recent.entries() {
                    ui.horizontal(|ui| {
                        if ui.link(&entry.title).clicked() {
                            actions.push(UiAction::Navigate(Page::Learn {
                                group_id: entry.group_id.clone(),
                                notebook_id: entry.notebook_id.clone(),
                            }));
                        }
                        ui.weak(format!(
                            "{} · {}",
                            entry.format_last_studied(),
                            entry.format_card_count()
                        ));
                    });
                }
            }
        });
    });
}

fn group_card(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &Theme,
    group: &Group,
    actions: &mut ActionQueue,
) {
    egui::Frame::group(ui.style()).fill(theme.card_fill(ctx)).inner_margin(egui::Margin::same(12)).show(ui, |ui| {
        ui.set_width(250.0);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&group.groupname).size(17.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("🗑").clicked() {
                        actions.push(UiAction::ConfirmDeleteGroup(group.clone()));
                    }
                    if ui.small_button("✏").clicked() {
                        actions.push(UiAction::OpenGroupForm(Some(group.clone())));
                    }
                });
            });

            if !group.description.is_empty() {
                ui.label(&group.description);
            }
            ui.add_space(4.0);
            ui.weak(format!("{} notebooks · {} cards", group.notebooks, group.flashcards));
            ui.add_space(6.0);

            if ui.button("Open").clicked() {
                actions.push(UiAction::Navigate(Page::Notebooks {
                    group_id: group.group_id.clone(),
                }));
            }
        });
    });
}
