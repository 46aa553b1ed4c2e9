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
use crate::core::models::Notebook;

pub fn show(ctx: &egui::Context, app: &mut TangochoApp) {
    let theme = &app.theme;
    let data = &app.notebooks_data;
    let actions = &mut app.actions;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⬅").on_hover_text("Back to groups").clicked() {
                actions.push(UiAction::Navigate(Page::Groups));
            }
            match &data.group {
                Some(group) => {
                    ui.heading(theme.heading(ctx, &group.groupname));
                }
                None => {
                    ui.heading(theme.heading(ctx, "Notebooks"));
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("＋ New Notebook").clicked() {
                    actions.push(UiAction::OpenNotebookForm(None));
                }
            });
        });
        if let Some(group) = &data.group {
            if !group.description.is_empty() {
                ui.label(&group.description);
            }
        }
        ui.add_space(10.0);

        if let Some(error) = &data.error {
            ui.colored_label(theme.red(ctx), format!("error: {}", error));
            return;
        }
        let Some(notebooks) = &data.notebooks else {
            return;
        };

        if notebooks.is_empty() {
            ui.add_space(60.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Create your first notebook!").size(18.0));
            });
            return;
        }

        let group_id = data.group_id.clone();
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for notebook in notebooks {
                    notebook_card(ui, ctx, theme, &group_id, notebook, actions);
                }
            });
        });
    });
}

fn notebook_card(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &Theme,
    group_id: &str,
    notebook: &Notebook,
    actions: &mut ActionQueue,
) {
    egui::Frame::group(ui.style()).fill(theme.card_fill(ctx)).inner_margin(egui::Margin::same(12)).show(ui, |ui| {
        ui.set_width(250.0);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&notebook.title).size(17.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let heart = if notebook.liked {
                        egui::RichText::new("❤").color(theme.red(ctx))
                    } else {
                        egui::RichText::new("♡").color(theme.muted(ctx))
                    };
                    if ui
                        .add(egui::Button::new(heart).frame(false))
                        .on_hover_text("Like this notebook")
                        .clicked()
                    {
                        actions.push(UiAction::ToggleLike {
                            notebook_id: notebook.notebook_id.clone(),
                            liked: !notebook.liked,
                        });
                    }
                    if ui.small_button("🗑").clicked() {
                        actions.push(UiAction::ConfirmDeleteNotebook(notebook.clone()));
                    }
                    if ui.small_button("✏").clicked() {
                        actions.push(UiAction::OpenNotebookForm(Some(notebook.clone())));
                    }
                });
            });

            if !notebook.description.is_empty() {
                ui.label(&notebook.description);
            }
            ui.add_space(4.0);
            ui.weak(format!("{} cards", notebook.flashcards));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if ui.button("Cards").clicked() {
                    actions.push(UiAction::Navigate(Page::Flashcards {
                        group_id: group_id.to_string(),
                        notebook_id: notebook.notebook_id.clone(),
                    }));
                }
                if ui.button(theme.accent(ctx, "Study ▶")).clicked() {
                    actions.push(UiAction::Navigate(Page::Learn {
                        group_id: group_id.to_string(),
                        notebook_id: notebook.notebook_id.clone(),
                    }));
                }
            });
        });
    });
}
