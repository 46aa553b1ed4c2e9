use eframe::egui;

use super::{
    actions::UiAction,
    app::{
        Page,
        TangochoApp,
    },
};

pub fn show(ctx: &egui::Context, app: &mut TangochoApp) {
    let theme = &app.theme;
    let data = &app.liked_data;
    let actions = &mut app.actions;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⬅").on_hover_text("Back to groups").clicked() {
                actions.push(UiAction::Navigate(Page::Groups));
            }
            ui.heading(theme.heading(ctx, "Liked Notebooks"));
        });
        ui.label("All the notebooks you marked with a ❤, across every group.");
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
                ui.label(egui::RichText::new("No liked notebooks yet").size(18.0));
                ui.weak("Tap the heart on a notebook to collect it here.");
            });
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for notebook in notebooks {
                egui::Frame::group(ui.style()).fill(theme.card_fill(ctx)).inner_margin(egui::Margin::same(12)).show(
                    ui,
                    |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new(&notebook.title).size(16.0).strong(),
                                    );
                                    if let Some(groupname) =
                                        data.group_names.get(&notebook.group_id)
                                    {
                                        ui.weak(format!("in {}", groupname));
                                    }
                                });
                                if !notebook.description.is_empty() {
                                    ui.label(&notebook.description);
                                }
                                ui.weak(format!("{} cards", notebook.flashcards));
                            });

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("🗑").clicked() {
                                        actions.push(UiAction::ConfirmDeleteNotebook(
                                            notebook.clone(),
                                        ));
                                    }
                                    if ui.button(theme.accent(ctx, "Study ▶")).clicked() {
                                        actions.push(UiAction::Navigate(Page::Learn {
                                            group_id: notebook.group_id.clone(),
                                            notebook_id: notebook.notebook_id.clone(),
                                        }));
                                    }
                                    if ui.button("Cards").clicked() {
                                        actions.push(UiAction::Navigate(Page::Flashcards {
                                            group_id: notebook.group_id.clone(),
                                            notebook_id: notebook.notebook_id.clone(),
                                        }));
                                    }
                                    let heart = if notebook.liked {
                                        egui::RichText::new("❤").color(theme.red(ctx))
                                    } else {
                                        egui::RichText::new("♡").color(theme.muted(ctx))
                                    };
                                    if ui.add(egui::Button::new(heart).frame(false)).clicked() {
                                        actions.push(UiAction::ToggleLike {
                                            notebook_id: notebook.notebook_id.clone(),
                                            liked: !notebook.liked,
                                        });
                                    }
                                },
                            );
                        });
                    },
                );
                ui.add_space(6.0);
            }
        });
    });
}
