use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    actions::UiAction,
    app::{
        Page,
        TangochoApp,
    },
};

pub fn show(ctx: &egui::Context, app: &mut TangochoApp) {
    let theme = &app.theme;
    let data = &app.flashcards_data;
    let actions = &mut app.actions;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⬅").on_hover_text("Back to notebooks").clicked() {
                actions.push(UiAction::Navigate(Page::Notebooks {
                    group_id: data.group_id.clone(),
                }));
            }
            let title = data.notebook.as_ref().map(|n| n.title.as_str()).unwrap_or("Cards");
            ui.heading(theme.heading(ctx, title));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(theme.accent(ctx, "Start Studying ▶")).clicked() {
                    actions.push(UiAction::Navigate(Page::Learn {
                        group_id: data.group_id.clone(),
                        notebook_id: data.notebook_id.clone(),
                    }));
                }
                if ui.button("＋ Add Card").clicked() {
                    actions.push(UiAction::OpenFlashcardForm(None));
                }
            });
        });
        if let Some(notebook) = &data.notebook {
            ui.weak(format!("{} flashcards", notebook.flashcards));
        }
        ui.add_space(10.0);

        if let Some(error) = &data.error {
            ui.colored_label(theme.red(ctx), format!("error: {}", error));
            return;
        }
        let Some(cards) = &data.flashcards else {
            return;
        };

        if cards.is_empty() {
            ui.add_space(60.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Create your first card!").size(18.0));
            });
            return;
        }

        let text_height =
            egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

        egui::ScrollArea::vertical().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(140.0))
                .column(Column::remainder())
                .column(Column::auto().at_least(50.0))
                .column(Column::auto().at_least(90.0))
                .header(25.0, |mut header| {
                    header.col(|ui| {
                        ui.label(theme.heading(ctx, "Front"));
                    });
                    header.col(|ui| {
                        ui.label(theme.heading(ctx, "Back"));
                    });
                    header.col(|ui| {
                        ui.label(theme.heading(ctx, "Notes"));
                    });
                    header.col(|_ui| {});
                })
                .body(|body| {
                    body.rows(text_height + 8.0, cards.len(), |mut row| {
                        let card = &cards[row.index()];
                        row.col(|ui| {
                            ui.strong(&card.front_text);
                        });
                        row.col(|ui| {
                            ui.label(&card.back_text);
                        });
                        row.col(|ui| {
                            if card.has_detail() {
                                ui.weak("notes");
                            }
                        });
                        row.col(|ui| {
                            let bookmark = egui::RichText::new("🔖").color(if card.bookmarked {
                                theme.yellow(ctx)
                            } else {
                                theme.muted(ctx)
                            });
                            if ui
                                .add(egui::Button::new(bookmark).frame(false))
                                .on_hover_text("Bookmark")
                                .clicked()
                            {
                                actions.push(UiAction::ToggleListBookmark {
                                    flashcard_id: card.flashcard_id.clone(),
                                    bookmarked: !card.bookmarked,
                                });
                            }
                            if ui.small_button("✏").clicked() {
                                actions.push(UiAction::OpenFlashcardForm(Some(card.clone())));
                            }
                            if ui.small_button("🗑").clicked() {
                                actions.push(UiAction::ConfirmDeleteFlashcard(card.clone()));
                            }
                        });
                    });
                });
        });
    });
}
