use std::time::Instant;

use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    app::{
        LearnData,
        Page,
        TangochoApp,
    },
    note_view,
    theme::Theme,
};
use crate::core::{
    models::Flashcard,
    session::{
        CardFace,
        SessionAction,
        StudySession,
    },
};

pub fn show(ctx: &egui::Context, app: &mut TangochoApp) {
    let now = Instant::now();
    let theme = &app.theme;
    let data = &mut app.learn_data;
    let actions = &mut app.actions;

    // A failed initial load blocks the whole study UI.
    if let Some(error) = data.error.clone() {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(60.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(theme.red(ctx), format!("error: {}", error));
                ui.add_space(10.0);
                if ui.button("Back to card list").clicked() {
                    actions.push(UiAction::Navigate(Page::Flashcards {
                        group_id: data.group_id.clone(),
                        notebook_id: data.notebook_id.clone(),
                    }));
                }
            });
        });
        return;
    }

    if data.session.detail_open() {
        detail_panel(ctx, theme, data, now);
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⬅ Back to card list").clicked() {
                actions.push(UiAction::Navigate(Page::Flashcards {
                    group_id: data.group_id.clone(),
                    notebook_id: data.notebook_id.clone(),
                }));
            }
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let title = data.notebook.as_ref().map(|n| n.title.as_str()).unwrap_or("");
            ui.heading(theme.heading(ctx, title));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut bookmarked_only = data.session.bookmarked_only();
                if ui.checkbox(&mut bookmarked_only, "Bookmarked only").changed() {
                    data.session.apply(SessionAction::SetBookmarkedOnly(bookmarked_only), now);
                }
            });
        });

        if !data.deck_loaded {
            return;
        }

        let deck_len = data.session.deck().len();
        ui.horizontal(|ui| {
            let position = if deck_len > 0 { data.session.cursor() + 1 } else { 0 };
            ui.weak(format!("Card {} of {}", position, deck_len));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!("{} known", data.session.known_count()));
            });
        });
        ui.add(egui::ProgressBar::new(data.session.progress() / 100.0).desired_height(6.0));

        if deck_len == 0 {
            ui.add_space(60.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No cards to show").size(18.0));
                ui.add_space(6.0);
                if data.session.bookmarked_only() {
                    ui.weak("Bookmark the cards you want to focus on!");
                    ui.add_space(10.0);
                    if ui.button("Show all cards").clicked() {
                        data.session.apply(SessionAction::SetBookmarkedOnly(false), now);
                    }
                } else {
                    ui.weak("Create some cards first!");
                }
            });
            return;
        }

        let Some(card) = data.session.current().cloned() else {
            return;
        };
        let face = data.session.face();
        let is_known = data.session.is_known(&card.flashcard_id);
        let is_unknown = data.session.is_unknown(&card.flashcard_id);

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            card_face(
                ui,
                ctx,
                theme,
                &card,
                face,
                is_known,
                is_unknown,
                &mut data.session,
                actions,
                now,
            );

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                let total = ui.available_width();
                ui.add_space((total - 420.0).max(0.0) / 2.0);

                let at_start = data.session.cursor() == 0;
                if ui
                    .add_enabled(!at_start, egui::Button::new("⬅").min_size(egui::vec2(48.0, 32.0)))
                    .clicked()
                {
                    data.session.apply(SessionAction::Previous, now);
                }

                ui.add_space(16.0);

                if ui
                    .add(
                        egui::Button::new(egui::RichText::new("✖ Still learning").color(
                            theme.red(ctx),
                        ))
                        .min_size(egui::vec2(130.0, 32.0)),
                    )
                    .clicked()
                {
                    data.session
                        .apply(SessionAction::MarkUnknown(card.flashcard_id.clone()), now);
                }
                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new("◯ Got it").color(theme.green(ctx)),
                        )
                        .min_size(egui::vec2(130.0, 32.0)),
                    )
                    .clicked()
                {
                    // The bookmarked tally rides along with the plain one.
                    data.session
                        .apply(SessionAction::MarkKnown(card.flashcard_id.clone()), now);
                    data.session.apply(
                        SessionAction::MarkBookmarkedKnown(card.flashcard_id.clone()),
                        now,
                    );
                }

                ui.add_space(16.0);

                let at_end = data.session.cursor() + 1 >= deck_len;
                if ui
                    .add_enabled(!at_end, egui::Button::new("➡").min_size(egui::vec2(48.0, 32.0)))
                    .clicked()
                {
                    data.session.apply(SessionAction::Next, now);
                }
            });
        });
    });
}

#[allow(clippy::too_many_arguments)]
fn card_face(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &Theme,
    card: &Flashcard,
    face: CardFace,
    is_known: bool,
    is_unknown: bool,
    session: &mut StudySession,
    actions: &mut ActionQueue,
    now: Instant,
) {
    let size = egui::vec2(ui.available_width().min(420.0), 230.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    let border = match face {
        CardFace::Back => theme.green(ctx),
        CardFace::Front if is_unknown => theme.red(ctx),
        CardFace::Front if is_known => theme.cyan(ctx),
        CardFace::Front => theme.muted(ctx),
    };

    let painter = ui.painter();
    painter.rect_filled(rect, 12.0, theme.card_fill(ctx));
    painter.rect_stroke(rect, 12.0, egui::Stroke::new(2.0, border), egui::StrokeKind::Inside);

    match face {
        CardFace::Front => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &card.front_text,
                egui::FontId::proportional(30.0),
                ui.visuals().strong_text_color(),
            );
            painter.text(
                rect.center() + egui::vec2(0.0, 52.0),
                egui::Align2::CENTER_CENTER,
                "Click to reveal the answer",
                egui::FontId::proportional(12.0),
                ui.visuals().weak_text_color(),
            );
        }
        CardFace::Back => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &card.back_text,
                egui::FontId::proportional(22.0),
                ui.visuals().strong_text_color(),
            );
        }
    }

    // Widgets layered on the card swallow their clicks; only a bare click
    // on the face flips it.
    let mut covered = false;

    let bookmark_rect =
        egui::Rect::from_min_size(rect.right_top() + egui::vec2(-40.0, 8.0), egui::vec2(32.0, 26.0));
    let bookmark = egui::RichText::new("🔖").size(16.0).color(if card.bookmarked {
        theme.yellow(ctx)
    } else {
        theme.muted(ctx)
    });
    let bookmark_response = ui.put(bookmark_rect, egui::Button::new(bookmark).frame(false));
    covered |= bookmark_response.hovered();
    if bookmark_response.clicked() {
        actions.push(UiAction::ToggleStudyBookmark {
            flashcard_id: card.flashcard_id.clone(),
            bookmarked: !card.bookmarked,
        });
    }

    if face == CardFace::Back && card.has_detail() {
        let detail_rect = egui::Rect::from_center_size(
            rect.center_bottom() + egui::vec2(0.0, -26.0),
            egui::vec2(120.0, 26.0),
        );
        let detail_response = ui.put(detail_rect, egui::Button::new("📖 Details"));
        covered |= detail_response.hovered();
        if detail_response.clicked() {
            session.apply(SessionAction::SetDetailOpen(true), now);
        }
    }

    if response.clicked() && !covered {
        session.apply(SessionAction::Flip, now);
    }
}

fn detail_panel(ctx: &egui::Context, theme: &Theme, data: &mut LearnData, now: Instant) {
    let Some(card) = data.session.current().cloned() else {
        return;
    };

    egui::SidePanel::right("detail_panel").min_width(300.0).show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.heading(theme.heading(ctx, &card.front_text));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✖").clicked() {
                    data.session.apply(SessionAction::SetDetailOpen(false), now);
                }
            });
        });
        ui.label(&card.back_text);
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            note_view::show_detail(ui, &card.detail);
        });
    });
}
