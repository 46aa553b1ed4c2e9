mod modals;
mod page_data;

use std::time::Instant;

use eframe::egui;
use modals::Modals;
pub use page_data::{
    FlashcardsData,
    GroupsData,
    LearnData,
    LikedData,
    NotebooksData,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    confirm_modal::DeleteTarget,
    flashcards_page,
    groups_page,
    learn_page,
    liked_page,
    message_overlay::MessageOverlay,
    notebooks_page,
    recent_notebooks::RecentNotebooks,
    settings::{
        SettingsData,
        SyncFailurePolicy,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    api::client::{
        GroupPayload,
        NotebookPayload,
    },
    core::{
        session::SessionAction,
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Groups,
    Notebooks { group_id: String },
    Flashcards { group_id: String, notebook_id: String },
    Learn { group_id: String, notebook_id: String },
    Liked,
}

pub struct TangochoApp {
    pub page: Page,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub theme: Theme,
    pub actions: ActionQueue,
    pub message_overlay: MessageOverlay,
    pub modals: Modals,
    pub recent: RecentNotebooks,

    // Per-page loaded state
    pub groups_data: GroupsData,
    pub notebooks_data: NotebooksData,
    pub flashcards_data: FlashcardsData,
    pub learn_data: LearnData,
    pub liked_data: LikedData,

    task_manager: TaskManager,
}

impl TangochoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let recent = load_json_or_default::<RecentNotebooks>("recent_notebooks.json");

        let theme = Theme::night();
        set_theme(&cc.egui_ctx, &theme);

        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        let mut app = Self {
            page: Page::Groups,
            settings_data,
            theme,
            actions: ActionQueue::new(),
            message_overlay: MessageOverlay::new(),
            modals: Modals::default(),
            recent,
            groups_data: GroupsData::default(),
            notebooks_data: NotebooksData::default(),
            flashcards_data: FlashcardsData::default(),
            learn_data: LearnData::default(),
            liked_data: LikedData::default(),
            task_manager: TaskManager::new(),
        };

        // First run generates the account id; persist it right away.
        app.save_settings();
        app.navigate(Page::Groups);
        app
    }

    fn base_url(&self) -> String {
        self.settings_data.api_base_url.clone()
    }

    pub fn navigate(&mut self, page: Page) {
        match &page {
            Page::Groups => {
                self.groups_data = GroupsData::default();
                self.message_overlay.set_message("Loading groups...");
                self.task_manager.load_groups(self.base_url());
            }
            Page::Notebooks { group_id } => {
                self.notebooks_data.reset(group_id.clone());
                self.message_overlay.set_message("Loading notebooks...");
                self.task_manager.load_group(self.base_url(), group_id.clone());
                self.task_manager.load_notebooks(self.base_url(), group_id.clone());
            }
            Page::Flashcards { group_id, notebook_id } => {
                self.flashcards_data.reset(group_id.clone(), notebook_id.clone());
                self.message_overlay.set_message("Loading cards...");
                self.task_manager.load_learn_data(self.base_url(), notebook_id.clone());
            }
            Page::Learn { group_id, notebook_id } => {
                self.learn_data.reset(group_id.clone(), notebook_id.clone());
                self.message_overlay.set_message("Loading cards...");
                self.task_manager.load_learn_data(self.base_url(), notebook_id.clone());
            }
            Page::Liked => {
                self.liked_data.reset();
                self.message_overlay.set_message("Loading liked notebooks...");
                self.task_manager.load_liked_notebooks(self.base_url());
            }
        }
        self.page = page;
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::GroupsLoaded(result) => {
                if !matches!(self.page, Page::Groups) {
                    return;
                }
                self.message_overlay.clear_message();
                match result {
                    Ok(groups) => self.groups_data.groups = Some(groups),
                    Err(e) => self.groups_data.error = Some(e),
                }
            }

            TaskResult::GroupLoaded { group_id, result } => match result {
                Ok(group) => {
                    if self.notebooks_data.group_id == group_id {
                        self.notebooks_data.group = Some(group.clone());
                    }
                    self.liked_data.group_names.insert(group_id, group.groupname);
                }
                Err(e) => {
                    if matches!(self.page, Page::Notebooks { .. })
                        && self.notebooks_data.group_id == group_id
                    {
                        self.message_overlay.clear_message();
                        self.notebooks_data.error = Some(e);
                    }
                }
            },

            TaskResult::NotebooksLoaded { group_id, result } => {
                if !matches!(self.page, Page::Notebooks { .. })
                    || self.notebooks_data.group_id != group_id
                {
                    return;
                }
                self.message_overlay.clear_message();
                match result {
                    Ok(notebooks) => self.notebooks_data.notebooks = Some(notebooks),
                    Err(e) => self.notebooks_data.error = Some(e),
                }
            }

            TaskResult::NotebookLoaded { notebook_id, result } => match result {
                Ok(notebook) => {
                    if self.flashcards_data.notebook_id == notebook_id {
                        self.flashcards_data.notebook = Some(notebook.clone());
                    }
                    if self.learn_data.notebook_id == notebook_id {
                        self.learn_data.notebook = Some(notebook);
                        self.maybe_record_recent();
                    }
                }
                Err(e) => {
                    self.message_overlay.clear_message();
                    if matches!(self.page, Page::Flashcards { .. })
                        && self.flashcards_data.notebook_id == notebook_id
                    {
                        self.flashcards_data.error = Some(e);
                    } else if matches!(self.page, Page::Learn { .. })
                        && self.learn_data.notebook_id == notebook_id
                    {
                        self.learn_data.error = Some(e);
                    }
                }
            },

            TaskResult::FlashcardsLoaded { notebook_id, result } => match result {
                Ok(cards) => {
                    if self.flashcards_data.notebook_id == notebook_id {
                        self.flashcards_data.flashcards = Some(cards.clone());
                        if matches!(self.page, Page::Flashcards { .. }) {
                            self.message_overlay.clear_message();
                        }
                    }
                    if self.learn_data.notebook_id == notebook_id {
                        self.learn_data
                            .session
                            .apply(SessionAction::LoadDeck(cards), Instant::now());
                        self.learn_data.deck_loaded = true;
                        if matches!(self.page, Page::Learn { .. }) {
                            self.message_overlay.clear_message();
                            self.maybe_record_recent();
                        }
                    }
                }
                Err(e) => {
                    self.message_overlay.clear_message();
                    if matches!(self.page, Page::Flashcards { .. })
                        && self.flashcards_data.notebook_id == notebook_id
                    {
                        self.flashcards_data.error = Some(e);
                    } else if matches!(self.page, Page::Learn { .. })
                        && self.learn_data.notebook_id == notebook_id
                    {
                        self.learn_data.error = Some(e);
                    }
                }
            },

            TaskResult::LikedNotebooksLoaded(result) => {
                if !matches!(self.page, Page::Liked) {
                    return;
                }
                self.message_overlay.clear_message();
                match result {
                    Ok(notebooks) => {
                        // The listing only carries group ids; resolve the
                        // names for display like the group headers do.
                        let mut group_ids: Vec<String> =
                            notebooks.iter().map(|n| n.group_id.clone()).collect();
                        group_ids.sort();
                        group_ids.dedup();
                        for group_id in group_ids {
                            if !self.liked_data.group_names.contains_key(&group_id) {
                                self.task_manager.load_group(self.base_url(), group_id);
                            }
                        }
                        self.liked_data.notebooks = Some(notebooks);
                    }
                    Err(e) => self.liked_data.error = Some(e),
                }
            }

            TaskResult::GroupSaved(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(()) => {
                        if matches!(self.page, Page::Groups) {
                            self.task_manager.load_groups(self.base_url());
                        }
                    }
                    Err(e) => {
                        self.modals.error.show_error(
                            "Save Error",
                            "Unable to save the group",
                            Some(&e),
                        );
                    }
                }
            }

            TaskResult::NotebookSaved(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(()) => {
                        if matches!(self.page, Page::Notebooks { .. }) {
                            self.task_manager.load_notebooks(
                                self.base_url(),
                                self.notebooks_data.group_id.clone(),
                            );
                        }
                    }
                    Err(e) => {
                        self.modals.error.show_error(
                            "Save Error",
                            "Unable to save the notebook",
                            Some(&e),
                        );
                    }
                }
            }

            TaskResult::FlashcardSaved(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(()) => {
                        if matches!(self.page, Page::Flashcards { .. }) {
                            self.task_manager.load_flashcards(
                                self.base_url(),
                                self.flashcards_data.notebook_id.clone(),
                            );
                        }
                    }
                    Err(e) => {
                        self.modals.error.show_error(
                            "Save Error",
                            "Unable to save the card",
                            Some(&e),
                        );
                    }
                }
            }

            TaskResult::GroupDeleted { group_id, result } => {
                self.message_overlay.clear_message();
                match result {
                    Ok(()) => {
                        if let Some(groups) = &mut self.groups_data.groups {
                            groups.retain(|g| g.group_id != group_id);
                        }
                    }
                    Err(e) => {
                        self.modals.error.show_error(
                            "Delete Error",
                            "Unable to delete the group",
                            Some(&e),
                        );
                    }
                }
            }

            TaskResult::NotebookDeleted { notebook_id, result } => {
                self.message_overlay.clear_message();
                match result {
                    Ok(()) => {
                        if let Some(notebooks) = &mut self.notebooks_data.notebooks {
                            notebooks.retain(|n| n.notebook_id != notebook_id);
                        }
                        if let Some(notebooks) = &mut self.liked_data.notebooks {
                            notebooks.retain(|n| n.notebook_id != notebook_id);
                        }
                        self.recent.remove(&notebook_id);
                        self.save_recent();
                    }
                    Err(e) => {
                        self.modals.error.show_error(
                            "Delete Error",
                            "Unable to delete the notebook",
                            Some(&e),
                        );
                    }
                }
            }

            TaskResult::FlashcardDeleted { flashcard_id, result } => {
                self.message_overlay.clear_message();
                match result {
                    Ok(()) => {
                        if let Some(cards) = &mut self.flashcards_data.flashcards {
                            cards.retain(|c| c.flashcard_id != flashcard_id);
                        }
                    }
                    Err(e) => {
                        self.modals.error.show_error(
                            "Delete Error",
                            "Unable to delete the card",
                            Some(&e),
                        );
                    }
                }
            }

            TaskResult::BookmarkSynced { flashcard_id, bookmarked, attempt, result } => {
                if let Err(e) = result {
                    eprintln!("[Bookmark Sync] PATCH failed for {}: {}", flashcard_id, e);
                    match self.settings_data.bookmark_sync_failure {
                        SyncFailurePolicy::Ignore => {}
                        SyncFailurePolicy::Rollback => {
                            self.learn_data.session.apply(
                                SessionAction::RollbackBookmark(flashcard_id.clone()),
                                Instant::now(),
                            );
                            self.flashcards_data.set_bookmarked(&flashcard_id, !bookmarked);
                        }
                        SyncFailurePolicy::Retry => {
                            if attempt < 2 {
                                self.task_manager.sync_bookmark(
                                    self.base_url(),
                                    flashcard_id,
                                    bookmarked,
                                    attempt + 1,
                                );
                            }
                        }
                    }
                }
            }

            TaskResult::LikeSynced { notebook_id, liked, attempt, result } => {
                if let Err(e) = result {
                    eprintln!("[Like Sync] PATCH failed for {}: {}", notebook_id, e);
                    match self.settings_data.bookmark_sync_failure {
                        SyncFailurePolicy::Ignore => {}
                        SyncFailurePolicy::Rollback => {
                            self.notebooks_data.set_liked(&notebook_id, !liked);
                            self.liked_data.set_liked(&notebook_id, !liked);
                        }
                        SyncFailurePolicy::Retry => {
                            if attempt < 2 {
                                self.task_manager.sync_like(
                                    self.base_url(),
                                    notebook_id,
                                    liked,
                                    attempt + 1,
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Navigate(page) => self.navigate(page),

            UiAction::OpenGroupForm(Some(group)) => self.modals.group_form.open_edit(&group),
            UiAction::OpenGroupForm(None) => self.modals.group_form.open_create(),
            UiAction::OpenNotebookForm(Some(notebook)) => {
                self.modals.notebook_form.open_edit(&notebook)
            }
            UiAction::OpenNotebookForm(None) => self.modals.notebook_form.open_create(),
            UiAction::OpenFlashcardForm(Some(card)) => {
                self.modals.flashcard_form.open_edit(&card)
            }
            UiAction::OpenFlashcardForm(None) => self.modals.flashcard_form.open_create(),

            UiAction::ConfirmDeleteGroup(group) => self.modals.confirm.request(
                format!("Delete the group \"{}\" and everything in it?", group.groupname),
                DeleteTarget::Group(group.group_id),
            ),
            UiAction::ConfirmDeleteNotebook(notebook) => self.modals.confirm.request(
                format!("Delete the notebook \"{}\" and all of its cards?", notebook.title),
                DeleteTarget::Notebook(notebook.notebook_id),
            ),
            UiAction::ConfirmDeleteFlashcard(card) => self.modals.confirm.request(
                format!("Delete the card \"{}\"?", card.front_text),
                DeleteTarget::Flashcard(card.flashcard_id),
            ),

            UiAction::ToggleLike { notebook_id, liked } => {
                self.notebooks_data.set_liked(&notebook_id, liked);
                self.liked_data.set_liked(&notebook_id, liked);
                self.task_manager.sync_like(self.base_url(), notebook_id, liked, 1);
            }
            UiAction::ToggleListBookmark { flashcard_id, bookmarked } => {
                self.flashcards_data.set_bookmarked(&flashcard_id, bookmarked);
                self.task_manager.sync_bookmark(self.base_url(), flashcard_id, bookmarked, 1);
            }
            UiAction::ToggleStudyBookmark { flashcard_id, bookmarked } => {
                self.learn_data.session.apply(
                    SessionAction::ToggleBookmark(flashcard_id.clone()),
                    Instant::now(),
                );
                // Keep the list view in step with the study view.
                self.flashcards_data.set_bookmarked(&flashcard_id, bookmarked);
                self.task_manager.sync_bookmark(self.base_url(), flashcard_id, bookmarked, 1);
            }
        }
    }

    /// A non-empty deck on the learn page counts as a study visit.
    fn maybe_record_recent(&mut self) {
        if self.learn_data.recorded_recent || !self.learn_data.deck_loaded {
            return;
        }
        let Some(notebook) = &self.learn_data.notebook else {
            return;
        };
        let card_count = self.learn_data.session.deck().len();
        if card_count == 0 {
            return;
        }

        self.recent.add(
            self.learn_data.notebook_id.clone(),
            self.learn_data.group_id.clone(),
            notebook.title.clone(),
            card_count,
        );
        self.learn_data.recorded_recent = true;
        self.save_recent();
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn save_recent(&self) {
        if let Err(e) = save_json(&self.recent, "recent_notebooks.json") {
            eprintln!("Failed to save recent notebooks: {}", e);
        }
    }
}

impl eframe::App for TangochoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();
        for result in task_results {
            self.handle_task_result(result);
        }

        // Drive the flip-guard timer of the study session.
        let now = Instant::now();
        if self.learn_data.session.poll(now) {
            ctx.request_repaint();
        }
        if let Some(delay) = self.learn_data.session.pending_delay(now) {
            ctx.request_repaint_after(delay);
        }

        TopBar::show(ctx, &mut self.modals.settings, &self.settings_data, &mut self.actions);

        // The top bar switch flips the egui theme; persist it.
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }

        match self.page {
            Page::Groups => groups_page::show(ctx, self),
            Page::Notebooks { .. } => notebooks_page::show(ctx, self),
            Page::Flashcards { .. } => flashcards_page::show(ctx, self),
            Page::Learn { .. } => learn_page::show(ctx, self),
            Page::Liked => liked_page::show(ctx, self),
        }

        if let Some(settings) = self.modals.settings.show(ctx) {
            let url_changed = settings.api_base_url != self.settings_data.api_base_url;
            self.settings_data = settings;
            self.save_settings();
            if url_changed {
                // Refetch the current page against the new server.
                self.navigate(self.page.clone());
            }
        }

        if let Some(result) = self.modals.group_form.show(ctx) {
            self.message_overlay.set_message("Saving group...");
            let payload = GroupPayload {
                sub: result.group_id.is_none().then(|| self.settings_data.user_sub.clone()),
                groupname: result.groupname,
                description: result.description,
            };
            self.task_manager.save_group(self.base_url(), result.group_id, payload);
        }

        if let Some(result) = self.modals.notebook_form.show(ctx) {
            let group_id = self.notebooks_data.group_id.clone();
            self.message_overlay.set_message("Saving notebook...");
            let payload = NotebookPayload {
                sub: result.notebook_id.is_none().then(|| self.settings_data.user_sub.clone()),
                group_id: result.notebook_id.is_some().then(|| group_id.clone()),
                title: result.title,
                description: result.description,
            };
            self.task_manager.save_notebook(
                self.base_url(),
                group_id,
                result.notebook_id,
                payload,
            );
        }

        if let Some(result) = self.modals.flashcard_form.show(ctx) {
            self.message_overlay.set_message("Saving card...");
            self.task_manager.save_flashcard(
                self.base_url(),
                self.flashcards_data.notebook_id.clone(),
                result.flashcard_id,
                result.payload,
            );
        }

        if let Some(target) = self.modals.confirm.show(ctx) {
            match target {
                DeleteTarget::Group(group_id) => {
                    self.message_overlay.set_message("Deleting group...");
                    self.task_manager.delete_group(self.base_url(), group_id);
                }
                DeleteTarget::Notebook(notebook_id) => {
                    self.message_overlay.set_message("Deleting notebook...");
                    self.task_manager.delete_notebook(self.base_url(), notebook_id);
                }
                DeleteTarget::Flashcard(flashcard_id) => {
                    self.message_overlay.set_message("Deleting card...");
                    self.task_manager.delete_flashcard(self.base_url(), flashcard_id);
                }
            }
        }

        self.message_overlay.show(ctx);
        self.modals.error.show(ctx);

        let queued: Vec<UiAction> = self.actions.drain().collect();
        for action in queued {
            self.handle_action(action);
        }
    }
}
