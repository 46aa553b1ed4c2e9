use std::collections::HashMap;

use crate::core::{
    Flashcard,
    Group,
    Notebook,
    StudySession,
};

/// Loaded state for the groups listing. `groups` is None while the fetch is
/// in flight; an empty Vec is a real (empty) result.
#[derive(Default)]
pub struct GroupsData {
    pub groups: Option<Vec<Group>>,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct NotebooksData {
    pub group_id: String,
    pub group: Option<Group>,
    pub notebooks: Option<Vec<Notebook>>,
    pub error: Option<String>,
}

impl NotebooksData {
    pub fn reset(&mut self, group_id: String) {
        *self = Self { group_id, ..Default::default() };
    }

    pub fn set_liked(&mut self, notebook_id: &str, liked: bool) {
        if let Some(notebooks) = &mut self.notebooks {
            if let Some(notebook) =
                notebooks.iter_mut().find(|n| n.notebook_id == notebook_id)
            {
                notebook.liked = liked;
            }
        }
    }
}

#[derive(Default)]
pub struct FlashcardsData {
    pub group_id: String,
    pub notebook_id: String,
    pub notebook: Option<Notebook>,
    pub flashcards: Option<Vec<Flashcard>>,
    pub error: Option<String>,
}

impl FlashcardsData {
    pub fn reset(&mut self, group_id: String, notebook_id: String) {
        *self = Self { group_id, notebook_id, ..Default::default() };
    }

    pub fn set_bookmarked(&mut self, flashcard_id: &str, bookmarked: bool) {
        if let Some(cards) = &mut self.flashcards {
            if let Some(card) = cards.iter_mut().find(|c| c.flashcard_id == flashcard_id) {
                card.bookmarked = bookmarked;
            }
        }
    }
}

/// The learn page owns its session for the duration of one visit; leaving
/// and re-entering the page starts a fresh one.
#[derive(Default)]
pub struct LearnData {
    pub group_id: String,
    pub notebook_id: String,
    pub notebook: Option<Notebook>,
    pub session: StudySession,
    pub deck_loaded: bool,
    pub error: Option<String>,
    pub recorded_recent: bool,
}

impl LearnData {
    pub fn reset(&mut self, group_id: String, notebook_id: String) {
        *self = Self { group_id, notebook_id, ..Default::default() };
    }
}

#[derive(Default)]
pub struct LikedData {
    pub notebooks: Option<Vec<Notebook>>,
    pub group_names: HashMap<String, String>,
    pub error: Option<String>,
}

impl LikedData {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_liked(&mut self, notebook_id: &str, liked: bool) {
        if let Some(notebooks) = &mut self.notebooks {
            if let Some(notebook) =
                notebooks.iter_mut().find(|n| n.notebook_id == notebook_id)
            {
                notebook.liked = liked;
            }
        }
    }
}
