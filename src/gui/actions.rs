use super::app::Page;
use crate::core::models::{
    Flashcard,
    Group,
    Notebook,
};

// A simple ui action queue so page functions don't need mutable access to
// the router and task manager while they borrow page data.
#[derive(Debug, Clone)]
pub enum UiAction {
    Navigate(Page),

    // Forms (None = create, Some = edit)
    OpenGroupForm(Option<Group>),
    OpenNotebookForm(Option<Notebook>),
    OpenFlashcardForm(Option<Flashcard>),

    // Two-step deletes, routed through the confirmation modal
    ConfirmDeleteGroup(Group),
    ConfirmDeleteNotebook(Notebook),
    ConfirmDeleteFlashcard(Flashcard),

    // Optimistic flag flips; `liked`/`bookmarked` carry the new value
    ToggleLike { notebook_id: String, liked: bool },
    ToggleListBookmark { flashcard_id: String, bookmarked: bool },
    ToggleStudyBookmark { flashcard_id: String, bookmarked: bool },
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}
