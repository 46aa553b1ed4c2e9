use crate::core::{
    Flashcard,
    Group,
    Notebook,
};

/// Completed background work, drained by the app once per frame. Fetch
/// results carry the id they were requested for so stale responses from an
/// abandoned page can be ignored.
#[derive(Debug, Clone)]
pub enum TaskResult {
    GroupsLoaded(Result<Vec<Group>, String>),
    GroupLoaded {
        group_id: String,
        result: Result<Group, String>,
    },
    NotebooksLoaded {
        group_id: String,
        result: Result<Vec<Notebook>, String>,
    },
    NotebookLoaded {
        notebook_id: String,
        result: Result<Notebook, String>,
    },
    LikedNotebooksLoaded(Result<Vec<Notebook>, String>),
    FlashcardsLoaded {
        notebook_id: String,
        result: Result<Vec<Flashcard>, String>,
    },

    GroupSaved(Result<(), String>),
    GroupDeleted {
        group_id: String,
        result: Result<(), String>,
    },
    NotebookSaved(Result<(), String>),
    NotebookDeleted {
        notebook_id: String,
        result: Result<(), String>,
    },
    FlashcardSaved(Result<(), String>),
    FlashcardDeleted {
        flashcard_id: String,
        result: Result<(), String>,
    },

    /// Completion of a best-effort PATCH of the bookmarked flag. `attempt`
    /// counts from 1 so the retry policy can stop after a second try.
    BookmarkSynced {
        flashcard_id: String,
        bookmarked: bool,
        attempt: u32,
        result: Result<(), String>,
    },
    LikeSynced {
        notebook_id: String,
        liked: bool,
        attempt: u32,
        result: Result<(), String>,
    },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::GroupsLoaded(_) => "groups_loaded",
            TaskResult::GroupLoaded { .. } => "group_loaded",
            TaskResult::NotebooksLoaded { .. } => "notebooks_loaded",
            TaskResult::NotebookLoaded { .. } => "notebook_loaded",
            TaskResult::LikedNotebooksLoaded(_) => "liked_notebooks_loaded",
            TaskResult::FlashcardsLoaded { .. } => "flashcards_loaded",
            TaskResult::GroupSaved(_) => "group_saved",
            TaskResult::GroupDeleted { .. } => "group_deleted",
            TaskResult::NotebookSaved(_) => "notebook_saved",
            TaskResult::NotebookDeleted { .. } => "notebook_deleted",
            TaskResult::FlashcardSaved(_) => "flashcard_saved",
            TaskResult::FlashcardDeleted { .. } => "flashcard_deleted",
            TaskResult::BookmarkSynced { .. } => "bookmark_synced",
            TaskResult::LikeSynced { .. } => "like_synced",
        }
    }
}
