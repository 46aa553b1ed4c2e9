use crate::gui::{
    confirm_modal::ConfirmModal,
    error_modal::ErrorModal,
    flashcard_form::FlashcardFormModal,
    group_form::GroupFormModal,
    notebook_form::NotebookFormModal,
    settings::SettingsModal,
};

pub struct Modals {
    pub error: ErrorModal,
    pub confirm: ConfirmModal,
    pub settings: SettingsModal,
    pub group_form: GroupFormModal,
    pub notebook_form: NotebookFormModal,
    pub flashcard_form: FlashcardFormModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            error: ErrorModal::new(),
            confirm: ConfirmModal::new(),
            settings: SettingsModal::new(),
            group_form: GroupFormModal::new(),
            notebook_form: NotebookFormModal::new(),
            flashcard_form: FlashcardFormModal::new(),
        }
    }
}
