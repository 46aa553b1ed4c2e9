pub mod data;
pub mod settings_modal;

pub use data::{
    SettingsData,
    SyncFailurePolicy,
};
pub use settings_modal::SettingsModal;
