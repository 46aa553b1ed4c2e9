use serde::{
    Deserialize,
    Serialize,
};

/// What to do when a best-effort bookmark/like PATCH fails after the local
/// state has already been flipped optimistically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncFailurePolicy {
    /// Log and keep the optimistic state. The default.
    Ignore,
    /// Undo the optimistic flip.
    Rollback,
    /// Send the PATCH once more, then fall back to ignoring.
    Retry,
}

impl SyncFailurePolicy {
    pub const ALL: [SyncFailurePolicy; 3] =
        [SyncFailurePolicy::Ignore, SyncFailurePolicy::Rollback, SyncFailurePolicy::Retry];

    pub fn label(&self) -> &'static str {
        match self {
            SyncFailurePolicy::Ignore => "Keep local change",
            SyncFailurePolicy::Rollback => "Undo local change",
            SyncFailurePolicy::Retry => "Retry once",
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub api_base_url: String,
    /// Account id sent on create requests. Normally provisioned by the
    /// sign-in flow; generated locally when absent.
    pub user_sub: String,
    pub dark_mode: bool,
    pub bookmark_sync_failure: SyncFailurePolicy,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            user_sub: uuid::Uuid::new_v4().to_string(),
            dark_mode: true,
            bookmark_sync_failure: SyncFailurePolicy::Ignore,
        }
    }
}
