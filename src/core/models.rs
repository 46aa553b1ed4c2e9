use serde::{
    Deserialize,
    Serialize,
};

/// A single front/back vocabulary card. The API mixes naming styles on the
/// wire: the id is camelCase, the text fields are snake_case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(rename = "flashcardId")]
    pub flashcard_id: String,
    pub front_text: String,
    pub back_text: String,
    #[serde(default)]
    pub detail: String,
    pub bookmarked: bool,
}

impl Flashcard {
    pub fn has_detail(&self) -> bool {
        !self.detail.trim().is_empty()
    }
}

/// A notebook of flashcards inside a group. `flashcards` is the card count
/// maintained server-side. `group_id` is only present on some endpoints
/// (the liked listing includes it, the per-id fetch does not).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notebook {
    #[serde(default)]
    pub notebook_id: String,
    #[serde(default)]
    pub group_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub flashcards: u32,
    #[serde(default)]
    pub liked: bool,
}

/// A top-level group of notebooks. The per-id fetch returns only
/// `groupname` and `description`, so everything else defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default)]
    pub group_id: String,
    pub groupname: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notebooks: u32,
    #[serde(default)]
    pub flashcards: u32,
}
