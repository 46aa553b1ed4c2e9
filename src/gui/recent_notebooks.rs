use std::collections::VecDeque;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentNotebookEntry {
    pub notebook_id: String,
    pub group_id: String,
    pub title: String,
    pub last_studied: chrono::DateTime<chrono::Utc>,
    pub card_count: usize,
}

impl RecentNotebookEntry {
    pub fn format_last_studied(&self) -> String {
        let local_time = self.last_studied.with_timezone(&chrono::Local);
        local_time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn format_card_count(&self) -> String {
        if self.card_count == 1 {
            "1 card".to_string()
        } else {
            format!("{} cards", self.card_count)
        }
    }
}

/// Most-recently-studied notebooks, newest first, deduplicated by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentNotebooks {
    entries: VecDeque<RecentNotebookEntry>,
    max_entries: usize,
}

impl Default for RecentNotebooks {
    fn default() -> Self {
        Self::new(8)
    }
}

impl RecentNotebooks {
    pub fn new(max_entries: usize) -> Self {
        Self { entries: VecDeque::new(), max_entries }
    }

    pub fn add(
        &mut self,
        notebook_id: String,
        group_id: String,
        title: String,
        card_count: usize,
    ) {
        self.entries.retain(|entry| entry.notebook_id != notebook_id);

        self.entries.push_front(RecentNotebookEntry {
            notebook_id,
            group_id,
            title,
            last_studied: chrono::Utc::now(),
            card_count,
        });

        while self.entries.len() > self.max_entries {
            self.entries.pop_back();
        }
    }

    pub fn remove(&mut self, notebook_id: &str) {
        self.entries.retain(|entry| entry.notebook_id != notebook_id);
    }

    pub fn entries(&self) -> &VecDeque<RecentNotebookEntry> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
