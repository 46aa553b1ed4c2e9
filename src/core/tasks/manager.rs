use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::api::client::{
    self,
    FlashcardPayload,
    GroupPayload,
    NotebookPayload,
};

/// Bridges the async API client onto the synchronous frame loop: every
/// operation runs on its own thread against a shared tokio runtime and
/// reports back through an mpsc channel drained once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_groups(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client::list_groups(&base_url))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::GroupsLoaded(result));
        });
    }

    pub fn load_group(&self, base_url: String, group_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client::get_group(&base_url, &group_id))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::GroupLoaded { group_id, result });
        });
    }

    pub fn load_notebooks(&self, base_url: String, group_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client::list_notebooks(&base_url, &group_id))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::NotebooksLoaded { group_id, result });
        });
    }

    pub fn load_liked_notebooks(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client::list_liked_notebooks(&base_url))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::LikedNotebooksLoaded(result));
        });
    }

    /// The learn page needs both the notebook header and its cards; fetch
    /// them concurrently and report each on its own channel slot.
    pub fn load_learn_data(&self, base_url: String, notebook_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let (notebook, flashcards) = runtime.block_on(async {
                futures::join!(
                    client::get_notebook(&base_url, &notebook_id),
                    client::list_flashcards(&base_url, &notebook_id),
                )
            });

            let _ = sender.send(TaskResult::NotebookLoaded {
                notebook_id: notebook_id.clone(),
                result: notebook.map_err(|e| e.to_string()),
            });
            let _ = sender.send(TaskResult::FlashcardsLoaded {
                notebook_id,
                result: flashcards.map_err(|e| e.to_string()),
            });
        });
    }

    pub fn load_flashcards(&self, base_url: String, notebook_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client::list_flashcards(&base_url, &notebook_id))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::FlashcardsLoaded { notebook_id, result });
        });
    }

    pub fn save_group(&self, base_url: String, group_id: Option<String>, payload: GroupPayload) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async {
                    match &group_id {
                        Some(id) => client::update_group(&base_url, id, &payload).await,
                        None => client::create_group(&base_url, &payload).await,
                    }
                })
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::GroupSaved(result));
        });
    }

    pub fn delete_group(&self, base_url: String, group_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client::delete_group(&base_url, &group_id))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::GroupDeleted { group_id, result });
        });
    }

    pub fn save_notebook(
        &self,
        base_url: String,
        group_id: String,
        notebook_id: Option<String>,
        payload: NotebookPayload,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async {
                    match &notebook_id {
                        Some(id) => client::update_notebook(&base_url, id, &payload).await,
                        None => client::create_notebook(&base_url, &group_id, &payload).await,
                    }
                })
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::NotebookSaved(result));
        });
    }

    pub fn delete_notebook(&self, base_url: String, notebook_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client::delete_notebook(&base_url, &notebook_id))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::NotebookDeleted { notebook_id, result });
        });
    }

    pub fn save_flashcard(
        &self,
        base_url: String,
        notebook_id: String,
        flashcard_id: Option<String>,
        payload: FlashcardPayload,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async {
                    match &flashcard_id {
                        Some(id) => client::update_flashcard(&base_url, id, &payload).await,
                        None => {
                            client::create_flashcard(&base_url, &notebook_id, &payload).await
                        }
                    }
                })
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::FlashcardSaved(result));
        });
    }

    pub fn delete_flashcard(&self, base_url: String, flashcard_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client::delete_flashcard(&base_url, &flashcard_id))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::FlashcardDeleted { flashcard_id, result });
        });
    }

    /// Fire-and-forget PATCH of the bookmarked flag. The caller has already
    /// applied the optimistic local update; what happens on failure is the
    /// sync policy's business, not ours.
    pub fn sync_bookmark(
        &self,
        base_url: String,
        flashcard_id: String,
        bookmarked: bool,
        attempt: u32,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client::set_flashcard_bookmarked(&base_url, &flashcard_id, bookmarked))
                .map_err(|e| e.to_string());

            let _ =
                sender.send(TaskResult::BookmarkSynced { flashcard_id, bookmarked, attempt, result });
        });
    }

    pub fn sync_like(&self, base_url: String, notebook_id: String, liked: bool, attempt: u32) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client::set_notebook_liked(&base_url, &notebook_id, liked))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::LikeSynced { notebook_id, liked, attempt, result });
        });
    }
}
