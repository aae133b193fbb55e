use super::actions::Action;
use crate::api::{StudyApi, UploadFile};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// What a background task is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Upload,
    Chat,
    StatusFetch,
    Clear,
    HealthCheck,
}

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub kind: TaskKind,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs backend calls off the UI loop and reports results as actions.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
    api: Arc<dyn StudyApi>,
    active_status_fetch: Option<TaskId>,
}

impl TaskManager {
    pub fn new(api: Arc<dyn StudyApi>) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
                api,
                active_status_fetch: None,
            },
            rx,
        )
    }

    fn register(&mut self, kind: TaskKind, description: String, handle: JoinHandle<()>) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                kind,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Spawn a file upload
    pub fn spawn_upload(&mut self, path: PathBuf) -> TaskId {
        let api = Arc::clone(&self.api);
        let action_sender = self.action_sender.clone();
        let description = format!("Uploading {}", path.display());

        let handle = tokio::spawn(async move {
            let result = match UploadFile::from_path(&path).await {
                Ok(file) => api.upload_file(file).await,
                Err(e) => Err(e),
            };

            let action = match result {
                Ok(response) => Action::UploadCompleted(response),
                Err(e) => Action::UploadFailed(e.to_string()),
            };
            let _ = action_sender.send(action);
        });

        self.register(TaskKind::Upload, description, handle)
    }

    /// Spawn a chat request
    pub fn spawn_chat(&mut self, query: String, history: Option<Vec<crate::api::ChatMessage>>) -> TaskId {
        let api = Arc::clone(&self.api);
        let action_sender = self.action_sender.clone();
        let description = format!("Asking '{}'", query);

        let handle = tokio::spawn(async move {
            let action = match api.chat(&query, history).await {
                Ok(response) => Action::ChatAnswered(response),
                Err(e) => Action::ChatFailed(e.to_string()),
            };
            let _ = action_sender.send(action);
        });

        self.register(TaskKind::Chat, description, handle)
    }

    /// Spawn a status fetch tagged with `token`.
    ///
    /// A fetch still running for an older token is aborted first; should its
    /// response arrive anyway, the status bar discards it by token.
    pub fn spawn_status_fetch(&mut self, token: u64) -> TaskId {
        if let Some(previous) = self.active_status_fetch.take() {
            if let Some(task) = self.tasks.remove(&previous) {
                task.handle.abort();
            }
        }

        let api = Arc::clone(&self.api);
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let result = api.get_status().await;
            let _ = action_sender.send(Action::StatusLoaded { token, result });
        });

        let task_id = self.register(TaskKind::StatusFetch, format!("Fetching status (#{})", token), handle);
        self.active_status_fetch = Some(task_id);
        task_id
    }

    /// Spawn `DELETE /clear`
    pub fn spawn_clear(&mut self) -> TaskId {
        let api = Arc::clone(&self.api);
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match api.clear_documents().await {
                Ok(response) => Action::DocumentsCleared(response),
                Err(e) => Action::ClearFailed(e.to_string()),
            };
            let _ = action_sender.send(action);
        });

        self.register(TaskKind::Clear, "Clearing documents".to_string(), handle)
    }

    /// Spawn the startup health check and version lookup
    pub fn spawn_health_check(&mut self) -> TaskId {
        let api = Arc::clone(&self.api);
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            match api.health_check().await {
                Ok(health) => {
                    let _ = action_sender.send(Action::HealthChecked(health));
                    // Version info is optional; older backends may not expose it
                    if let Ok(info) = api.service_info().await {
                        let _ = action_sender.send(Action::ServiceInfoLoaded(info));
                    }
                }
                Err(e) => {
                    let _ = action_sender.send(Action::HealthFailed(e.to_string()));
                }
            }
        });

        self.register(TaskKind::HealthCheck, "Checking backend health".to_string(), handle)
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<BackgroundTask> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        if let Some(active) = self.active_status_fetch {
            if finished.contains(&active) {
                self.active_status_fetch = None;
            }
        }

        finished.into_iter().filter_map(|task_id| self.tasks.remove(&task_id)).collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
        self.active_status_fetch = None;
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
