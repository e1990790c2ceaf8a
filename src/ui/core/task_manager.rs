use super::actions::Action;
use crate::api::PortalError;
use crate::constants::SUCCESS_IMAGE_UPLOADED;
use crate::service::{PortalService, UploadEvent};
use crate::ui::components::toast_stack::ToastKind;
use crate::upload::UploadCandidate;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Owns every background operation: page loads, upload batches and one-shot
/// mutations. Results travel back to the UI loop as [`Action`]s over an
/// unbounded channel; dropping the manager aborts whatever is in flight.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn register(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Load the property page bootstrap in the background.
    pub fn spawn_page_load(&mut self, service: PortalService) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            match service.load_page().await {
                Ok(page) => {
                    let _ = action_sender.send(Action::PageLoaded(page));
                }
                Err(e) => {
                    let _ = action_sender.send(Action::LoadFailed(format!("Failed to load page: {}", e)));
                }
            }
        });

        self.register(handle, "Loading property page".to_string())
    }

    /// Load the company user list in the background.
    pub fn spawn_users_load(&mut self, service: PortalService) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            match service.load_users().await {
                Ok(users) => {
                    let _ = action_sender.send(Action::UsersLoaded(users));
                }
                Err(e) => {
                    let _ = action_sender.send(Action::ShowToast {
                        message: format!("Failed to load users: {}", e),
                        kind: ToastKind::Error,
                    });
                }
            }
        });

        self.register(handle, "Loading user list".to_string())
    }

    /// Run an upload batch in one background task. Files go up strictly one
    /// after another inside the task; every per-file result is surfaced as
    /// its own action as soon as it happens.
    pub fn spawn_upload_batch(&mut self, service: PortalService, candidates: Vec<UploadCandidate>) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Uploading {} images", candidates.len());

        let handle = tokio::spawn(async move {
            let events = action_sender.clone();
            let report = service
                .upload_batch(candidates, move |event| match event {
                    UploadEvent::Uploaded(image) => {
                        let _ = events.send(Action::ImageUploaded(image));
                        let _ = events.send(Action::ShowToast {
                            message: SUCCESS_IMAGE_UPLOADED.to_string(),
                            kind: ToastKind::Success,
                        });
                    }
                    UploadEvent::Failed { file, message } => {
                        let _ = events.send(Action::ShowToast {
                            message: format!("Failed to upload {}: {}", file, message),
                            kind: ToastKind::Error,
                        });
                    }
                })
                .await;

            let _ = action_sender.send(Action::UploadBatchFinished {
                uploaded: report.uploaded,
                failed: report.failed,
            });
        });

        self.register(handle, description)
    }

    /// Spawn a one-shot operation. On success every returned action is
    /// dispatched in order; an error surfaces as an error toast.
    pub fn spawn_operation<F, Fut>(&mut self, description: String, operation: F) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<Vec<Action>, PortalError>> + Send + 'static,
    {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            match operation().await {
                Ok(actions) => {
                    for action in actions {
                        let _ = action_sender.send(action);
                    }
                }
                Err(e) => {
                    let _ = action_sender.send(Action::ShowToast {
                        message: e.to_string(),
                        kind: ToastKind::Error,
                    });
                }
            }
        });

        self.register(handle, description)
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Whether an upload batch is currently running
    pub fn is_uploading(&self) -> bool {
        self.tasks.values().any(|task| task.description.starts_with("Uploading"))
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
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
