use crate::{api::TaskApi, error::ClientError, model::Task, schema::TaskSchema};

/// What the next `submit` will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(i64),
}

impl FormMode {
    pub fn label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add",
            FormMode::Update(_) => "Update",
        }
    }
}

/// In-memory state of the task list plus the operations a user can
/// trigger on it.
///
/// The task collection is only ever replaced wholesale by `refresh`;
/// every mutation goes through the backend first and then re-fetches.
/// Transport and decode failures are logged and otherwise ignored.
pub struct TaskListClient<A> {
    api: A,
    tasks: Vec<Task>,
    input: String,
    editing: Option<i64>,
}

impl<A: TaskApi> TaskListClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            input: String::new(),
            editing: None,
        }
    }

    /// Tasks in the order the backend listed them.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn mode(&self) -> FormMode {
        match self.editing {
            Some(id) => FormMode::Update(id),
            None => FormMode::Create,
        }
    }

    /// Re-fetches the whole collection. Anything but a JSON array of
    /// tasks leaves the current list in place.
    pub async fn refresh(&mut self) {
        let payload = match self.api.list().await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch tasks");
                return;
            }
        };

        if !payload.is_array() {
            tracing::warn!(%payload, "task list response is not an array");
            return;
        }

        match serde_json::from_value::<Vec<Task>>(payload) {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "task list refreshed");
                self.tasks = tasks;
            }
            Err(err) => tracing::warn!(error = %err, "task list contains malformed tasks"),
        }
    }

    /// Sends the current input as a new task, or as an update of the task
    /// being edited. Afterwards the form is reset and the list re-fetched,
    /// whatever the backend answered.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        if self.input.trim().is_empty() {
            return Err(ClientError::EmptyDescription);
        }

        let body = TaskSchema::from_input(self.input.clone());
        let result = match self.editing {
            Some(id) => self.api.update(id, &body).await,
            None => self.api.create(&body).await,
        };
        if let Err(err) = result {
            tracing::error!(error = %err, mode = ?self.mode(), "failed to save task");
        }

        self.input.clear();
        self.editing = None;
        self.refresh().await;
        Ok(())
    }

    /// Loads `task` into the form; the next `submit` updates it.
    pub fn begin_edit(&mut self, task: &Task) {
        self.input = task.description.clone();
        self.editing = Some(task.id);
    }

    pub async fn delete(&mut self, id: i64) {
        if let Err(err) = self.api.delete(id).await {
            tracing::error!(error = %err, id, "failed to delete task");
        }
        self.refresh().await;
    }

    pub async fn toggle_completion(&mut self, task: &Task) {
        let body = TaskSchema::toggled(task);
        if let Err(err) = self.api.update(task.id, &body).await {
            tracing::error!(error = %err, id = task.id, "failed to toggle task");
        }
        self.refresh().await;
    }
}
