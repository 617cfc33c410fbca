use crate::model::Task;

// Struct representing the request body for creating or updating a Task
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TaskSchema {
    #[serde(rename = "descricao", alias = "description")]
    pub description: String,
    #[serde(rename = "concluido", alias = "completed")]
    pub completed: bool,
}

impl TaskSchema {
    /// Body sent by the form: new tasks and edits both start unchecked.
    pub fn from_input(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    /// Body that flips the completion flag and keeps the description.
    pub fn toggled(task: &Task) -> Self {
        Self {
            description: task.description.clone(),
            completed: !task.completed,
        }
    }
}
