use crate::{
    api::TaskApi,
    client::{FormMode, TaskListClient},
    model::Task,
};

pub const TITLE: &str = "Task List";

/// Text rendition of the list and the form line below it.
pub fn render<A: TaskApi>(client: &TaskListClient<A>) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    if client.tasks().is_empty() {
        out.push_str("(no tasks)\n");
    }
    for task in client.tasks() {
        out.push_str(&render_task(task));
        out.push('\n');
    }
    out.push_str(&format!("{}: {}\n", form_label(client.mode()), client.input()));
    out
}

pub fn render_task(task: &Task) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    format!("[{mark}] #{} {}", task.id, task.description)
}

fn form_label(mode: FormMode) -> String {
    match mode {
        FormMode::Create => mode.label().to_string(),
        FormMode::Update(id) => format!("{} #{id}", mode.label()),
    }
}
