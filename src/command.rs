use thiserror::Error;

use crate::{api::TaskApi, client::TaskListClient, view};

pub const USAGE: &str = "\
commands:
  ls | refresh      re-fetch the task list
  save [text]       add a task, or update the one being edited
  edit <id>         load a task into the form
  toggle <id>       check or uncheck a task
  rm <id>           delete a task
  help              show this message
  quit              leave";

/// One line of terminal input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Save(Option<String>),
    Edit(i64),
    Toggle(i64),
    Delete(i64),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs a task id")]
    MissingId(String),
    #[error("`{0}` is not a task id")]
    BadId(String),
}

impl Command {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "ls" | "refresh" => Command::Refresh,
            "save" => Command::Save((!rest.is_empty()).then(|| rest.to_string())),
            "edit" => Command::Edit(parse_id(word, rest)?),
            "toggle" => Command::Toggle(parse_id(word, rest)?),
            "rm" | "delete" => Command::Delete(parse_id(word, rest)?),
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }

    /// Runs the command against `client`. The returned text is what the
    /// terminal should print; ids missing from the current list change
    /// nothing.
    pub async fn apply<A: TaskApi>(self, client: &mut TaskListClient<A>) -> Flow {
        match self {
            Command::Quit => return Flow::Stop,
            Command::Help => return Flow::Continue(USAGE.to_string()),
            Command::Refresh => client.refresh().await,
            Command::Save(text) => {
                if let Some(text) = text {
                    client.set_input(text);
                }
                if let Err(err) = client.submit().await {
                    return Flow::Continue(err.to_string());
                }
            }
            Command::Edit(id) => match client.find(id).cloned() {
                Some(task) => client.begin_edit(&task),
                None => return unknown_task(id),
            },
            Command::Toggle(id) => match client.find(id).cloned() {
                Some(task) => client.toggle_completion(&task).await,
                None => return unknown_task(id),
            },
            Command::Delete(id) => {
                if client.find(id).is_none() {
                    return unknown_task(id);
                }
                client.delete(id).await
            }
        }
        Flow::Continue(view::render(client))
    }
}

/// Whether the terminal loop goes on, and what it prints if so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Stop,
}

fn unknown_task(id: i64) -> Flow {
    Flow::Continue(format!("no task #{id} in the list"))
}

fn parse_id(command: &str, arg: &str) -> Result<i64, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingId(command.to_string()));
    }
    arg.parse()
        .map_err(|_| ParseError::BadId(arg.to_string()))
}
