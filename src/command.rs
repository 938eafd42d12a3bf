// File: src/command.rs
//! Typed commands and their execution against a [`TaskList`].
//!
//! Execution returns an [`Outcome`] (plain lines of text). Nothing here writes to
//! a console; shells decide how to present the result.
use crate::error::{OkukeError, Result};
use crate::model::parser::Verb;
use crate::model::{Task, parse_flexible};
use crate::storage::LocalStorage;
use crate::store::TaskList;
use strum::IntoEnumIterator;

pub const FAREWELL: &str = "Bye. Hope to see you again soon!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    Help,
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    AddTodo {
        description: String,
    },
    AddDeadline {
        description: String,
        by: String,
    },
    AddEvent {
        description: String,
        from: String,
        to: String,
    },
    Find {
        keyword: String,
    },
    OnDate {
        date: String,
    },
}

/// Result of one command, ready for any output sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    /// Non-fatal problems, e.g. a save that did not reach the disk.
    pub warnings: Vec<String>,
    pub exit: bool,
}

impl Outcome {
    fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Default::default()
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Command {
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Mark(_)
                | Command::Unmark(_)
                | Command::Delete(_)
                | Command::AddTodo { .. }
                | Command::AddDeadline { .. }
                | Command::AddEvent { .. }
        )
    }

    /// Runs the command. Mutating commands save afterwards; a failed save is
    /// reported in `Outcome::warnings` and the in-memory change is kept.
    pub fn execute(&self, tasks: &mut TaskList, storage: &LocalStorage) -> Result<Outcome> {
        let mut outcome = match self {
            Command::Exit => Outcome {
                lines: vec![FAREWELL.to_string()],
                exit: true,
                ..Default::default()
            },
            Command::List => Outcome::new(list_lines(tasks)),
            Command::Help => Outcome::new(help_lines()),
            Command::Mark(index) => {
                let task = tasks.mark(*index)?;
                Outcome::new(vec![
                    "Nice! I've marked this task as done:".to_string(),
                    format!("  {}", task),
                ])
            }
            Command::Unmark(index) => {
                let task = tasks.unmark(*index)?;
                Outcome::new(vec![
                    "OK, I've marked this task as not done yet:".to_string(),
                    format!("  {}", task),
                ])
            }
            Command::Delete(index) => {
                let removed = tasks.remove(*index)?;
                Outcome::new(vec![
                    "Noted. I've removed this task:".to_string(),
                    format!("  {}", removed),
                    count_line(tasks),
                ])
            }
            Command::AddTodo { description } => add(tasks, Task::todo(description)),
            Command::AddDeadline { description, by } => {
                let due = parse_flexible(by).map_err(|_| OkukeError::InvalidCommand)?;
                add(tasks, Task::deadline(description, due))
            }
            Command::AddEvent {
                description,
                from,
                to,
            } => {
                let start = parse_flexible(from).map_err(|_| OkukeError::InvalidCommand)?;
                let end = parse_flexible(to).map_err(|_| OkukeError::InvalidCommand)?;
                add(tasks, Task::event(description, start, end))
            }
            Command::Find { keyword } => Outcome::new(find_lines(tasks, keyword)),
            Command::OnDate { date } => {
                let day = parse_flexible(date)
                    .map_err(|_| OkukeError::InvalidCommand)?
                    .date();
                let mut lines = vec![format!("Items on {}:", day.format("%Y-%m-%d"))];
                let items = tasks.occurring_on(day);
                if items.is_empty() {
                    lines.push("  (none)".to_string());
                } else {
                    lines.extend(items.iter().map(|t| format!(" - {}", t)));
                }
                Outcome::new(lines)
            }
        };

        if self.is_mutating()
            && let Err(e) = storage.save(tasks.tasks())
        {
            log::warn!("Failed to save: {}", e);
            outcome.warnings.push(format!("Warning: changes not saved. {}", e));
        }

        Ok(outcome)
    }
}

fn add(tasks: &mut TaskList, task: Task) -> Outcome {
    let added = tasks.add(task);
    let first = format!("added: {}", added);
    Outcome::new(vec![first, count_line(tasks)])
}

fn count_line(tasks: &TaskList) -> String {
    format!("Now you have {} tasks in the list.", tasks.len())
}

fn list_lines(tasks: &TaskList) -> Vec<String> {
    if tasks.is_empty() {
        return vec!["Your list is empty.".to_string()];
    }
    let mut lines = vec!["Here are the tasks in your list:".to_string()];
    lines.extend(
        tasks
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}.{}", i + 1, t)),
    );
    lines
}

fn find_lines(tasks: &TaskList, keyword: &str) -> Vec<String> {
    let matches = tasks.find(keyword);
    if matches.is_empty() {
        return vec!["  (no matching tasks)".to_string()];
    }
    let mut lines = vec!["Here are the matching tasks in your list:".to_string()];
    lines.extend(
        matches
            .iter()
            .enumerate()
            .map(|(i, t)| format!(" {}.{}", i + 1, t)),
    );
    lines
}

fn help_lines() -> Vec<String> {
    let mut lines = vec!["Here are the available commands:".to_string()];
    for verb in Verb::iter() {
        let (syntax, summary) = verb.usage();
        if syntax.len() > 20 {
            lines.push(format!("  {}", syntax));
            lines.push(format!("  {:<20} : {}", "", summary));
        } else {
            lines.push(format!("  {:<20} : {}", syntax, summary));
        }
    }
    lines
}
