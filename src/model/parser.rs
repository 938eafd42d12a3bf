// File: src/model/parser.rs
//! Turns one raw input line into a typed [`Command`].
//!
//! Only syntax is checked here. Date text inside `deadline`/`event`/`on` is kept
//! verbatim and parsed when the command runs.
use crate::command::Command;
use crate::error::{OkukeError, Result};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

const BY_MARKER: &str = "/by";
const FROM_MARKER: &str = "/from";
const TO_MARKER: &str = "/to";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    Bye,
    List,
    Mark,
    Unmark,
    Delete,
    Todo,
    Deadline,
    Event,
    On,
    Find,
    Help,
}

impl Verb {
    pub fn usage(&self) -> (&'static str, &'static str) {
        match self {
            Verb::Bye => ("bye", "Exit the program"),
            Verb::List => ("list", "Show all tasks"),
            Verb::Mark => ("mark <index>", "Mark a task as done (1-based index)"),
            Verb::Unmark => ("unmark <index>", "Unmark a task (1-based index)"),
            Verb::Delete => ("delete <index>", "Delete a task (1-based index)"),
            Verb::Todo => ("todo <desc>", "Add a todo task"),
            Verb::Deadline => ("deadline <desc> /by <date-time>", "Add a deadline task"),
            Verb::Event => (
                "event <desc> /from <date-time> /to <date-time>",
                "Add an event task",
            ),
            Verb::On => ("on <date>", "Show tasks occurring on a specific date"),
            Verb::Find => ("find <keyword>", "Find tasks containing the keyword"),
            Verb::Help => ("help", "Show this help message"),
        }
    }
}

pub fn parse_command(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(OkukeError::InvalidCommand);
    }

    let (head, tail) = match trimmed.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (trimmed, ""),
    };

    let verb = Verb::from_str(&head.to_lowercase()).map_err(|_| OkukeError::InvalidCommand)?;

    let command = match verb {
        Verb::Bye => Command::Exit,
        Verb::List => Command::List,
        Verb::Help => Command::Help,
        Verb::Mark => Command::Mark(parse_index(tail)?),
        Verb::Unmark => Command::Unmark(parse_index(tail)?),
        Verb::Delete => Command::Delete(parse_index(tail)?),
        Verb::Todo => Command::AddTodo {
            description: non_blank(tail)?.to_string(),
        },
        Verb::Deadline => parse_deadline(tail)?,
        Verb::Event => parse_event(tail)?,
        Verb::Find => Command::Find {
            keyword: non_blank(tail)?.to_string(),
        },
        Verb::On => Command::OnDate {
            date: non_blank(tail)?.to_string(),
        },
    };

    log::debug!("Parsed '{}' as {:?}", trimmed, command);
    Ok(command)
}

fn non_blank(tail: &str) -> Result<&str> {
    let value = tail.trim();
    if value.is_empty() {
        Err(OkukeError::InvalidCommand)
    } else {
        Ok(value)
    }
}

/// User-facing indices are 1-based; zero, negatives and non-numbers are rejected.
fn parse_index(tail: &str) -> Result<usize> {
    match tail.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).map_err(|_| OkukeError::InvalidCommand),
        _ => Err(OkukeError::InvalidCommand),
    }
}

fn parse_deadline(tail: &str) -> Result<Command> {
    let (description, by) = split_at_marker(tail, BY_MARKER).ok_or(OkukeError::InvalidCommand)?;
    if description.is_empty() || by.is_empty() {
        return Err(OkukeError::InvalidCommand);
    }
    Ok(Command::AddDeadline {
        description: description.to_string(),
        by: by.to_string(),
    })
}

/// `<desc> /from <start> /to <end>`: the first `/from` ends the description and
/// the first `/to` after it separates start from end.
fn parse_event(tail: &str) -> Result<Command> {
    let (description, rest) =
        split_at_marker(tail, FROM_MARKER).ok_or(OkukeError::MissingEventArguments)?;
    let (from, to) = split_at_marker(rest, TO_MARKER).ok_or(OkukeError::MissingEventArguments)?;

    if description.is_empty() || from.is_empty() || to.is_empty() {
        return Err(OkukeError::MissingEventArguments);
    }
    Ok(Command::AddEvent {
        description: description.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Splits around the first whitespace-delimited occurrence of `marker`,
/// trimming both sides. `/today` does not count as `/to`.
fn split_at_marker<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find(marker) {
        let start = search_from + offset;
        let end = start + marker.len();
        let clear_before = text[..start]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        let clear_after = text[end..].chars().next().is_none_or(char::is_whitespace);
        if clear_before && clear_after {
            return Some((text[..start].trim(), text[end..].trim()));
        }
        search_from = end;
    }
    None
}
