// File: ./src/model/display.rs
use crate::model::datetime::format_nice;
use crate::model::item::{Task, TaskKind};
use std::fmt;

pub trait TaskDisplay {
    fn checkbox_symbol(&self) -> &'static str;
    fn schedule_suffix(&self) -> String;
}

impl TaskDisplay for Task {
    fn checkbox_symbol(&self) -> &'static str {
        if self.done { "[X]" } else { "[ ]" }
    }

    fn schedule_suffix(&self) -> String {
        match &self.kind {
            TaskKind::Todo => String::new(),
            TaskKind::Deadline { due } => format!(" (by: {})", format_nice(due)),
            TaskKind::Event { start, end } => format!(
                " (from: {} to: {})",
                format_nice(start),
                format_nice(end)
            ),
        }
    }
}

/// `[T][X] read book`, `[D][ ] return book (by: Aug 06 2025 14:00)`.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]{} {}{}",
            self.task_type(),
            self.checkbox_symbol(),
            self.description(),
            self.schedule_suffix()
        )
    }
}
