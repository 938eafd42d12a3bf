// File: ./src/model/item.rs
use chrono::{NaiveDate, NaiveDateTime};
use strum::{Display, EnumString};

/// One-letter tag used both in list rendering (`[T]`) and in the backing file (`T | ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum TaskType {
    #[strum(serialize = "T")]
    Todo,
    #[strum(serialize = "D")]
    Deadline,
    #[strum(serialize = "E")]
    Event,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline {
        due: NaiveDateTime,
    },
    /// Start and end are stored as entered; an end before the start is accepted.
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    fn with_kind(description: &str, kind: TaskKind) -> Self {
        Self {
            description: description.to_string(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: &str) -> Self {
        Self::with_kind(description, TaskKind::Todo)
    }

    pub fn deadline(description: &str, due: NaiveDateTime) -> Self {
        Self::with_kind(description, TaskKind::Deadline { due })
    }

    pub fn event(description: &str, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::with_kind(description, TaskKind::Event { start, end })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn task_type(&self) -> TaskType {
        match self.kind {
            TaskKind::Todo => TaskType::Todo,
            TaskKind::Deadline { .. } => TaskType::Deadline,
            TaskKind::Event { .. } => TaskType::Event,
        }
    }

    pub fn mark(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }

    pub fn matches_keyword(&self, needle_lower: &str) -> bool {
        self.description.to_lowercase().contains(needle_lower)
    }

    /// Deadlines occur on their due date; events on every date of
    /// `[start, end]`, compared by calendar date only. Todos never occur.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match &self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { due } => due.date() == date,
            TaskKind::Event { start, end } => start.date() <= date && date <= end.date(),
        }
    }
}
