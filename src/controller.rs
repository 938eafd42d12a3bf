// File: src/controller.rs
//! Session controller: the single entry point shells use to run commands.
//!
//! A `Session` owns the task list and its storage. Every command error is turned
//! into a message on the caller's `Ui`, so a bad command never ends the session.
use crate::command::Outcome;
use crate::error::Result;
use crate::model::parse_command;
use crate::storage::{LocalStorage, SkippedLine};
use crate::store::TaskList;
use crate::ui::{BufferedUi, Ui};

pub struct Session {
    tasks: TaskList,
    storage: LocalStorage,
    notices: Vec<String>,
    skipped: Vec<SkippedLine>,
}

impl Session {
    /// Loads the backing file. A missing file is created and reported as a
    /// notice; a failed load is logged and the session starts empty.
    pub fn open(storage: LocalStorage) -> Self {
        let mut notices = Vec::new();
        let mut skipped = Vec::new();

        let tasks = match storage.load() {
            Ok(report) => {
                skipped = report.skipped;
                TaskList::from_tasks(report.tasks)
            }
            Err(e) if e.is_first_run() => {
                notices.push(e.to_string());
                TaskList::new()
            }
            Err(e) => {
                log::warn!("Failed to load tasks: {}", e);
                notices.push(format!("Failed to load tasks: {}", e));
                TaskList::new()
            }
        };

        if !skipped.is_empty() {
            notices.push(format!(
                "Skipped {} unreadable line(s) in {}.",
                skipped.len(),
                storage.path().display()
            ));
        }

        Self {
            tasks,
            storage,
            notices,
            skipped,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Startup messages for the shell to show once.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn skipped_lines(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Parses and runs one line. Errors are returned untouched.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let command = parse_command(line)?;
        command.execute(&mut self.tasks, &self.storage)
    }

    /// Runs one line and renders the result (or the error) on `ui`.
    /// Returns true when the shell should stop reading.
    pub fn handle(&mut self, line: &str, ui: &mut dyn Ui) -> bool {
        match self.execute(line) {
            Ok(outcome) => {
                ui.show_outcome(&outcome);
                outcome.exit
            }
            Err(e) => {
                ui.show_error(&e.to_string());
                false
            }
        }
    }

    /// One complete reply for a shell that shows text per interaction.
    pub fn get_response(&mut self, input: &str) -> String {
        let mut ui = BufferedUi::new();
        self.handle(input, &mut ui);
        ui.consume()
    }

    /// Final write before the process ends.
    pub fn save(&self) -> Result<()> {
        self.storage.save(self.tasks.tasks())
    }

    /// Like `save`, but only logs failures.
    pub fn save_or_warn(&self) {
        if let Err(e) = self.save() {
            log::warn!("Failed to save on exit: {}", e);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("tasks", &self.tasks.len())
            .field("storage", &self.storage.path())
            .finish()
    }
}
