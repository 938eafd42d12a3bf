// Manages the plain-text backing file for tasks.
//
// Format: one task per line, fields joined by " | ".
//   T | <0|1> | <description>
//   D | <0|1> | <description> | <ISO due>
//   E | <0|1> | <description> | <ISO start> | <ISO end>
// There is no version header; the format is fixed.
use crate::context::AppContext;
use crate::error::{OkukeError, Result};
use crate::model::datetime::{parse_iso, to_iso};
use crate::model::{Task, TaskKind, TaskType};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const FIELD_SEPARATOR: &str = " | ";

const DONE_FLAG: &str = "1";
const NOT_DONE_FLAG: &str = "0";

/// A line that could not be decoded and was left out of the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_no: usize,
    pub content: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub tasks: Vec<Task>,
    pub skipped: Vec<SkippedLine>,
}

pub fn encode_line(task: &Task) -> String {
    let done = if task.done { DONE_FLAG } else { NOT_DONE_FLAG };
    let mut fields = vec![
        task.task_type().to_string(),
        done.to_string(),
        task.description().to_string(),
    ];
    match &task.kind {
        TaskKind::Todo => {}
        TaskKind::Deadline { due } => fields.push(to_iso(due)),
        TaskKind::Event { start, end } => {
            fields.push(to_iso(start));
            fields.push(to_iso(end));
        }
    }
    fields.join(FIELD_SEPARATOR)
}

pub fn decode_line(line: &str) -> std::result::Result<Task, String> {
    let parts: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    if parts.len() < 3 {
        return Err(format!("expected at least 3 fields, found {}", parts.len()));
    }

    let task_type =
        TaskType::from_str(parts[0]).map_err(|_| format!("unknown task tag '{}'", parts[0]))?;
    let expected = match task_type {
        TaskType::Todo => 3,
        TaskType::Deadline => 4,
        TaskType::Event => 5,
    };
    if parts.len() != expected {
        return Err(format!(
            "tag '{}' needs {} fields, found {}",
            parts[0],
            expected,
            parts.len()
        ));
    }

    let description = parts[2].trim();
    if description.is_empty() {
        return Err("empty description".to_string());
    }

    let date = |raw: &str| parse_iso(raw).map_err(|e| e.to_string());
    let mut task = match task_type {
        TaskType::Todo => Task::todo(description),
        TaskType::Deadline => Task::deadline(description, date(parts[3])?),
        TaskType::Event => Task::event(description, date(parts[3])?, date(parts[4])?),
    };
    // Anything other than "1" reads as not done.
    task.done = parts[1] == DONE_FLAG;
    Ok(task)
}

pub fn encode_all(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&encode_line(task));
        out.push('\n');
    }
    out
}

/// Decodes every non-blank line, collecting the ones that fail instead of aborting.
pub fn decode_all(content: &str) -> LoadReport {
    let mut report = LoadReport::default();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match decode_line(line) {
            Ok(task) => report.tasks.push(task),
            Err(reason) => {
                log::warn!("Skipped corrupted line {}: {} ({})", idx + 1, line, reason);
                report.skipped.push(SkippedLine {
                    line_no: idx + 1,
                    content: line.to_string(),
                    reason,
                });
            }
        }
    }
    report
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage bound to the default task file of the given context.
    pub fn from_context(ctx: &dyn AppContext) -> anyhow::Result<Self> {
        Ok(Self::new(ctx.get_task_file_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_exists(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        if !self.path.exists() {
            fs::File::create(&self.path)
                .with_context(|| format!("Failed to create data file: {:?}", self.path))?;
        }
        Ok(())
    }

    /// Loads every readable task.
    ///
    /// When the file does not exist yet it is created (with its parent
    /// directories) and `OkukeError::DataFileMissing` is returned so the caller
    /// can greet a first run and continue with an empty list.
    pub fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            self.ensure_exists()?;
            log::info!("Created new data file at {}", self.path.display());
            return Err(OkukeError::DataFileMissing {
                path: self.path.clone(),
            });
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read tasks from {:?}", self.path))?;
        let report = decode_all(&content);
        log::info!(
            "Loaded {} task(s) from {} ({} skipped)",
            report.tasks.len(),
            self.path.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Rewrites the whole file with the given tasks.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        self.ensure_exists()?;
        fs::write(&self.path, encode_all(tasks))
            .with_context(|| format!("Failed to write tasks to {:?}", self.path))?;
        log::debug!("Saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
