// File: ./src/ui.rs
//! Output sinks for command results.
//!
//! `Ui` renders everything on top of a single `write_line`. `ConsoleUi` prints
//! immediately; `BufferedUi` collects a reply for shells that show one message
//! per interaction (a dialog, a chat bubble).
use crate::command::Outcome;
use std::io::Write;

pub const DIVIDER: &str = "____________________________________________________________";

pub trait Ui {
    fn write_line(&mut self, line: &str);

    fn show_divider(&mut self) {
        self.write_line(DIVIDER);
    }

    fn show_welcome(&mut self) {
        self.write_line("Hello! I'm OKuke.");
        self.write_line("What can I do for you?");
        self.show_divider();
    }

    fn show_outcome(&mut self, outcome: &Outcome) {
        if outcome.exit {
            for line in &outcome.lines {
                self.write_line(line);
            }
            return;
        }
        self.show_divider();
        for line in outcome.lines.iter().chain(&outcome.warnings) {
            self.write_line(line);
        }
        self.show_divider();
    }

    fn show_error(&mut self, message: &str) {
        self.show_divider();
        for line in message.lines() {
            self.write_line(line);
        }
        self.show_divider();
    }

    /// Startup notices (first run, load problems) share the error framing.
    fn show_notice(&mut self, message: &str) {
        self.show_error(message);
    }
}

pub struct ConsoleUi<W: Write> {
    out: W,
}

impl<W: Write> ConsoleUi<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleUi<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Ui for ConsoleUi<W> {
    fn write_line(&mut self, line: &str) {
        // A closed stdout is not worth aborting the session for.
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            log::debug!("Console write failed: {}", e);
        }
    }
}

#[derive(Debug, Default)]
pub struct BufferedUi {
    buffer: String,
}

impl BufferedUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns and clears what has been written so far.
    pub fn consume(&mut self) -> String {
        let text = self.buffer.trim().to_string();
        self.buffer.clear();
        if text.is_empty() {
            "(no output)".to_string()
        } else {
            text
        }
    }
}

impl Ui for BufferedUi {
    fn write_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    // Graphical shells show their own greeting.
    fn show_welcome(&mut self) {}
}
