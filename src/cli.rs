// File: ./src/cli.rs
//! Shared command-line logic: argument handling, help text and the read loop.
use crate::controller::Session;
use crate::ui::Ui;
use anyhow::Result;
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments without the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" | "help" => parsed.help = true,
                "-r" | "--root" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("{} requires a directory", arg))?;
                    parsed.root = Some(PathBuf::from(value));
                }
                "-f" | "--file" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("{} requires a file path", arg))?;
                    parsed.file = Some(PathBuf::from(value));
                }
                other => anyhow::bail!("Unknown argument '{}'. Try --help.", other),
            }
        }
        Ok(parsed)
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "OKuke v{} - a small command-driven task tracker",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <dir>] [--file <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <dir>      Use a different directory for config and data.");
    println!("    -f, --file <path>     Read and write tasks in this file.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS (typed at the prompt):");
    println!("    todo <desc>                               Add a todo");
    println!("    deadline <desc> /by <when>                Add a deadline");
    println!("    event <desc> /from <start> /to <end>      Add an event");
    println!("    list                                      Show all tasks");
    println!("    mark <n> | unmark <n> | delete <n>        Change task n (1-based)");
    println!("    find <keyword>                            Search descriptions");
    println!("    on <date>                                 Deadlines and events on a date");
    println!("    help                                      Show command help");
    println!("    bye                                       Save and quit");
    println!();
    println!("DATE FORMATS:");
    println!("    2025-09-10, 10/9/2025, 10-9-2025, 10.9.2025");
    println!("    add a time as HHMM (2025-09-10 1400) or use ISO (2025-09-10T14:00)");
}

/// Reads commands until `bye` or end of input, then saves once more.
///
/// Lines are decoded lossily, so stray bytes reach the parser as an invalid
/// command instead of ending the session. A failing reader stops the loop.
pub fn run_loop<R: BufRead>(
    session: &mut Session,
    mut input: R,
    ui: &mut dyn Ui,
    show_banner: bool,
) {
    if show_banner {
        ui.show_welcome();
    }
    for notice in session.notices().to_vec() {
        ui.show_notice(&notice);
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::warn!("Failed to read input: {}", e);
                ui.show_error(&format!("Failed to read input: {}", e));
                break;
            }
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }
        if session.handle(&line, ui) {
            break;
        }
    }

    session.save_or_warn();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = CliArgs::parse(["--root", "/tmp/x", "-f", "tasks.txt"]).unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/tmp/x")));
        assert_eq!(args.file, Some(PathBuf::from("tasks.txt")));
        assert!(!args.help);

        assert!(CliArgs::parse(["-h"]).unwrap().help);
        assert_eq!(
            CliArgs::parse(Vec::<String>::new()).unwrap(),
            CliArgs::default()
        );
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(CliArgs::parse(["--root"]).is_err());
        assert!(CliArgs::parse(["--verbose"]).is_err());
    }
}
