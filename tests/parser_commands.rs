// File: tests/parser_commands.rs
use okuke::command::Command;
use okuke::error::OkukeError;
use okuke::model::parse_command;

fn invalid(line: &str) -> bool {
    matches!(parse_command(line), Err(OkukeError::InvalidCommand))
}

fn missing_event_args(line: &str) -> bool {
    matches!(parse_command(line), Err(OkukeError::MissingEventArguments))
}

#[test]
fn test_simple_verbs() {
    assert_eq!(parse_command("bye").unwrap(), Command::Exit);
    assert_eq!(parse_command("list").unwrap(), Command::List);
    assert_eq!(parse_command("help").unwrap(), Command::Help);
    // Trailing words after argument-less verbs are ignored.
    assert_eq!(parse_command("list everything").unwrap(), Command::List);
}

#[test]
fn test_blank_and_unknown_input() {
    assert!(invalid(""));
    assert!(invalid("    "));
    assert!(invalid("blah"));
    assert!(invalid("todos read"));
}

#[test]
fn test_index_commands() {
    assert_eq!(parse_command("mark 1").unwrap(), Command::Mark(1));
    assert_eq!(parse_command("unmark   3").unwrap(), Command::Unmark(3));
    assert_eq!(parse_command("delete 10").unwrap(), Command::Delete(10));

    assert!(invalid("mark"));
    assert!(invalid("mark 0"));
    assert!(invalid("unmark -1"));
    assert!(invalid("delete first"));
}

#[test]
fn test_todo() {
    assert_eq!(
        parse_command("todo   read   book ").unwrap(),
        Command::AddTodo {
            description: "read   book".to_string()
        }
    );
    assert!(invalid("todo"));
    assert!(invalid("todo    "));
}

#[test]
fn test_deadline() {
    assert_eq!(
        parse_command("deadline Submit report /by 2025-09-10").unwrap(),
        Command::AddDeadline {
            description: "Submit report".to_string(),
            by: "2025-09-10".to_string()
        }
    );
    assert!(invalid("deadline Submit report"));
    assert!(invalid("deadline /by 2025-09-10"));
    assert!(invalid("deadline Submit report /by"));
    assert!(invalid("deadline Submit report /by   "));
}

#[test]
fn test_deadline_date_text_is_not_validated_by_parser() {
    assert_eq!(
        parse_command("deadline pay /by whenever").unwrap(),
        Command::AddDeadline {
            description: "pay".to_string(),
            by: "whenever".to_string()
        }
    );
}

#[test]
fn test_event() {
    assert_eq!(
        parse_command("event Meeting /from 2025-09-10 1400 /to 2025-09-10 1600").unwrap(),
        Command::AddEvent {
            description: "Meeting".to_string(),
            from: "2025-09-10 1400".to_string(),
            to: "2025-09-10 1600".to_string()
        }
    );
}

#[test]
fn test_event_marker_errors() {
    assert!(missing_event_args("event Meeting"));
    assert!(missing_event_args("event Meeting /from 2025-09-10"));
    assert!(missing_event_args("event Meeting /to 2025-09-10"));
    assert!(missing_event_args("event Meeting /to 2025-09-12 /from 2025-09-10"));
    assert!(missing_event_args("event /from 2025-09-10 /to 2025-09-12"));
    assert!(missing_event_args("event Meeting /from /to 2025-09-12"));
    assert!(missing_event_args("event Meeting /from 2025-09-10 /to"));
    assert!(missing_event_args("event"));
}

#[test]
fn test_event_first_occurrence_wins() {
    // The second "/to" stays inside the end segment.
    assert_eq!(
        parse_command("event Trip /from Mon /to Tue /to Wed").unwrap(),
        Command::AddEvent {
            description: "Trip".to_string(),
            from: "Mon".to_string(),
            to: "Tue /to Wed".to_string()
        }
    );
    // A "/to" before "/from" belongs to the description.
    assert_eq!(
        parse_command("event go /to a /from x /to y").unwrap(),
        Command::AddEvent {
            description: "go /to a".to_string(),
            from: "x".to_string(),
            to: "y".to_string()
        }
    );
}

#[test]
fn test_find_and_on() {
    assert_eq!(
        parse_command("find Book").unwrap(),
        Command::Find {
            keyword: "Book".to_string()
        }
    );
    assert_eq!(
        parse_command("on 2025-09-10").unwrap(),
        Command::OnDate {
            date: "2025-09-10".to_string()
        }
    );
    assert!(invalid("find"));
    assert!(invalid("on   "));
}
