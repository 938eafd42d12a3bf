// File: ./src/model/mod.rs
pub mod datetime;
pub mod display;
pub mod item;
pub mod parser;

pub use datetime::{DateFormatError, format_nice, parse_flexible};
pub use display::TaskDisplay;
pub use item::{Task, TaskKind, TaskType};
pub use parser::parse_command;
