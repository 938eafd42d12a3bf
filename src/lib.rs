// Crate root library declaration and module exports.
pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod ui;

pub use command::{Command, Outcome};
pub use controller::Session;
pub use error::OkukeError;
