//! Process-level initialization for the CLI.

mod logger;

pub use logger::init_logger_with;
