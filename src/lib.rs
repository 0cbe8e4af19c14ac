//! Agenda - a due-date task list for the command line
//!
//! Tasks have a title and a due date with minute precision. The list is
//! held in memory while the program runs and persisted between sessions
//! to a comma-delimited text file, one task per line.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{Task, TaskId, TaskList};
pub use storage::TaskFile;
