//! # Storage Layer
//!
//! Durable round-trip of the task list to a flat file.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | delimited text (one record per line) | `tasks.csv` |
//!
//! Writes are atomic (temp file + rename) and always replace the whole
//! file. Loads recover from per-line corruption by skipping the bad line
//! and reporting it; only an unreadable file is an error.

mod csv;

pub use csv::{
    decode_line, encode_line, LineError, LoadOutcome, SkippedLine, TaskFile, DEFAULT_FILE,
};
