//! Flat-file storage for the task list
//!
//! Tasks are stored one per line in `tasks.csv`:
//!
//! ```text
//! <id>,<title>,<due as yyyy-MM-dd HH:mm>
//! ```
//!
//! Literal commas in the title are stored as semicolons so every line
//! splits on its first two commas. The escape is lossy: a title that
//! legitimately contains a semicolon reads back as a comma. The scheme is
//! kept as-is for compatibility with existing files.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::domain::{format_due, parse_due, Task, TaskId, TaskList};

/// Default data file, relative to the working directory
pub const DEFAULT_FILE: &str = "tasks.csv";

/// Reason a stored line could not be decoded
#[derive(Debug, Error, PartialEq)]
pub enum LineError {
    #[error("expected 3 comma-separated fields, found {0}")]
    MissingFields(usize),

    #[error("invalid task ID '{0}'")]
    InvalidId(String),

    #[error("invalid due date '{0}', expected yyyy-MM-dd HH:mm")]
    InvalidDate(String),
}

/// Encodes one task as a storage line
pub fn encode_line(task: &Task) -> String {
    format!(
        "{},{},{}",
        task.id,
        task.title.replace(',', ";"),
        format_due(&task.due)
    )
}

/// Decodes one storage line.
///
/// Splits on the first two commas only, so escaped titles cannot push the
/// due date into a fourth field. A trailing `\r` is tolerated for files
/// written on Windows.
pub fn decode_line(line: &str) -> Result<Task, LineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let fields: Vec<&str> = line.splitn(3, ',').collect();
    if fields.len() < 3 {
        return Err(LineError::MissingFields(fields.len()));
    }

    let id: TaskId = fields[0]
        .parse()
        .map_err(|_| LineError::InvalidId(fields[0].to_string()))?;
    let title = fields[1].replace(';', ",");
    let due = parse_due(fields[2]).map_err(|_| LineError::InvalidDate(fields[2].to_string()))?;

    Ok(Task::new(id, title, due))
}

/// A line skipped during load
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based line number in the file
    pub line_no: usize,
    /// Why the line was rejected
    pub reason: LineError,
}

/// Result of loading the data file
pub struct LoadOutcome {
    /// The reconstructed list, ID assignment resumed past the highest ID
    pub list: TaskList,
    /// Lines that could not be decoded, in file order
    pub skipped: Vec<SkippedLine>,
}

/// Handle to the on-disk task file
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    /// Creates a handle for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the task list from disk.
    ///
    /// A missing file yields an empty list, not an error. Corrupt lines
    /// are skipped and recorded in the outcome so the caller can report
    /// them; only an unreadable file aborts the load.
    pub fn load(&self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            return Ok(LoadOutcome {
                list: TaskList::new(),
                skipped: Vec::new(),
            });
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open task file: {}", self.path.display()))?;
        let reader = BufReader::new(file);

        let mut tasks = Vec::new();
        let mut skipped = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", idx + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            match decode_line(&line) {
                Ok(task) => tasks.push(task),
                Err(reason) => skipped.push(SkippedLine {
                    line_no: idx + 1,
                    reason,
                }),
            }
        }

        Ok(LoadOutcome {
            list: TaskList::from_tasks(tasks),
            skipped,
        })
    }

    /// Writes every task, one line each, fully replacing the file.
    ///
    /// Tasks are written in the list's stored order, not sorted. The write
    /// goes to a temp file first and lands with a rename.
    pub fn save(&self, list: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let temp_path = self.path.with_extension("csv.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            let mut writer = BufWriter::new(file);

            for task in list.iter() {
                writeln!(writer, "{}", encode_line(task)).context("Failed to write task")?;
            }

            writer.flush().context("Failed to flush task file")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
