//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::shell;
use crate::domain::{format_due, parse_due, TaskId, TaskList};
use crate::storage::{TaskFile, DEFAULT_FILE};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(author, version, about = "A due-date task list for the command line")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Task file location
    #[arg(long, global = true, env = "AGENDA_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task with a title and due date
    Add {
        /// Task title
        title: String,

        /// Due date and time, e.g. "2024-01-02 09:00"
        due: String,
    },

    /// List all tasks, soonest due date first
    List,

    /// Show one task
    Show {
        /// Task ID
        id: String,
    },

    /// Delete a task by ID
    Delete {
        /// Task ID
        id: String,
    },

    /// Run the interactive menu
    Shell,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("agenda starting");

    let file = TaskFile::new(cli.file);

    match cli.command {
        Commands::Add { title, due } => add_task(&output, &file, title, &due),
        Commands::List => list_tasks(&output, &file),
        Commands::Show { id } => show_task(&output, &file, &id),
        Commands::Delete { id } => delete_task(&output, &file, &id),
        Commands::Shell => shell::run(&output, &file),
    }
}

/// Loads the task list, reporting any skipped lines as warnings
pub(crate) fn load_list(output: &Output, file: &TaskFile) -> Result<TaskList> {
    let outcome = file.load()?;

    for skip in &outcome.skipped {
        output.warning(&format!(
            "skipping line {} of {}: {}",
            skip.line_no,
            file.path().display(),
            skip.reason
        ));
    }

    output.verbose(&format!(
        "loaded {} tasks from {}",
        outcome.list.len(),
        file.path().display()
    ));

    Ok(outcome.list)
}

fn add_task(output: &Output, file: &TaskFile, title: String, due_str: &str) -> Result<()> {
    let due = parse_due(due_str).map_err(|_| {
        anyhow::anyhow!(
            "Invalid due date '{}': expected format yyyy-MM-dd HH:mm",
            due_str
        )
    })?;

    let mut list = load_list(output, file)?;
    let task = list.add(title, due).clone();
    file.save(&list)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": task.id.value(),
            "title": task.title,
            "due": format_due(&task.due),
        }));
    } else {
        output.success(&format!(
            "Added task {}: {} (due {})",
            task.id,
            task.title,
            format_due(&task.due)
        ));
    }

    Ok(())
}

fn list_tasks(output: &Output, file: &TaskFile) -> Result<()> {
    let list = load_list(output, file)?;

    if output.is_json() {
        let items: Vec<_> = list
            .sorted()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "id": t.id.value(),
                    "title": t.title,
                    "due": format_due(&t.due),
                })
            })
            .collect();
        output.data(&items);
    } else if list.is_empty() {
        println!("No tasks found.");
    } else {
        println!("{:<6} {:<18} TITLE", "ID", "DUE");
        println!("{}", "-".repeat(50));
        for task in list.sorted() {
            println!(
                "{:<6} {:<18} {}",
                task.id.value(),
                format_due(&task.due),
                task.title
            );
        }
    }

    Ok(())
}

fn show_task(output: &Output, file: &TaskFile, id_str: &str) -> Result<()> {
    let id: TaskId = id_str.parse()?;
    let list = load_list(output, file)?;

    let task = list
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("Task not found: {}", id))?;

    if output.is_json() {
        output.data(task);
    } else {
        println!("ID:    {}", task.id);
        println!("Title: {}", task.title);
        println!("Due:   {}", format_due(&task.due));
    }

    Ok(())
}

fn delete_task(output: &Output, file: &TaskFile, id_str: &str) -> Result<()> {
    let id: TaskId = id_str.parse()?;
    let mut list = load_list(output, file)?;

    if !list.delete(id) {
        anyhow::bail!("Task not found: {}", id);
    }

    file.save(&list)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "deleted": id.value() }));
    } else {
        output.success(&format!("Deleted task {}", id));
    }

    Ok(())
}
