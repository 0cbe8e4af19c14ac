//! Interactive menu shell
//!
//! A line-oriented menu loop over stdin: add, view, delete, then save on
//! exit. Bad input prints a message and returns to the menu; the loop only
//! ends on the exit choice or end of input, and the list is saved either
//! way. A save failure is reported before the session terminates.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use super::app::load_list;
use super::output::Output;
use crate::domain::{format_due, parse_due, TaskId, TaskList};
use crate::storage::TaskFile;

/// Runs the interactive shell against stdin
pub fn run(output: &Output, file: &TaskFile) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with_input(output, file, &mut input)
}

fn run_with_input(output: &Output, file: &TaskFile, input: &mut impl BufRead) -> Result<()> {
    // An unreadable file is reported but does not end the session; the
    // shell starts over with an empty list instead.
    let mut list = match load_list(output, file) {
        Ok(list) => list,
        Err(e) => {
            output.error(&format!("{:#}", e));
            TaskList::new()
        }
    };

    println!("Welcome to agenda.");

    loop {
        println!();
        println!("1) Add a task");
        println!("2) View all tasks");
        println!("3) Delete a task");
        println!("4) Save and exit");

        let Some(choice) = prompt("Choice: ", input)? else {
            break;
        };

        match choice.trim() {
            "1" => add_task(&mut list, input)?,
            "2" => view_tasks(&list),
            "3" => delete_task(&mut list, input)?,
            "4" => break,
            _ => println!("Invalid choice, try again."),
        }
    }

    file.save(&list)?;
    println!("Tasks saved. Goodbye!");

    Ok(())
}

/// Prints a prompt and reads one line; `None` means end of input
fn prompt(label: &str, input: &mut impl BufRead) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut buf = String::new();
    let read = input.read_line(&mut buf).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn add_task(list: &mut TaskList, input: &mut impl BufRead) -> Result<()> {
    let Some(title) = prompt("Task title: ", input)? else {
        return Ok(());
    };
    let Some(due_str) = prompt("Due date (yyyy-MM-dd HH:mm): ", input)? else {
        return Ok(());
    };

    match parse_due(&due_str) {
        Ok(due) => {
            let task = list.add(title, due);
            println!("Added task {}.", task.id);
        }
        Err(_) => println!("Invalid date format. Please use yyyy-MM-dd HH:mm."),
    }

    Ok(())
}

fn view_tasks(list: &TaskList) {
    if list.is_empty() {
        println!("No tasks found.");
        return;
    }

    println!();
    println!("--- All tasks ---");
    for task in list.sorted() {
        println!(
            "{:>4}  {}  {}",
            task.id.value(),
            format_due(&task.due),
            task.title
        );
    }
}

fn delete_task(list: &mut TaskList, input: &mut impl BufRead) -> Result<()> {
    let Some(id_str) = prompt("Task ID to delete: ", input)? else {
        return Ok(());
    };

    match id_str.parse::<TaskId>() {
        Ok(id) => {
            if list.delete(id) {
                println!("Deleted task {}.", id);
            } else {
                println!("No task with ID {}.", id);
            }
        }
        Err(e) => println!("{}", e),
    }

    Ok(())
}
