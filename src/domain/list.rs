//! In-memory task list
//!
//! The list is the in-memory authority for all tasks: it assigns IDs,
//! enforces their uniqueness, and provides sorted retrieval. It knows
//! nothing about files; persistence lives in the storage layer.

use chrono::NaiveDateTime;

use super::id::TaskId;
use super::task::Task;

/// In-memory collection of tasks with monotonic ID assignment
#[derive(Debug, Default)]
pub struct TaskList {
    /// Tasks in insertion order
    tasks: Vec<Task>,
    /// Next ID to hand out; strictly greater than every ID ever assigned
    next_id: u64,
}

impl TaskList {
    /// Creates an empty list; the first task gets ID 1
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a list from previously persisted tasks.
    ///
    /// ID assignment resumes at one past the highest existing ID so a
    /// reloaded list never hands out an ID already on disk.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let max_id = tasks.iter().map(|t| t.id.value()).max().unwrap_or(0);
        Self {
            tasks,
            next_id: max_id + 1,
        }
    }

    /// Adds a task and returns it.
    ///
    /// Never fails: empty titles and past due dates are allowed.
    pub fn add(&mut self, title: impl Into<String>, due: NaiveDateTime) -> &Task {
        let task = Task::new(TaskId::new(self.next_id), title, due);
        self.next_id += 1;
        self.tasks.push(task);
        let last = self.tasks.len() - 1;
        &self.tasks[last]
    }

    /// Returns the task with the given ID, if present
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Removes every task with the given ID; returns whether any was removed
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// All tasks ascending by due date, soonest first.
    ///
    /// Equal due dates keep their insertion order (the sort is stable).
    /// This is a view; the stored order is left untouched.
    pub fn sorted(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by_key(|t| t.due);
        view
    }

    /// Iterates over tasks in stored (insertion) order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Number of tasks in the list
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the list holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The ID the next added task will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
