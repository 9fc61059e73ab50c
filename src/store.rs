use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::model::{Status, Task, TaskId};
use crate::sheet;

/// Most rows any view renders by default.
pub const DISPLAY_LIMIT: usize = 30;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task description must not be empty")]
    EmptyDescription,
    #[error("no task with id {0}")]
    NotFound(TaskId),
    #[error("sheet row {row}: {reason}")]
    Corrupt { row: usize, reason: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Recoverable errors leave the table untouched and are reported to the
    /// user; everything else means the backing sheet is unusable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyDescription | Self::NotFound(_))
    }
}

/// Which end of the table a capped listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListWindow {
    Oldest(usize),
    Newest(usize),
}

/// Owner of the task table. All reads and writes of the backing sheet go
/// through one of these; every mutation is read-modify-persist-return, with
/// the in-memory table restored if the persist fails.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskStore {
    /// Opens the sheet at `path`, creating it with the seed rows if absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let tasks = if path.exists() {
            sheet::load(&path)?
        } else {
            let tasks = sheet::seed_tasks();
            sheet::save(&path, &tasks)?;
            tasks
        };
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Ok(Self {
            path,
            tasks,
            next_id,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The whole table in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Result<&Task, StoreError> {
        self.index_of(id).map(|idx| &self.tasks[idx])
    }

    /// At most the window's row count, in table order.
    pub fn list(&self, window: ListWindow) -> impl Iterator<Item = &Task> + '_ {
        let (skip, take) = match window {
            ListWindow::Oldest(n) => (0, n),
            ListWindow::Newest(n) => (self.tasks.len().saturating_sub(n), n),
        };
        self.tasks.iter().skip(skip).take(take)
    }

    pub fn add(&mut self, description: &str) -> Result<&Task, StoreError> {
        if description.trim().is_empty() {
            return Err(StoreError::EmptyDescription);
        }
        let task = Task {
            id: self.next_id,
            description: description.to_string(),
            status: Status::NotStarted,
            last_updated: None,
            notes: None,
        };
        self.tasks.push(task);
        if let Err(e) = self.persist() {
            self.tasks.pop();
            return Err(e);
        }
        self.next_id += 1;
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Sets the status and stamps `last_updated` with the current time.
    pub fn set_status(&mut self, id: TaskId, status: Status) -> Result<&Task, StoreError> {
        let idx = self.index_of(id)?;
        let prev = self.tasks[idx].clone();
        self.tasks[idx].status = status;
        self.tasks[idx].last_updated = Some(timestamp());
        if let Err(e) = self.persist() {
            self.tasks[idx] = prev;
            return Err(e);
        }
        Ok(&self.tasks[idx])
    }

    /// Overwrites the notes; empty text clears them. The timestamp is not
    /// touched: it records status changes only.
    pub fn set_notes(&mut self, id: TaskId, notes: &str) -> Result<&Task, StoreError> {
        let idx = self.index_of(id)?;
        let prev = self.tasks[idx].notes.clone();
        self.tasks[idx].notes = if notes.is_empty() {
            None
        } else {
            Some(notes.to_string())
        };
        if let Err(e) = self.persist() {
            self.tasks[idx].notes = prev;
            return Err(e);
        }
        Ok(&self.tasks[idx])
    }

    /// Removes the record. Surviving records keep their ids.
    pub fn delete(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let idx = self.index_of(id)?;
        let removed = self.tasks.remove(idx);
        match self.persist() {
            Ok(()) => Ok(removed),
            Err(e) => {
                self.tasks.insert(idx, removed);
                Err(e)
            }
        }
    }

    fn index_of(&self, id: TaskId) -> Result<usize, StoreError> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn persist(&self) -> Result<(), StoreError> {
        sheet::save(&self.path, &self.tasks)
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
