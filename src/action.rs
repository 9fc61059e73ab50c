use crate::model::{Status, TaskId};
use crate::store::{StoreError, TaskStore};

/// One user intent, applied as exactly one store operation. Both the CLI and
/// the TUI funnel their mutations through here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { description: String },
    SetStatus { id: TaskId, status: Status },
    SetNotes { id: TaskId, notes: String },
    Delete { id: TaskId },
}

impl Action {
    /// Applies the action and returns a one-line confirmation for the
    /// presentation layer. On error the table is unchanged.
    pub fn apply(self, store: &mut TaskStore) -> Result<String, StoreError> {
        match self {
            Action::Add { description } => {
                let task = store.add(&description)?;
                Ok(format!("Added task {} '{}'", task.id, task.description))
            }
            Action::SetStatus { id, status } => {
                let task = store.set_status(id, status)?;
                Ok(format!("Task {} marked {}", task.id, task.status))
            }
            Action::SetNotes { id, notes } => {
                let task = store.set_notes(id, &notes)?;
                if task.notes.is_some() {
                    Ok(format!("Updated notes for task {}", task.id))
                } else {
                    Ok(format!("Cleared notes for task {}", task.id))
                }
            }
            Action::Delete { id } => {
                let task = store.delete(id)?;
                Ok(format!("Deleted task {} '{}'", task.id, task.description))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_store() -> (TempDir, TaskStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::open(dir.path().join("tasks.csv")).unwrap();
        (dir, store)
    }

    #[test]
    fn add_reports_the_new_id() {
        let (_dir, mut store) = seeded_store();
        let msg = Action::Add {
            description: "Ship release".to_string(),
        }
        .apply(&mut store)
        .unwrap();
        assert_eq!(msg, "Added task 11 'Ship release'");
        assert_eq!(store.len(), 11);
    }

    #[test]
    fn set_status_reports_the_sheet_literal() {
        let (_dir, mut store) = seeded_store();
        let msg = Action::SetStatus {
            id: 1,
            status: Status::InProgress,
        }
        .apply(&mut store)
        .unwrap();
        assert_eq!(msg, "Task 1 marked Under Process");
    }

    #[test]
    fn set_notes_distinguishes_clearing() {
        let (_dir, mut store) = seeded_store();
        let msg = Action::SetNotes {
            id: 1,
            notes: "blocked on review".to_string(),
        }
        .apply(&mut store)
        .unwrap();
        assert_eq!(msg, "Updated notes for task 1");

        let msg = Action::SetNotes {
            id: 1,
            notes: String::new(),
        }
        .apply(&mut store)
        .unwrap();
        assert_eq!(msg, "Cleared notes for task 1");
    }

    #[test]
    fn delete_reports_the_removed_task() {
        let (_dir, mut store) = seeded_store();
        let msg = Action::Delete { id: 10 }.apply(&mut store).unwrap();
        assert_eq!(msg, "Deleted task 10 'Schedule team meeting'");
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn errors_pass_through_and_leave_the_table_alone() {
        let (_dir, mut store) = seeded_store();
        let before = store.tasks().to_vec();
        let err = Action::Delete { id: 99 }.apply(&mut store).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(99)));
        assert_eq!(store.tasks(), before.as_slice());
    }
}
