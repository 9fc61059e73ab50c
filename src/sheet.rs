//! On-disk format of the task sheet: a CSV file whose first row is the
//! header, one data row per task. Empty Timestamp/Notes cells mean "unset".

use std::path::Path;

use crate::model::{Status, Task, TaskId};
use crate::store::StoreError;

pub const HEADER: [&str; 5] = ["Id", "Task", "Status", "Timestamp", "Notes"];

/// Rows written into a freshly created sheet.
const SEED: [(&str, Status, &str, &str); 10] = [
    ("Design project layout", Status::NotStarted, "", ""),
    (
        "Write project documentation",
        Status::InProgress,
        "2024-06-27 14:45:00",
        "Documentation is halfway done.",
    ),
    (
        "Implement user authentication",
        Status::Completed,
        "2024-06-25 11:30:00",
        "",
    ),
    ("Setup database schema", Status::Completed, "2024-06-26 09:20:00", ""),
    ("Conduct code review", Status::NotStarted, "", ""),
    (
        "Test application features",
        Status::InProgress,
        "2024-06-28 10:00:00",
        "Initial testing started, some bugs found.",
    ),
    ("Deploy application to production", Status::NotStarted, "", ""),
    (
        "Optimize application performance",
        Status::Completed,
        "2024-06-24 08:45:00",
        "",
    ),
    ("Gather user feedback", Status::NotStarted, "", ""),
    ("Schedule team meeting", Status::Completed, "2024-06-23 15:00:00", ""),
];

pub fn seed_tasks() -> Vec<Task> {
    SEED.iter()
        .enumerate()
        .map(|(i, &(description, status, stamp, notes))| Task {
            id: i as TaskId + 1,
            description: description.to_string(),
            status,
            last_updated: cell_to_field(stamp),
            notes: cell_to_field(notes),
        })
        .collect()
}

fn cell_to_field(cell: &str) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

fn corrupt(row: usize, reason: impl Into<String>) -> StoreError {
    StoreError::Corrupt {
        row,
        reason: reason.into(),
    }
}

pub fn load(path: &Path) -> Result<Vec<Task>, StoreError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    if headers.iter().ne(HEADER) {
        return Err(corrupt(1, format!("expected header {HEADER:?}")));
    }

    let mut tasks: Vec<Task> = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 2;
        let record = record?;
        if record.len() != HEADER.len() {
            return Err(corrupt(
                row,
                format!("expected {} columns, found {}", HEADER.len(), record.len()),
            ));
        }
        let id: TaskId = record[0]
            .parse()
            .map_err(|_| corrupt(row, format!("invalid id '{}'", &record[0])))?;
        if let Some(prev) = tasks.last() {
            if id <= prev.id {
                return Err(corrupt(
                    row,
                    format!("id {id} is not greater than preceding id {}", prev.id),
                ));
            }
        }
        let status = Status::parse(&record[2]).map_err(|e| corrupt(row, e.to_string()))?;
        tasks.push(Task {
            id,
            description: record[1].to_string(),
            status,
            last_updated: cell_to_field(&record[3]),
            notes: cell_to_field(&record[4]),
        });
    }
    Ok(tasks)
}

/// Writes the whole table as one atomic commit: serialize to a temp file in
/// the sheet's directory, fsync, rename over the target. A failure mid-write
/// leaves the previous sheet intact.
pub fn save(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::Writer::from_writer(tmp.as_file());
        writer.write_record(HEADER)?;
        for task in tasks {
            let id = task.id.to_string();
            writer.write_record([
                id.as_str(),
                task.description.as_str(),
                task.status.as_str(),
                task.last_updated.as_deref().unwrap_or(""),
                task.notes.as_deref().unwrap_or(""),
            ])?;
        }
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}
