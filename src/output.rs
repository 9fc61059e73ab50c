use crate::model::Task;

pub fn format_task_list(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        let stamp = task.last_updated.as_deref().unwrap_or("");
        let notes = task
            .notes
            .as_deref()
            .map(|n| format!("  {n}"))
            .unwrap_or_default();
        out.push_str(&format!(
            "{:>4}  {} {:<13}  {:<19}  {}{}\n",
            task.id,
            task.status.icon(),
            task.status.as_str(),
            stamp,
            task.description,
            notes
        ));
    }
    out
}

pub fn format_task_detail(task: &Task) -> String {
    let mut out = String::new();
    out.push_str(&format!("Id:      {}\n", task.id));
    out.push_str(&format!("Task:    {}\n", task.description));
    out.push_str(&format!("Status:  {}\n", task.status));
    if let Some(ref stamp) = task.last_updated {
        out.push_str(&format!("Updated: {stamp}\n"));
    }
    if let Some(ref notes) = task.notes {
        out.push_str(&format!("Notes:   {notes}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn make_task(id: u64, description: &str, status: Status, stamp: Option<&str>, notes: Option<&str>) -> Task {
        Task {
            id,
            description: description.to_string(),
            status,
            last_updated: stamp.map(|s| s.to_string()),
            notes: notes.map(|s| s.to_string()),
        }
    }

    #[test]
    fn list_shows_one_line_per_task() {
        let tasks = vec![
            make_task(1, "Design layout", Status::NotStarted, None, None),
            make_task(
                3,
                "Write docs",
                Status::InProgress,
                Some("2024-06-27 14:45:00"),
                Some("halfway done"),
            ),
        ];
        let out = format_task_list(&tasks);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Design layout"));
        assert!(lines[0].contains("Not Started"));
        assert!(lines[1].contains("Under Process"));
        assert!(lines[1].contains("2024-06-27 14:45:00"));
        assert!(lines[1].contains("halfway done"));
    }

    #[test]
    fn detail_omits_absent_fields() {
        let out = format_task_detail(&make_task(2, "Ship it", Status::NotStarted, None, None));
        assert!(out.contains("Id:      2"));
        assert!(out.contains("Task:    Ship it"));
        assert!(out.contains("Status:  Not Started"));
        assert!(!out.contains("Updated:"));
        assert!(!out.contains("Notes:"));
    }

    #[test]
    fn detail_shows_timestamp_and_notes_when_set() {
        let out = format_task_detail(&make_task(
            2,
            "Ship it",
            Status::Completed,
            Some("2024-06-25 11:30:00"),
            Some("went smoothly"),
        ));
        assert!(out.contains("Updated: 2024-06-25 11:30:00"));
        assert!(out.contains("Notes:   went smoothly"));
    }
}
