use anyhow::Result;

use crate::action::Action;
use crate::model::{Task, TaskId};
use crate::store::{ListWindow, TaskStore, DISPLAY_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    AddTask,
    EditNotes,
}

pub struct App {
    pub rows: Vec<Task>,
    pub cursor: usize,
    pub mode: Mode,
    pub input: String,
    pub window: ListWindow,
    pub error: Option<String>,
    pub info: Option<String>,
}

impl App {
    pub fn new(store: &TaskStore) -> Self {
        let mut app = App {
            rows: Vec::new(),
            cursor: 0,
            mode: Mode::Normal,
            input: String::new(),
            window: ListWindow::Oldest(DISPLAY_LIMIT),
            error: None,
            info: None,
        };
        app.refresh(store);
        app
    }

    /// Re-reads the snapshot and clamps the cursor to it.
    pub fn refresh(&mut self, store: &TaskStore) {
        self.rows = store.list(self.window).cloned().collect();
        if self.rows.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if !self.rows.is_empty() && self.cursor < self.rows.len() - 1 {
            self.cursor += 1;
        }
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.rows.get(self.cursor).map(|t| t.id)
    }

    pub fn enter_add_mode(&mut self) {
        self.input.clear();
        self.mode = Mode::AddTask;
        self.error = None;
    }

    pub fn enter_notes_mode(&mut self) {
        if self.selected_id().is_none() {
            self.report_no_selection();
            return;
        }
        self.input.clear();
        self.mode = Mode::EditNotes;
        self.error = None;
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.mode = Mode::Normal;
    }

    pub fn toggle_window(&mut self, store: &TaskStore) {
        self.window = match self.window {
            ListWindow::Oldest(n) => ListWindow::Newest(n),
            ListWindow::Newest(n) => ListWindow::Oldest(n),
        };
        self.refresh(store);
    }

    /// Commits the pending input form as a store action.
    pub fn submit(&mut self, store: &mut TaskStore) -> Result<()> {
        let action = match self.mode {
            Mode::AddTask => Action::Add {
                description: self.input.clone(),
            },
            Mode::EditNotes => match self.selected_id() {
                Some(id) => Action::SetNotes {
                    id,
                    notes: self.input.clone(),
                },
                None => {
                    self.cancel_input();
                    self.report_no_selection();
                    return Ok(());
                }
            },
            Mode::Normal => return Ok(()),
        };
        self.apply(store, action)?;
        if self.error.is_none() {
            self.cancel_input();
        }
        Ok(())
    }

    /// Applies one action; recoverable failures land in the status line,
    /// storage failures unwind to the caller.
    pub fn apply(&mut self, store: &mut TaskStore, action: Action) -> Result<()> {
        match action.apply(store) {
            Ok(msg) => {
                self.info = Some(msg);
                self.error = None;
                self.refresh(store);
            }
            Err(e) if e.is_recoverable() => {
                self.error = Some(e.to_string());
                self.info = None;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    pub fn report_no_selection(&mut self) {
        self.error = Some("no task selected".to_string());
        self.info = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded() -> (TempDir, TaskStore, App) {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::open(dir.path().join("tasks.csv")).unwrap();
        let app = App::new(&store);
        (dir, store, app)
    }

    #[test]
    fn new_snapshots_the_store() {
        let (_dir, _store, app) = seeded();
        assert_eq!(app.rows.len(), 10);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn apply_add_refreshes_rows() {
        let (_dir, mut store, mut app) = seeded();
        app.apply(
            &mut store,
            Action::Add {
                description: "Ship release".to_string(),
            },
        )
        .unwrap();
        assert_eq!(app.rows.len(), 11);
        assert!(app.info.as_deref().unwrap().contains("Ship release"));
        assert!(app.error.is_none());
    }

    #[test]
    fn recoverable_error_lands_in_status_line() {
        let (_dir, mut store, mut app) = seeded();
        app.apply(&mut store, Action::Delete { id: 99 }).unwrap();
        assert_eq!(app.rows.len(), 10);
        assert!(app.error.as_deref().unwrap().contains("99"));
    }

    #[test]
    fn submit_rejected_add_keeps_the_form_open() {
        let (_dir, mut store, mut app) = seeded();
        app.enter_add_mode();
        app.input = "   ".to_string();
        app.submit(&mut store).unwrap();
        assert_eq!(app.mode, Mode::AddTask);
        assert!(app.error.is_some());
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn submit_notes_targets_the_selected_row() {
        let (_dir, mut store, mut app) = seeded();
        app.cursor = 2;
        app.enter_notes_mode();
        app.input = "needs a second pass".to_string();
        app.submit(&mut store).unwrap();
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(
            store.get(3).unwrap().notes.as_deref(),
            Some("needs a second pass")
        );
    }

    #[test]
    fn cursor_clamps_when_the_last_row_goes_away() {
        let (_dir, mut store, mut app) = seeded();
        app.cursor = 9;
        app.apply(&mut store, Action::Delete { id: 10 }).unwrap();
        assert_eq!(app.rows.len(), 9);
        assert_eq!(app.cursor, 8);
    }

    #[test]
    fn toggle_window_flips_direction() {
        let (_dir, store, mut app) = seeded();
        assert_eq!(app.window, ListWindow::Oldest(DISPLAY_LIMIT));
        app.toggle_window(&store);
        assert_eq!(app.window, ListWindow::Newest(DISPLAY_LIMIT));
        app.toggle_window(&store);
        assert_eq!(app.window, ListWindow::Oldest(DISPLAY_LIMIT));
    }
}
