use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::model::Status;
use crate::store::ListWindow;

use super::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_table(frame, app, chunks[0]);
    render_input(frame, app, chunks[1]);
    render_status_line(frame, app, chunks[2]);
}

fn status_style(status: Status) -> Style {
    match status {
        Status::NotStarted => Style::default().fg(Color::Yellow),
        Status::InProgress => Style::default().fg(Color::Cyan),
        Status::Completed => Style::default().fg(Color::Green),
    }
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .rows
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let stamp = task.last_updated.as_deref().unwrap_or("");
            let notes = task
                .notes
                .as_deref()
                .map(|n| format!("  {n}"))
                .unwrap_or_default();

            let line = Line::from(vec![
                Span::raw(format!("{:>4}  ", task.id)),
                Span::styled(
                    format!("{:<13}", task.status.as_str()),
                    status_style(task.status),
                ),
                Span::raw(format!("  {stamp:<19}  ")),
                Span::styled(task.description.clone(), Style::default().bold()),
                Span::raw(notes),
            ]);

            let item = ListItem::new(line);
            if i == app.cursor {
                item.style(Style::default().bg(Color::DarkGray))
            } else {
                item
            }
        })
        .collect();

    let title = match app.window {
        ListWindow::Oldest(n) => format!(" Tasks (oldest {n}) "),
        ListWindow::Newest(n) => format!(" Tasks (newest {n}) "),
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let (title, text) = match app.mode {
        Mode::AddTask => (" New task ", app.input.as_str()),
        Mode::EditNotes => (" Notes (empty clears) ", app.input.as_str()),
        Mode::Normal => (" Input ", ""),
    };
    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(ref e) = app.error {
        Line::from(Span::styled(e.clone(), Style::default().fg(Color::Red)))
    } else if let Some(ref info) = app.info {
        Line::from(Span::raw(info.clone()))
    } else {
        Line::from(Span::raw(
            "a add  n notes  1/2/3 status  d delete  v window  q quit",
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}
