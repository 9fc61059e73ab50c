mod app;
mod event;
mod table;

use std::io;

use anyhow::Result;
use crossterm::event::{self as ct_event, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;

use crate::action::Action;
use crate::store::TaskStore;
use app::App;
use event::KeyAction;

pub fn run(store: &mut TaskStore) -> Result<()> {
    let mut app = App::new(store);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, store);

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut TaskStore,
) -> Result<()> {
    loop {
        terminal.draw(|frame| table::render(frame, app))?;

        if let Event::Key(key) = ct_event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match event::handle_key(app, key) {
                KeyAction::Quit => return Ok(()),
                KeyAction::Submit => app.submit(store)?,
                KeyAction::SetStatus(status) => match app.selected_id() {
                    Some(id) => app.apply(store, Action::SetStatus { id, status })?,
                    None => app.report_no_selection(),
                },
                KeyAction::Delete => match app.selected_id() {
                    Some(id) => app.apply(store, Action::Delete { id })?,
                    None => app.report_no_selection(),
                },
                KeyAction::ToggleWindow => app.toggle_window(store),
                KeyAction::Continue => {}
            }
        }
    }
}
