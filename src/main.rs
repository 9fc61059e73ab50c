use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use tasksched::action::Action;
use tasksched::cli::{Cli, Command};
use tasksched::model::Status;
use tasksched::output;
use tasksched::store::{ListWindow, TaskStore};
use tasksched::tui;

const DEFAULT_SHEET: &str = "tasks.csv";

fn resolve_sheet_path(cli_sheet: Option<String>) -> PathBuf {
    match cli_sheet {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(DEFAULT_SHEET),
    }
}

fn ensure_sheet_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn open_store(path: &Path) -> Result<TaskStore> {
    ensure_sheet_dir(path)?;
    TaskStore::open(path)
        .with_context(|| format!("failed to open task sheet {}", path.display()))
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = resolve_sheet_path(cli.sheet);

    match cli.command {
        None | Some(Command::Ui) => {
            let mut store = open_store(&path)?;
            tui::run(&mut store)?;
        }

        Some(Command::Add { description }) => {
            let mut store = open_store(&path)?;
            let msg = Action::Add { description }.apply(&mut store)?;
            eprintln!("{msg}");
        }

        Some(Command::Status { id, status }) => {
            let status = Status::parse(&status)?;
            let mut store = open_store(&path)?;
            let msg = Action::SetStatus { id, status }.apply(&mut store)?;
            eprintln!("{msg}");
        }

        Some(Command::Note { id, notes }) => {
            let notes = match notes {
                Some(n) => n,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf.trim_end().to_string()
                }
            };
            let mut store = open_store(&path)?;
            let msg = Action::SetNotes { id, notes }.apply(&mut store)?;
            eprintln!("{msg}");
        }

        Some(Command::Rm { id }) => {
            let mut store = open_store(&path)?;
            let msg = Action::Delete { id }.apply(&mut store)?;
            eprintln!("{msg}");
        }

        Some(Command::Show { id }) => {
            let store = open_store(&path)?;
            let task = store.get(id)?;
            print!("{}", output::format_task_detail(task));
        }

        Some(Command::List { limit, newest, json }) => {
            let store = open_store(&path)?;
            let window = if newest {
                ListWindow::Newest(limit)
            } else {
                ListWindow::Oldest(limit)
            };
            let tasks: Vec<_> = store.list(window).cloned().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                print!("{}", output::format_task_list(&tasks));
            }
        }
    }

    Ok(())
}
