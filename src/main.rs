use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use todo_shell::{
    app::{input::handle_line, ui::Ui, App},
    persistence,
    todolist::TodoList,
    Cli, Cmd,
};

fn main() -> Result<()> {
    // Quiet by default; RUST_LOG=debug shows parser and store activity on stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let data_path = if cli.no_save {
        None
    } else {
        Some(match cli.data_file {
            Some(path) => path,
            None => persistence::default_path()?,
        })
    };

    match cli.cmd {
        Some(Cmd::List) => {
            let list = load(data_path.as_deref())?;
            if list.is_empty() {
                println!("No tasks yet.");
            } else {
                for (i, t) in list.numbered() {
                    println!("{i}. {t}");
                }
            }
        }
        Some(Cmd::Exec { line }) => {
            let mut app = App::new(load(data_path.as_deref())?);
            let mut ui = Ui::new(io::stdout().lock());
            handle_line(&mut app, &line, &mut ui)?;
            ui.flush()?;
            save_if_dirty(&mut app, data_path.as_deref())?;
        }
        Some(Cmd::Shell) | None => {
            run_shell(data_path)?;
        }
    }

    Ok(())
}

fn run_shell(data_path: Option<PathBuf>) -> Result<()> {
    let mut app = App::new(load(data_path.as_deref())?);
    info!(total = app.list.total(), "shell started");

    let stdin = io::stdin();
    let mut ui = Ui::new(io::stdout().lock());
    app.run(stdin.lock(), &mut ui, |app| {
        save_if_dirty(app, data_path.as_deref())
    })?;

    // Save once before exiting if needed
    save_if_dirty(&mut app, data_path.as_deref())?;
    info!(total = app.list.total(), "shell closed");
    Ok(())
}

fn load(path: Option<&Path>) -> Result<TodoList> {
    match path {
        Some(path) => persistence::load(path),
        None => Ok(TodoList::default()),
    }
}

fn save_if_dirty(app: &mut App, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        if app.dirty {
            persistence::save(path, &app.list)?;
        }
    }
    app.dirty = false;
    Ok(())
}
