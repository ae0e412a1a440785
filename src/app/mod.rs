pub mod input;
pub mod ui;

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::todolist::TodoList;

use self::input::handle_line;
use self::ui::Ui;

/// Central shell state
#[derive(Debug, Default)]
pub struct App {
    pub list: TodoList,
    /// Set when the list changed since the last save.
    pub dirty: bool,
}

impl App {
    pub fn new(list: TodoList) -> Self {
        Self { list, dirty: false }
    }

    /// Reads lines until `bye` or end of input. `after_line` runs after
    /// every handled line, which is where the caller saves a dirty list.
    ///
    /// Bytes that are not UTF-8 are replaced rather than ending the session.
    /// I/O failures and errors from `after_line` end the loop early.
    pub fn run<R, W, F>(&mut self, mut input: R, ui: &mut Ui<W>, mut after_line: F) -> Result<()>
    where
        R: BufRead,
        W: Write,
        F: FnMut(&mut App) -> Result<()>,
    {
        ui.greet()?;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&buf);
            let line = text.strip_suffix('\n').unwrap_or(&text);
            let line = line.strip_suffix('\r').unwrap_or(line);
            let keep_running = handle_line(self, line, ui)?;
            ui.flush()?;
            if !keep_running {
                break;
            }
            after_line(self)?;
        }
        ui.farewell()?;
        Ok(())
    }
}
