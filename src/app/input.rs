use std::io::{self, Write};

use tracing::debug;

use crate::app::ui::Ui;
use crate::app::App;
use crate::error::ExecError;
use crate::parser;

/// Handles one input line. Returns `false` when the shell should stop.
///
/// Parse and execution errors are shown and swallowed; only a failing
/// output surface comes back as `Err`.
pub fn handle_line<W: Write>(app: &mut App, line: &str, ui: &mut Ui<W>) -> io::Result<bool> {
    if parser::is_exit(line) {
        debug!("exit requested");
        return Ok(false);
    }

    ui.divider()?;
    match parser::parse(line, &app.list) {
        Ok(cmd) => {
            let mutates = cmd.mutates();
            match cmd.execute(&mut app.list, ui) {
                Ok(()) => app.dirty |= mutates,
                Err(ExecError::Command(e)) => ui.show_error(e)?,
                Err(ExecError::Io(e)) => return Err(e),
            }
        }
        Err(e) => ui.show_error(e)?,
    }
    ui.divider()?;
    Ok(true)
}
