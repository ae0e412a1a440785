use std::io::Write;

use crate::app::ui::Ui;
use crate::error::{CommandError, ExecError};
use crate::task::Task;
use crate::todolist::TodoList;

/// A parsed line, ready to run once against the list.
///
/// `Done` and `Delete` hold a 0-based index that the parser already checked
/// against the list it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Task),
    Done(usize),
    Delete(usize),
    Find(String),
    List,
}

impl Command {
    /// Whether running this command changes the list.
    pub fn mutates(&self) -> bool {
        matches!(self, Command::Add(_) | Command::Done(_) | Command::Delete(_))
    }

    pub fn execute<W: Write>(self, list: &mut TodoList, ui: &mut Ui<W>) -> Result<(), ExecError> {
        match self {
            Command::Add(task) => {
                let rendered = task.to_string();
                list.add(task)?;
                ui.show("Gotcha. I've added this task:")?;
                ui.show(rendered)?;
                show_total(list, ui)?;
            }
            Command::Done(idx) => {
                let task = list.mark_done_index(idx).ok_or(CommandError::IndexOob)?;
                ui.show(format!("Task {} marked as complete.", task.description))?;
            }
            Command::Delete(idx) => {
                let task = list.delete_index(idx).ok_or(CommandError::IndexOob)?;
                ui.show(format!("Removed task: {task}"))?;
                show_total(list, ui)?;
            }
            Command::Find(key) => {
                ui.show("Here are the matching tasks in your list:")?;
                for (i, task) in list.numbered().filter(|(_, t)| t.description.contains(&key)) {
                    ui.show(format!("{i}. {task}"))?;
                }
            }
            Command::List => {
                for (i, task) in list.numbered() {
                    ui.show(format!("{i}. {task}"))?;
                }
            }
        }
        Ok(())
    }
}

fn show_total<W: Write>(list: &TodoList, ui: &mut Ui<W>) -> Result<(), ExecError> {
    ui.show(format!("You have a total of {} tasks now.", list.total()))?;
    Ok(())
}
