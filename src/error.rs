use std::io;

use thiserror::Error;

/// Everything a command line can be rejected for. The display text is what
/// the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command.")]
    CommandInvalid,
    #[error("Index is not a valid number.")]
    IndexInvalid,
    #[error("Index outside range.")]
    IndexOob,
    #[error("Task list is full.")]
    TaskArrayFull,
    #[error("Todo description is blank.")]
    TodoBlankDesc,
    #[error("Deadline is missing '/by'.")]
    DeadlineNoSlash,
    #[error("Deadline description is blank.")]
    DeadlineBlankDesc,
    #[error("Deadline date is blank.")]
    DeadlineBlankDate,
    #[error("Event is missing '/at'.")]
    EventNoSlash,
    #[error("Event description is blank.")]
    EventBlankDesc,
    #[error("Event date is blank.")]
    EventBlankDate,
    #[error("Date could not be parsed.")]
    DateInvalid,
}

/// Failure while executing a parsed command.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Shown to the user; the shell keeps going.
    #[error(transparent)]
    Command(#[from] CommandError),
    /// The output surface is gone; fatal.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// A save-form line that could not be turned back into a task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveFormatError {
    #[error("expected at least 3 fields, found {0}")]
    MissingFields(usize),
    #[error("unknown task kind `{0}`")]
    UnknownKind(String),
    #[error("done flag must be 0 or 1, found `{0}`")]
    BadFlag(String),
    #[error("{0} task is missing its date")]
    MissingDate(char),
    #[error("cannot parse date `{0}`")]
    BadDate(String),
    #[error("description is blank")]
    BlankDescription,
}
