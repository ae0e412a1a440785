//! Turns one input line into a [`Command`].
//!
//! Keywords are matched with their trailing space (`todo `, `done `, ...) so
//! that `todolist` is not read as `todo`; only `list` is a whole-line match.
//! Descriptions and dates are cut out at fixed offsets: the description
//! starts right after the keyword and stops one character before the first
//! `/`, and the date starts four characters after that slash (skipping
//! `/by ` or `/at `). Input with extra spaces around those delimiters is
//! therefore rejected or mis-sliced.

use chrono::NaiveDate;
use tracing::debug;

use crate::command::Command;
use crate::error::CommandError;
use crate::task::Task;
use crate::todolist::TodoList;

const TODO_OFFSET: usize = 5;
const DEADLINE_OFFSET: usize = 9;
const EVENT_OFFSET: usize = 6;
const FIND_OFFSET: usize = 5;
/// The slash plus the three-letter `by ` / `at ` marker.
const DATE_OFFSET: usize = 4;

const ISO_DATE: &str = "%Y-%m-%d";

/// Whether the line asks to leave the shell.
pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("bye")
}

/// Parses a line against the current list. Index and capacity checks use the
/// list's state at parse time.
pub fn parse(line: &str, list: &TodoList) -> Result<Command, CommandError> {
    let parsed = parse_line(line, list);
    if let Err(e) = &parsed {
        debug!(%line, error = ?e, "rejected input");
    }
    parsed
}

fn parse_line(line: &str, list: &TodoList) -> Result<Command, CommandError> {
    if line.trim() == "list" {
        return Ok(Command::List);
    }
    if line.starts_with("done ") {
        return parse_index(line, list).map(Command::Done);
    }
    if line.starts_with("delete ") {
        return parse_index(line, list).map(Command::Delete);
    }
    if line.starts_with("find ") {
        let key = line[FIND_OFFSET..].trim();
        return Ok(Command::Find(key.to_string()));
    }

    if list.is_full() {
        return Err(CommandError::TaskArrayFull);
    }

    if line.starts_with("todo ") {
        let description = line[TODO_OFFSET..].trim();
        if description.is_empty() {
            return Err(CommandError::TodoBlankDesc);
        }
        return Ok(Command::Add(Task::todo(description)));
    }
    if line.starts_with("deadline ") {
        let (description, date) = dated_slots(line, DEADLINE_OFFSET, DatedErrors::DEADLINE)?;
        return Ok(Command::Add(Task::deadline(description, date)));
    }
    if line.starts_with("event ") {
        let (description, date) = dated_slots(line, EVENT_OFFSET, DatedErrors::EVENT)?;
        return Ok(Command::Add(Task::event(description, date)));
    }

    Err(CommandError::CommandInvalid)
}

/// Second space-separated token as a 1-based index, converted to 0-based.
fn parse_index(line: &str, list: &TodoList) -> Result<usize, CommandError> {
    let token = line.split(' ').nth(1).unwrap_or_default();
    // 32-bit, so anything past i32 is not a number rather than out of range.
    let n: i32 = token.parse().map_err(|_| CommandError::IndexInvalid)?;
    match usize::try_from(n) {
        Ok(n) if (1..=list.total()).contains(&n) => Ok(n - 1),
        _ => Err(CommandError::IndexOob),
    }
}

struct DatedErrors {
    no_slash: CommandError,
    blank_desc: CommandError,
    blank_date: CommandError,
}

impl DatedErrors {
    const DEADLINE: Self = Self {
        no_slash: CommandError::DeadlineNoSlash,
        blank_desc: CommandError::DeadlineBlankDesc,
        blank_date: CommandError::DeadlineBlankDate,
    };
    const EVENT: Self = Self {
        no_slash: CommandError::EventNoSlash,
        blank_desc: CommandError::EventBlankDesc,
        blank_date: CommandError::EventBlankDate,
    };
}

/// Cuts the description and date out of a `deadline`/`event` line.
/// Checks run in a fixed order: slash, date, description, date format.
fn dated_slots(
    line: &str,
    offset: usize,
    errors: DatedErrors,
) -> Result<(String, NaiveDate), CommandError> {
    let slash = line.find('/').ok_or(errors.no_slash)?;

    let date_str = match line[slash..].char_indices().nth(DATE_OFFSET) {
        Some((i, _)) => &line[slash + i..],
        None => "",
    };
    if date_str.trim().is_empty() {
        return Err(errors.blank_date);
    }

    // The description window is [offset, slash - 1): it also drops the
    // character just before the slash, normally a space.
    if slash <= offset + 1 {
        return Err(errors.blank_desc);
    }
    let mut window = line[offset..slash].chars();
    window.next_back();
    let description = window.as_str().trim();
    if description.is_empty() {
        return Err(errors.blank_desc);
    }

    let date = parse_iso_date(date_str)?;
    debug!(%description, %date, "parsed dated task");
    Ok((description.to_string(), date))
}

/// Strict `YYYY-MM-DD`: chrono alone would also take unpadded fields.
fn parse_iso_date(s: &str) -> Result<NaiveDate, CommandError> {
    let date = NaiveDate::parse_from_str(s, ISO_DATE).map_err(|_| CommandError::DateInvalid)?;
    if date.format(ISO_DATE).to_string() != s {
        return Err(CommandError::DateInvalid);
    }
    Ok(date)
}
