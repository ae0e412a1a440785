use std::fmt;

use chrono::NaiveDate;

use crate::error::SaveFormatError;

/// Pattern used for dates both on screen and in the save file, e.g. `2024 Jan 07`.
pub const DATE_FORMAT: &str = "%Y %b %d";

const SAVE_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Done,
}

/// What sort of task this is. Only deadlines and events carry a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline(NaiveDate),
    Event(NaiveDate),
}

impl TaskKind {
    /// Single-letter tag shown in brackets and written to the save file.
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline(_) => 'D',
            TaskKind::Event(_) => 'E',
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match *self {
            TaskKind::Todo => None,
            TaskKind::Deadline(date) | TaskKind::Event(date) => Some(date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub status: Status,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            status: Status::Pending,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Self::new(description, TaskKind::Deadline(by))
    }

    pub fn event(description: impl Into<String>, at: NaiveDate) -> Self {
        Self::new(description, TaskKind::Event(at))
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Marking an already finished task again changes nothing.
    pub fn mark_complete(&mut self) {
        self.status = Status::Done;
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// `kind | flag | description[ | date]`, one line per task.
    pub fn save_string(&self) -> String {
        let flag = if self.is_done() { '1' } else { '0' };
        let mut line = format!(
            "{}{SAVE_SEPARATOR}{}{SAVE_SEPARATOR}{}",
            self.kind.tag(),
            flag,
            self.description
        );
        if let Some(date) = self.kind.date() {
            line.push_str(SAVE_SEPARATOR);
            line.push_str(&date.format(DATE_FORMAT).to_string());
        }
        line
    }

    /// Inverse of [`Task::save_string`].
    ///
    /// Descriptions may themselves contain the separator: a todo takes the
    /// whole remainder, a dated task takes everything before the last one.
    pub fn from_save_line(line: &str) -> Result<Self, SaveFormatError> {
        let fields: Vec<&str> = line.splitn(3, SAVE_SEPARATOR).collect();
        let &[tag, flag, rest] = fields.as_slice() else {
            return Err(SaveFormatError::MissingFields(fields.len()));
        };

        let status = match flag {
            "0" => Status::Pending,
            "1" => Status::Done,
            other => return Err(SaveFormatError::BadFlag(other.to_string())),
        };

        let (description, kind) = match tag {
            "T" => (rest, TaskKind::Todo),
            "D" | "E" => {
                let tag = if tag == "D" { 'D' } else { 'E' };
                let (description, date) = rest
                    .rsplit_once(SAVE_SEPARATOR)
                    .ok_or(SaveFormatError::MissingDate(tag))?;
                let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
                    .map_err(|_| SaveFormatError::BadDate(date.to_string()))?;
                let kind = if tag == 'D' {
                    TaskKind::Deadline(date)
                } else {
                    TaskKind::Event(date)
                };
                (description, kind)
            }
            other => return Err(SaveFormatError::UnknownKind(other.to_string())),
        };

        if description.trim().is_empty() {
            return Err(SaveFormatError::BlankDescription);
        }

        Ok(Self {
            description: description.to_string(),
            status,
            kind,
        })
    }
}

/// Human form: `[T][X] description`, with ` (by: ..)` or ` (at: ..)` for dated tasks.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_done() { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.tag(), mark, self.description)?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline(date) => write!(f, " (by: {})", date.format(DATE_FORMAT)),
            TaskKind::Event(date) => write!(f, " (at: {})", date.format(DATE_FORMAT)),
        }
    }
}
