use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::task::Task;
use crate::todolist::{TodoList, MAX_TASKS};

pub fn default_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "todo-shell", "todo-shell")
        .ok_or_else(|| anyhow!("Cannot determine data directory"))?;
    let dir = proj.data_dir().to_path_buf();
    Ok(dir.join("tasks.txt"))
}

/// Reads a save file, one task per line. A missing file is an empty list.
pub fn load(path: &Path) -> Result<TodoList> {
    if !path.exists() {
        debug!(path = %path.display(), "no save file yet");
        return Ok(TodoList::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut list = TodoList::default();
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let task = Task::from_save_line(line)
            .with_context(|| format!("{}:{}: corrupt task line", path.display(), n + 1))?;
        if list.add(task).is_err() {
            warn!(path = %path.display(), "save file holds more than {MAX_TASKS} tasks");
            bail!("{}: more than {MAX_TASKS} tasks", path.display());
        }
    }
    debug!(path = %path.display(), total = list.total(), "loaded tasks");
    Ok(list)
}

/// Writes the list through a temporary file so a crash never leaves a
/// half-written save behind.
pub fn save(path: &Path, list: &TodoList) -> Result<()> {
    let tmp = path.with_extension("txt.tmp");
    let mut text = String::new();
    for task in &list.items {
        text.push_str(&task.save_string());
        text.push('\n');
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&tmp, text).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("failed to replace {}", path.display()))?;
    debug!(path = %path.display(), total = list.total(), "saved tasks");
    Ok(())
}
