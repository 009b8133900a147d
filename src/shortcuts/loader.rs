use super::{ShortcutTable, TopicCommands};
use crate::choices::System;
use crate::error::{QuizError, QuizResult};
use csv::StringRecord;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Column shape of the rows following a file's topic row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// `task,shortcut`; both lowercased.
    TaskShortcut,
    /// `task,windows/linux,mac`; task kept verbatim, chosen column lowercased.
    PerSystem(System),
}

impl TableLayout {
    pub fn width(&self) -> usize {
        match self {
            Self::TaskShortcut => 2,
            Self::PerSystem(_) => 3,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ShortcutRow {
    task: String,
    shortcut: String,
}

#[derive(Debug, Deserialize)]
struct SystemShortcutRow {
    task: String,
    windows_linux: String,
    mac: String,
}

impl SystemShortcutRow {
    fn into_command(self, system: System) -> (String, String) {
        let shortcut = match system {
            System::Windows | System::Linux => self.windows_linux,
            System::Mac => self.mac,
        };
        (self.task, shortcut.to_lowercase())
    }
}

#[derive(Debug, Clone)]
pub struct TopicFile {
    pub path: PathBuf,
    pub topic: String,
    pub commands: TopicCommands,
    pub rows: usize,
}

/// True iff `dir` holds at least one regular file, at any depth.
pub fn has_local_data<P: AsRef<Path>>(dir: P) -> bool {
    WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .any(|e| e.file_type().is_file())
}

/// All regular files under `dir`, sorted by path so enumeration order is stable.
pub fn list_data_files<P: AsRef<Path>>(dir: P) -> QuizResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| QuizError::Io(e.into()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn row_number(rec: &StringRecord) -> u64 {
    rec.position().map(|p| p.line()).unwrap_or(0)
}

/// Keeps the file and row of CSV syntax and encoding errors.
fn csv_error(path: &Path, e: csv::Error) -> QuizError {
    match e.position() {
        Some(pos) => QuizError::data_format(path, pos.line(), e.to_string()),
        None => e.into(),
    }
}

/// Reads one topic file. Returns `None` for a zero-byte file, which declares no topic.
pub fn load_topic_file<P: AsRef<Path>>(path: P, layout: TableLayout) -> QuizResult<Option<TopicFile>> {
    let path = path.as_ref();
    if fs::metadata(path)?.len() == 0 {
        return Ok(None);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = rdr.records();
    let header = match records.next() {
        Some(rec) => rec.map_err(|e| csv_error(path, e))?,
        None => return Ok(None),
    };

    let topic = header
        .get(0)
        .map(|s| s.to_lowercase())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| QuizError::data_format(path, row_number(&header), "missing topic name"))?;

    let mut commands = TopicCommands::new();
    let mut rows = 0;

    for result in records {
        let rec = result.map_err(|e| csv_error(path, e))?;
        let line = row_number(&rec);
        if rec.len() != layout.width() {
            return Err(QuizError::data_format(
                path,
                line,
                format!("expected {} columns, found {}", layout.width(), rec.len()),
            ));
        }

        let (task, shortcut) = match layout {
            TableLayout::TaskShortcut => {
                let row: ShortcutRow = rec.deserialize(None).map_err(|e| csv_error(path, e))?;
                (row.task.to_lowercase(), row.shortcut.to_lowercase())
            }
            TableLayout::PerSystem(system) => {
                let row: SystemShortcutRow =
                    rec.deserialize(None).map_err(|e| csv_error(path, e))?;
                row.into_command(system)
            }
        };

        if task.is_empty() {
            return Err(QuizError::data_format(path, line, "empty task"));
        }
        commands.insert(task, shortcut);
        rows += 1;
    }

    debug!("   -> '{}': {} rows from {}", topic, rows, path.display());

    Ok(Some(TopicFile {
        path: path.to_path_buf(),
        topic,
        commands,
        rows,
    }))
}

/// Builds the topic table for a data folder.
///
/// With `declared` topics, every file must name one of them, each exactly once, and the
/// file count (zero-byte files included) must match; the table then follows the declared
/// order and a declared topic no file names is kept with no commands. Without, topics are
/// discovered in file order and zero-byte files are skipped.
pub fn load_table<P: AsRef<Path>>(
    dir: P,
    layout: TableLayout,
    declared: Option<&[&str]>,
) -> QuizResult<ShortcutTable> {
    let dir = dir.as_ref();
    info!("📂 Loading shortcuts from: {}", dir.display());

    let mut loaded = Vec::new();
    let mut empty_files = 0;
    for path in list_data_files(dir)? {
        match load_topic_file(&path, layout)? {
            Some(file) => loaded.push(file),
            None => {
                warn!("Skipping empty file {}", path.display());
                empty_files += 1;
            }
        }
    }

    let mut table = ShortcutTable::new();

    match declared {
        None => {
            for file in loaded {
                if !table.insert_topic(file.topic.clone(), file.commands) {
                    return Err(QuizError::data_format(
                        &file.path,
                        1,
                        format!("topic '{}' appears in more than one file", file.topic),
                    ));
                }
            }
        }
        Some(topics) => {
            if loaded.len() + empty_files != topics.len() {
                return Err(QuizError::data_format(
                    dir,
                    0,
                    format!(
                        "found {} topic files but {} topics are declared",
                        loaded.len() + empty_files,
                        topics.len()
                    ),
                ));
            }

            let mut by_topic: HashMap<String, TopicFile> = HashMap::new();
            for file in loaded {
                if !topics.contains(&file.topic.as_str()) {
                    return Err(QuizError::data_format(
                        &file.path,
                        1,
                        format!("unknown topic '{}'", file.topic),
                    ));
                }
                if let Some(prev) = by_topic.insert(file.topic.clone(), file) {
                    return Err(QuizError::data_format(
                        &prev.path,
                        1,
                        format!("topic '{}' appears in more than one file", prev.topic),
                    ));
                }
            }

            for topic in topics {
                let commands = match by_topic.remove(*topic) {
                    Some(file) => file.commands,
                    None => TopicCommands::new(),
                };
                table.insert_topic(topic.to_string(), commands);
            }
        }
    }

    info!("📊 Loaded {} topics.", table.len());
    Ok(table)
}
