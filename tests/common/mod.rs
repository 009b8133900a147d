#![allow(dead_code)]

use shortcut_quiz::error::{QuizError, QuizResult};
use shortcut_quiz::fetch::Fetcher;
use shortcut_quiz::shortcuts::ide::{Ide, INTELLIJ_TOPICS};
use std::cell::Cell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ANDROID_DIR: &str = "android_studio_shortcut_csvs";
pub const INTELLIJ_DIR: &str = "intellij_shortcut_csvs";

pub fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
    path
}

/// Data root with three Android Studio topics. "general" has a single command so games
/// that always pick it have a known answer.
pub fn android_fixture() -> TempDir {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let dir = root.path().join(ANDROID_DIR);
    write_csv(
        &dir,
        "android_shortcuts00.csv",
        &["General,General,General", "Save all,Control+S,Command+S"],
    );
    write_csv(
        &dir,
        "android_shortcuts01.csv",
        &[
            "Navigating and searching within Studio,Navigating and searching within Studio,Navigating and searching within Studio",
            "Search everything,Double Shift,Double Shift",
            "Find,Control+F,Command+F",
            "Find next,F3,Command+G",
        ],
    );
    write_csv(
        &dir,
        "android_shortcuts02.csv",
        &[
            "Writing code,Writing code,Writing code",
            "Generate code,Alt+Insert,Command+N",
            "Override methods,Control+O,Control+O",
        ],
    );
    root
}

/// Data root with one file per declared IntelliJ topic, two commands each.
pub fn intellij_fixture() -> TempDir {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let dir = root.path().join(INTELLIJ_DIR);
    for (i, topic) in INTELLIJ_TOPICS.iter().enumerate() {
        let header = format!("{},{}", topic, topic);
        let a = format!("First {} Action,Ctrl+{}", topic, i);
        let b = format!("Second {} Action,Ctrl+Shift+{}", topic, i);
        write_csv(
            &dir,
            &format!("intellij{:02}.csv", i),
            &[header.as_str(), a.as_str(), b.as_str()],
        );
    }
    root
}

/// Counts calls and writes nothing.
#[derive(Default)]
pub struct CountingFetcher {
    pub calls: Cell<usize>,
}

impl Fetcher for CountingFetcher {
    fn populate(&self, _ide: &dyn Ide, _target: &Path) -> QuizResult<()> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

/// Fails like an unreachable network.
pub struct OfflineFetcher;

impl Fetcher for OfflineFetcher {
    fn populate(&self, _ide: &dyn Ide, _target: &Path) -> QuizResult<()> {
        Err(QuizError::Fetch("offline".to_string()))
    }
}
