use super::loader::{has_local_data, load_table, TableLayout};
use super::ShortcutTable;
use crate::choices::{IdeKind, System};
use crate::error::QuizResult;
use crate::fetch::Fetcher;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const INTELLIJ_TOPICS: &[&str] = &[
    "top shortcuts",
    "build projects",
    "basic editing",
    "caret navigation",
    "select text",
    "code folding",
    "multiple carets and selection ranges",
    "coding assistance",
    "context navigation",
    "find everything",
    "navigate from symbols",
    "code analysis",
    "run and debug",
    "refactorings",
    "global vcs actions",
    "differences viewer",
    "tool windows",
];

/// Shape shared by the quizzable IDEs: where their data lives and how to read it.
pub trait Ide {
    fn kind(&self) -> IdeKind;

    /// Folder under the data root holding this IDE's CSV files.
    fn directory_name(&self) -> &'static str;

    /// File name stem for fetched files (`<prefix>NN.csv`).
    fn file_prefix(&self) -> &'static str;

    /// Public page the shortcut tables are scraped from.
    fn reference_url(&self) -> &'static str;

    fn layout(&self) -> TableLayout;

    /// Fixed topic list, if the IDE has one. `None` means topics are discovered from the files.
    fn declared_topics(&self) -> Option<&'static [&'static str]> {
        None
    }

    fn data_directory(&self, root: &Path) -> PathBuf {
        root.join(self.directory_name())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntelliJ;

impl Ide for IntelliJ {
    fn kind(&self) -> IdeKind {
        IdeKind::IntelliJ
    }

    fn directory_name(&self) -> &'static str {
        "intellij_shortcut_csvs"
    }

    fn file_prefix(&self) -> &'static str {
        "intellij"
    }

    fn reference_url(&self) -> &'static str {
        "https://www.jetbrains.com/help/idea/reference-keymap-win-default.html"
    }

    fn layout(&self) -> TableLayout {
        TableLayout::TaskShortcut
    }

    fn declared_topics(&self) -> Option<&'static [&'static str]> {
        Some(INTELLIJ_TOPICS)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AndroidStudio {
    pub system: System,
}

impl Ide for AndroidStudio {
    fn kind(&self) -> IdeKind {
        IdeKind::AndroidStudio
    }

    fn directory_name(&self) -> &'static str {
        "android_studio_shortcut_csvs"
    }

    fn file_prefix(&self) -> &'static str {
        "android_shortcuts"
    }

    fn reference_url(&self) -> &'static str {
        "https://developer.android.com/studio/intro/keyboard-shortcuts"
    }

    fn layout(&self) -> TableLayout {
        TableLayout::PerSystem(self.system)
    }
}

/// Picks the IDE implementation for a validated choice. Android Studio falls back to the
/// Windows/Linux column when no system is given.
pub fn ide_for(kind: IdeKind, system: Option<System>) -> Box<dyn Ide> {
    match kind {
        IdeKind::IntelliJ => Box::new(IntelliJ),
        IdeKind::AndroidStudio => Box::new(AndroidStudio {
            system: system.unwrap_or(System::Windows),
        }),
    }
}

/// Runs the fetcher when `dir` holds no files yet.
pub fn ensure_data_present(ide: &dyn Ide, dir: &Path, fetcher: &dyn Fetcher) -> QuizResult<()> {
    if has_local_data(dir) {
        return Ok(());
    }

    info!("🌐 No local {} shortcuts in {}; fetching.", ide.kind(), dir.display());
    fs::create_dir_all(dir)?;
    fetcher.populate(ide, dir)
}

/// Ensures data exists under `root`, then builds the IDE's table.
pub fn load_commands(ide: &dyn Ide, root: &Path, fetcher: &dyn Fetcher) -> QuizResult<ShortcutTable> {
    let dir = ide.data_directory(root);
    ensure_data_present(ide, &dir, fetcher)?;
    load_table(&dir, ide.layout(), ide.declared_topics())
}
