use crate::choices::{validate_ide, validate_level, validate_system, IdeKind, Level, System};
use crate::config::DataConfig;
use crate::error::{QuizError, QuizResult};
use crate::fetch::Fetcher;
use crate::shortcuts::ide::{ide_for, load_commands};
use crate::shortcuts::ShortcutTable;
use tracing::{debug, warn};

/// Fully validated game choices. `system` is set iff the IDE needs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub ide: IdeKind,
    pub level: Level,
    /// Level as the user typed it.
    pub level_label: String,
    pub system: Option<System>,
}

impl GameSettings {
    pub fn new(ide: &str, level: &str, system: Option<&str>) -> QuizResult<Self> {
        let ide = validate_ide(ide)?;
        let parsed_level = validate_level(level)?;
        let system = match system {
            Some(s) => Some(validate_system(s)?),
            None => None,
        };
        let mut settings = Self::from_choices(ide, parsed_level, system)?;
        settings.level_label = level.to_string();
        Ok(settings)
    }

    pub fn from_choices(ide: IdeKind, level: Level, system: Option<System>) -> QuizResult<Self> {
        let system = if ide.requires_system() {
            match system {
                Some(s) => Some(s),
                None => {
                    return Err(QuizError::InvalidCommandLineUsage(format!(
                        "A system (windows, linux or mac) is required for {}",
                        ide
                    )))
                }
            }
        } else {
            if let Some(s) = system {
                debug!("Ignoring system '{}' for {}", s, ide);
            }
            None
        };

        Ok(Self {
            ide,
            level,
            level_label: level.to_string(),
            system,
        })
    }

    pub fn rounds(&self) -> u32 {
        self.level.rounds()
    }

    pub fn questions(&self) -> u32 {
        self.level.questions()
    }
}

/// Settings plus the loaded shortcut table for one game.
#[derive(Debug, Clone)]
pub struct Profile {
    pub settings: GameSettings,
    topics: Vec<String>,
    commands: ShortcutTable,
}

impl Profile {
    pub fn load(settings: GameSettings, config: &DataConfig, fetcher: &dyn Fetcher) -> QuizResult<Self> {
        let ide = ide_for(settings.ide, settings.system);
        let table = load_commands(ide.as_ref(), &config.data_dir, fetcher)?;
        Self::from_table(settings, table)
    }

    /// Drops topics with no commands so they can never be picked.
    pub fn from_table(settings: GameSettings, commands: ShortcutTable) -> QuizResult<Self> {
        let topics = commands.selectable_topics();
        for topic in commands.topics() {
            if !topics.contains(topic) {
                warn!("Topic '{}' has no shortcuts; hiding it.", topic);
            }
        }
        if topics.is_empty() {
            return Err(QuizError::NoShortcuts(settings.ide.to_string()));
        }

        Ok(Self {
            settings,
            topics,
            commands,
        })
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn commands(&self) -> &ShortcutTable {
        &self.commands
    }
}
