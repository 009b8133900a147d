use shortcut_quiz::choices::validate_ide;
use shortcut_quiz::error::{QuizError, QuizResult};
use shortcut_quiz::profile::GameSettings;

/// Validates `<IDE> <LEVEL> [-s SYSTEM]` before anything is loaded.
pub fn settings(ide: &str, level: &str, system: Option<&str>) -> QuizResult<GameSettings> {
    let kind = validate_ide(ide)?;
    if kind.requires_system() && system.is_none() {
        return Err(QuizError::InvalidCommandLineUsage(format!(
            "{} needs a system: shortcut-quiz -s <windows|linux|mac> {} {}",
            kind, ide, level
        )));
    }
    GameSettings::new(ide, level, system)
}
