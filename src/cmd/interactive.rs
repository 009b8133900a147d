use shortcut_quiz::error::QuizResult;
use shortcut_quiz::profile::GameSettings;
use shortcut_quiz::prompt::{ask_ide, ask_level, ask_system, Prompt};

/// Asks for IDE, level and (when needed) system. `None` if the player cancelled.
pub fn settings(prompt: &mut dyn Prompt) -> QuizResult<Option<GameSettings>> {
    let Some(ide) = ask_ide(prompt)? else {
        return Ok(None);
    };
    let Some((level, label)) = ask_level(prompt)? else {
        return Ok(None);
    };
    let system = if ide.requires_system() {
        match ask_system(prompt)? {
            Some(s) => Some(s),
            None => return Ok(None),
        }
    } else {
        None
    };

    let mut settings = GameSettings::from_choices(ide, level, system)?;
    settings.level_label = label;
    Ok(Some(settings))
}
