use crate::error::{QuizError, QuizResult};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum IdeKind {
    #[strum(to_string = "Android Studio", serialize = "android")]
    AndroidStudio,
    #[strum(to_string = "IntelliJ")]
    IntelliJ,
}

impl IdeKind {
    /// Only Android Studio publishes per-OS shortcut columns.
    pub fn requires_system(&self) -> bool {
        matches!(self, Self::AndroidStudio)
    }
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Level {
    Junior,
    Senior,
    Executive,
}

impl Level {
    pub fn rounds(&self) -> u32 {
        match self {
            Self::Junior => 1,
            Self::Senior => 2,
            Self::Executive => 3,
        }
    }

    pub fn questions(&self) -> u32 {
        self.rounds() * QUESTIONS_PER_ROUND
    }
}

pub const QUESTIONS_PER_ROUND: u32 = 2;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum System {
    Windows,
    Linux,
    Mac,
}

impl System {
    /// CSV column holding this system's shortcut text.
    pub fn column(&self) -> usize {
        match self {
            Self::Windows | Self::Linux => 1,
            Self::Mac => 2,
        }
    }
}

fn parse_choice<T: FromStr>(axis: &'static str, value: &str) -> QuizResult<T> {
    T::from_str(value.trim()).map_err(|_| QuizError::invalid_choice(axis, value))
}

pub fn validate_ide(value: &str) -> QuizResult<IdeKind> {
    parse_choice("IDE", value)
}

pub fn validate_level(value: &str) -> QuizResult<Level> {
    parse_choice("level", value)
}

pub fn validate_system(value: &str) -> QuizResult<System> {
    parse_choice("system", value)
}

/// `(rounds, questions)` for a level name.
pub fn quiz_settings(level: &str) -> QuizResult<(u32, u32)> {
    let level = validate_level(level)?;
    Ok((level.rounds(), level.questions()))
}
