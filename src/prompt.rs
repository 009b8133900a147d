use crate::choices::{validate_ide, validate_level, validate_system, IdeKind, Level, System};
use crate::error::{QuizError, QuizResult};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl+C, Ctrl+D or end of input.
    Cancelled,
}

/// Line-based conversation with the player.
pub trait Prompt {
    fn read_line(&mut self, prompt: &str) -> QuizResult<Input>;
    fn say(&mut self, text: &str);
}

pub struct TerminalPrompt {
    editor: DefaultEditor,
}

impl TerminalPrompt {
    pub fn new() -> QuizResult<Self> {
        let editor = DefaultEditor::new().map_err(|e| QuizError::Readline(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> QuizResult<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(Input::Cancelled),
            Err(e) => Err(QuizError::Readline(e.to_string())),
        }
    }

    fn say(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Replays canned answers and records everything shown. Running out of answers
/// reads as a cancellation.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    inputs: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> QuizResult<Input> {
        self.transcript.push(prompt.to_string());
        Ok(match self.inputs.pop_front() {
            Some(line) => Input::Line(line),
            None => Input::Cancelled,
        })
    }

    fn say(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}

/// Re-asks until `validate` accepts, returning the value and the line it came from.
/// `None` means the player cancelled.
fn ask_until_valid<T>(
    prompt: &mut dyn Prompt,
    question: &str,
    validate: fn(&str) -> QuizResult<T>,
) -> QuizResult<Option<(T, String)>> {
    loop {
        let line = match prompt.read_line(question)? {
            Input::Line(line) => line,
            Input::Cancelled => return Ok(None),
        };
        match validate(&line) {
            Ok(value) => return Ok(Some((value, line.trim().to_string()))),
            Err(e @ QuizError::InvalidChoice { .. }) => prompt.say(&e.to_string()),
            Err(e) => return Err(e),
        }
    }
}

pub fn ask_ide(prompt: &mut dyn Prompt) -> QuizResult<Option<IdeKind>> {
    ask_until_valid(
        prompt,
        "Which of the following IDEs would you like to be tested on? Android Studio or IntelliJ? ",
        validate_ide,
    )
    .map(|answer| answer.map(|(ide, _)| ide))
}

/// The level plus its name as the player typed it.
pub fn ask_level(prompt: &mut dyn Prompt) -> QuizResult<Option<(Level, String)>> {
    let levels: Vec<String> = Level::iter()
        .map(|l| {
            let n = l.rounds();
            format!("{} ({} round{})", l, n, if n == 1 { "" } else { "s" })
        })
        .collect();
    prompt.say(&format!("There are three game levels: {}.", levels.join(", ")));
    ask_until_valid(prompt, "Please pick a level: ", validate_level)
}

pub fn ask_system(prompt: &mut dyn Prompt) -> QuizResult<Option<System>> {
    let systems: Vec<String> = System::iter().map(|s| s.to_string()).collect();
    ask_until_valid(
        prompt,
        &format!(
            "Which system would you like to be tested on? {}? ",
            systems.join(", ")
        ),
        validate_system,
    )
    .map(|answer| answer.map(|(system, _)| system))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retries_until_valid() {
        let mut p = ScriptedPrompt::new(["cheerios", "1234", "IntelliJ"]);
        assert_eq!(ask_ide(&mut p).unwrap(), Some(IdeKind::IntelliJ));
        assert_eq!(p.output().matches("Invalid IDE").count(), 2);
    }

    #[test]
    fn test_running_out_of_input_cancels() {
        let mut p = ScriptedPrompt::new(["pink panther"]);
        assert_eq!(ask_level(&mut p).unwrap(), None);
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn test_level_keeps_typed_case() {
        let mut p = ScriptedPrompt::new(["  SeNiOr "]);
        assert_eq!(
            ask_level(&mut p).unwrap(),
            Some((Level::Senior, "SeNiOr".to_string()))
        );
    }

    #[test]
    fn test_system_prompt_lists_choices() {
        let mut p = ScriptedPrompt::new(["MAC"]);
        assert_eq!(ask_system(&mut p).unwrap(), Some(System::Mac));
        assert!(p.output().contains("Windows, Linux, Mac"));
    }
}
