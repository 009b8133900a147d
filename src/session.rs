use crate::choices::QUESTIONS_PER_ROUND;
use crate::error::{QuizError, QuizResult};
use crate::profile::Profile;
use crate::prompt::{Input, Prompt};
use crate::reports;
use crate::shortcuts::Command;
use tracing::debug;

pub const FAREWELL: &str = "You have ended the game. Bye bye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingTopic,
    /// 1-based question number within the round.
    AskingQuestion(u32),
    RoundComplete,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicChoice {
    Chosen(String),
    /// Input did not name a topic; a random one was used instead.
    Substituted(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Finished { correct: u32, total: u32 },
    Cancelled { correct: u32, asked: u32 },
}

impl GameOutcome {
    pub fn report(&self) -> String {
        match self {
            Self::Finished { correct, total } => {
                format!("Game over! You got {}/{} correct.", correct, total)
            }
            Self::Cancelled { .. } => FAREWELL.to_string(),
        }
    }
}

/// Lowercase with every whitespace character removed.
pub fn normalize_answer(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

pub fn is_correct(answer: &str, shortcut: &str) -> bool {
    normalize_answer(answer) == normalize_answer(shortcut)
}

pub fn question_for(task: &str) -> String {
    format!("What is the command for {}?", task)
}

pub struct GameSession {
    profile: Profile,
    rng: fastrand::Rng,
    state: SessionState,
    rounds_remaining: u32,
    topic: Option<String>,
    pending: Option<Command>,
    correct: u32,
    asked: u32,
}

impl GameSession {
    pub fn new(profile: Profile, rng: fastrand::Rng) -> Self {
        let rounds_remaining = profile.settings.rounds();
        let state = if rounds_remaining > 0 {
            SessionState::AwaitingTopic
        } else {
            SessionState::GameOver
        };
        Self {
            profile,
            rng,
            state,
            rounds_remaining,
            topic: None,
            pending: None,
            correct: 0,
            asked: 0,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn rounds_remaining(&self) -> u32 {
        self.rounds_remaining
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn asked(&self) -> u32 {
        self.asked
    }

    pub fn current_topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Starts a round. Unknown input falls back to a random topic, never an error.
    pub fn choose_topic(&mut self, input: &str) -> TopicChoice {
        let wanted = input.trim().to_lowercase();
        let topics = self.profile.topics();

        let choice = if topics.iter().any(|t| *t == wanted) {
            TopicChoice::Chosen(wanted)
        } else {
            TopicChoice::Substituted(topics[self.rng.usize(..topics.len())].clone())
        };

        let topic = match &choice {
            TopicChoice::Chosen(t) | TopicChoice::Substituted(t) => t.clone(),
        };
        debug!("Round topic: {}", topic);
        self.topic = Some(topic);
        self.state = SessionState::AskingQuestion(1);
        choice
    }

    /// Draws the next question from the round's topic. `None` outside a question step.
    pub fn next_question(&mut self) -> Option<Command> {
        if !matches!(self.state, SessionState::AskingQuestion(_)) {
            return None;
        }
        let topic = self.topic.as_deref()?;
        let cmd = self.profile.commands().pick_command(topic, &mut self.rng)?;
        self.pending = Some(cmd.clone());
        Some(cmd)
    }

    /// Scores an answer to the last drawn question. `None` if no question is pending.
    pub fn submit_answer(&mut self, answer: &str) -> Option<bool> {
        let n = match self.state {
            SessionState::AskingQuestion(n) => n,
            _ => return None,
        };
        let cmd = self.pending.take()?;

        let hit = is_correct(answer, &cmd.shortcut);
        self.asked += 1;
        if hit {
            self.correct += 1;
        }

        self.state = if n < QUESTIONS_PER_ROUND {
            SessionState::AskingQuestion(n + 1)
        } else {
            SessionState::RoundComplete
        };
        Some(hit)
    }

    pub fn finish_round(&mut self) {
        if self.state != SessionState::RoundComplete {
            return;
        }
        self.rounds_remaining = self.rounds_remaining.saturating_sub(1);
        self.topic = None;
        self.state = if self.rounds_remaining == 0 {
            SessionState::GameOver
        } else {
            SessionState::AwaitingTopic
        };
    }

    fn cancelled(&self) -> GameOutcome {
        GameOutcome::Cancelled {
            correct: self.correct,
            asked: self.asked,
        }
    }

    /// Plays every remaining round through `prompt`.
    pub fn run(&mut self, prompt: &mut dyn Prompt) -> QuizResult<GameOutcome> {
        loop {
            match self.state {
                SessionState::AwaitingTopic => {
                    prompt.say(&reports::render_topics(self.profile.topics()));
                    let line = match prompt.read_line("Choose a topic: ")? {
                        Input::Line(line) => line,
                        Input::Cancelled => return Ok(self.cancelled()),
                    };
                    if let TopicChoice::Substituted(topic) = self.choose_topic(&line) {
                        prompt.say(&format!("A random topic has been picked! It is: {}.", topic));
                    }
                }
                SessionState::AskingQuestion(_) => {
                    let cmd = self.next_question().ok_or_else(|| {
                        QuizError::NoShortcuts(self.profile.settings.ide.to_string())
                    })?;
                    prompt.say(&question_for(&cmd.task));
                    let line = match prompt.read_line("> ")? {
                        Input::Line(line) => line,
                        Input::Cancelled => return Ok(self.cancelled()),
                    };
                    if self.submit_answer(&line) == Some(true) {
                        prompt.say("You got it!");
                    } else {
                        prompt.say(&format!("Not quite. The answer was: {}", cmd.shortcut));
                    }
                }
                SessionState::RoundComplete => self.finish_round(),
                SessionState::GameOver => break,
            }
        }

        Ok(GameOutcome::Finished {
            correct: self.correct,
            total: self.profile.settings.questions(),
        })
    }
}
