mod common;

use common::*;
use shortcut_quiz::config::DataConfig;
use shortcut_quiz::profile::{GameSettings, Profile};
use shortcut_quiz::prompt::ScriptedPrompt;
use shortcut_quiz::session::{GameOutcome, GameSession, SessionState};
use tempfile::TempDir;

fn android_session(level: &str, system: &str, seed: u64) -> (TempDir, GameSession) {
    let root = android_fixture();
    let config = DataConfig {
        data_dir: root.path().to_path_buf(),
        seed: Some(seed),
    };
    let settings = GameSettings::new("android", level, Some(system)).unwrap();
    let profile = Profile::load(settings, &config, &OfflineFetcher).unwrap();
    (root, GameSession::new(profile, config.rng()))
}

/// Every round picks "general", whose only task is "Save all".
fn general_rounds(rounds: usize, answer: &str) -> Vec<String> {
    let mut inputs = Vec::new();
    for _ in 0..rounds {
        inputs.push("General".to_string());
        inputs.push(answer.to_string());
        inputs.push(answer.to_string());
    }
    inputs
}

#[test]
fn test_junior_plays_one_round_of_two() {
    let (_root, mut session) = android_session("junior", "windows", 1);
    assert_eq!(session.rounds_remaining(), 1);

    let mut prompt = ScriptedPrompt::new(general_rounds(1, " Control + S "));
    let outcome = session.run(&mut prompt).unwrap();

    assert_eq!(outcome, GameOutcome::Finished { correct: 2, total: 2 });
    assert_eq!(outcome.report(), "Game over! You got 2/2 correct.");
    assert_eq!(session.state(), SessionState::GameOver);
    assert_eq!(session.asked(), 2);
    assert_eq!(prompt.output().matches("What is the command for Save all?").count(), 2);
}

#[test]
fn test_executive_plays_three_rounds_of_two() {
    let (_root, mut session) = android_session("Executive", "mac", 2);
    let mut prompt = ScriptedPrompt::new(general_rounds(3, "command+s"));
    let outcome = session.run(&mut prompt).unwrap();

    assert_eq!(outcome, GameOutcome::Finished { correct: 6, total: 6 });
    assert_eq!(prompt.remaining(), 0);
    assert_eq!(prompt.output().matches("Choose a topic").count(), 3);
}

#[test]
fn test_wrong_answers_reveal_shortcut() {
    let (_root, mut session) = android_session("senior", "linux", 3);
    let mut prompt = ScriptedPrompt::new(general_rounds(2, "ctrl+s"));
    let outcome = session.run(&mut prompt).unwrap();

    assert_eq!(outcome.report(), "Game over! You got 0/4 correct.");
    assert_eq!(
        prompt.output().matches("Not quite. The answer was: control+s").count(),
        4
    );
}

#[test]
fn test_unknown_topic_falls_back_to_random() {
    let (_root, mut session) = android_session("junior", "mac", 4);
    let mut prompt = ScriptedPrompt::new(["rainbow trout", "x", "y"]);
    let outcome = session.run(&mut prompt).unwrap();

    assert!(matches!(outcome, GameOutcome::Finished { total: 2, .. }));
    assert!(prompt.output().contains("A random topic has been picked! It is: "));
    let topic = prompt
        .output()
        .lines()
        .find_map(|l| l.strip_prefix("A random topic has been picked! It is: "))
        .map(|t| t.trim_end_matches('.').to_string())
        .unwrap();
    assert!(session.profile().topics().contains(&topic));
}

#[test]
fn test_topics_are_shown_every_round() {
    let (_root, mut session) = android_session("senior", "windows", 5);
    let mut prompt = ScriptedPrompt::new(general_rounds(2, "control+s"));
    session.run(&mut prompt).unwrap();
    assert_eq!(prompt.output().matches("Writing Code").count(), 2);
}

#[test]
fn test_same_seed_same_questions() {
    let play = |seed| {
        let (_root, mut session) = android_session("executive", "windows", seed);
        let mut prompt = ScriptedPrompt::new(vec!["Navigating and searching within Studio"; 9]);
        session.run(&mut prompt).unwrap();
        prompt.output()
    };
    assert_eq!(play(11), play(11));
}

#[test]
fn test_end_of_input_cancels_cleanly() {
    let (_root, mut session) = android_session("senior", "windows", 6);
    let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
    let outcome = session.run(&mut prompt).unwrap();
    assert_eq!(outcome, GameOutcome::Cancelled { correct: 0, asked: 0 });
}

#[test]
fn test_intellij_game_from_declared_topics() {
    let root = intellij_fixture();
    let config = DataConfig {
        data_dir: root.path().to_path_buf(),
        seed: Some(7),
    };
    let settings = GameSettings::new("IntelliJ", "junior", None).unwrap();
    let profile = Profile::load(settings, &config, &OfflineFetcher).unwrap();
    assert_eq!(profile.topics().len(), 17);

    let mut session = GameSession::new(profile, config.rng());
    let mut prompt = ScriptedPrompt::new(["code folding", "ctrl+5", "ctrl + shift + 5"]);
    let outcome = session.run(&mut prompt).unwrap();
    assert!(matches!(outcome, GameOutcome::Finished { total: 2, .. }));
    assert!(prompt.output().contains("What is the command for first code folding action?")
        || prompt.output().contains("What is the command for second code folding action?"));
}
