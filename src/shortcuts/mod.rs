pub mod ide;
pub mod loader;

use std::collections::{BTreeMap, HashMap};

/// task -> shortcut for a single topic.
pub type TopicCommands = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub task: String,
    pub shortcut: String,
}

/// Topic -> (task -> shortcut), keeping the order topics were added in.
#[derive(Debug, Clone, Default)]
pub struct ShortcutTable {
    topics: Vec<String>,
    commands: HashMap<String, TopicCommands>,
}

impl ShortcutTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false (and leaves the table untouched) if the topic already exists.
    pub fn insert_topic(&mut self, topic: String, commands: TopicCommands) -> bool {
        if self.commands.contains_key(&topic) {
            return false;
        }
        self.topics.push(topic.clone());
        self.commands.insert(topic, commands);
        true
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn commands(&self, topic: &str) -> Option<&TopicCommands> {
        self.commands.get(topic)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TopicCommands)> {
        self.topics
            .iter()
            .filter_map(|t| self.commands.get(t).map(|c| (t.as_str(), c)))
    }

    /// Topics that have at least one command. Only these may be offered to a player.
    pub fn selectable_topics(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, cmds)| !cmds.is_empty())
            .map(|(t, _)| t.to_string())
            .collect()
    }

    /// Uniformly random command from a topic, `None` if the topic is unknown or empty.
    pub fn pick_command(&self, topic: &str, rng: &mut fastrand::Rng) -> Option<Command> {
        let cmds = self.commands.get(topic)?;
        if cmds.is_empty() {
            return None;
        }
        cmds.iter()
            .nth(rng.usize(..cmds.len()))
            .map(|(task, shortcut)| Command {
                task: task.clone(),
                shortcut: shortcut.clone(),
            })
    }
}
