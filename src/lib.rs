pub mod choices;
pub mod config;
pub mod error;
pub mod fetch;
pub mod profile;
pub mod prompt;
pub mod reports;
pub mod session;
pub mod shortcuts;
