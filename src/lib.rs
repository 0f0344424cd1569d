//! Job application copilot library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{CopilotError, Result};
pub use config::Config;
pub use processing::analyzer::CopilotAnalyzer;
pub use processing::keyword_bank::{KeywordBank, Term};
pub use processing::matcher::{KeywordMatcher, MatchResult};
