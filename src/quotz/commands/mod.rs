use crate::config::QuotzConfig;
use crate::model::Quote;

pub mod add;
pub mod categories;
pub mod config;
pub mod export;
pub mod filter;
pub mod import;
pub mod list;
pub mod show;
pub mod sync;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result of a command: data for the CLI to render plus the
/// notification messages to print. Commands never touch stdout themselves.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_quotes: Vec<Quote>,
    pub categories: Vec<String>,
    pub picked: Option<Quote>,
    pub config: Option<QuotzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.listed_quotes = quotes;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_picked(mut self, quote: Quote) -> Self {
        self.picked = Some(quote);
        self
    }

    pub fn with_config(mut self, config: QuotzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
