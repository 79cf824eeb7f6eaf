use crate::config::DeckConfig;
use crate::model::{Candidate, CreatureId, DisplayRecord};
use std::path::PathBuf;

pub mod config;
pub mod confirm;
pub mod refresh;
pub mod remove;
pub mod search;
pub mod visibility;

#[derive(Debug, Clone)]
pub struct DeckPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_ids: Vec<CreatureId>,
    pub listed: Vec<DisplayRecord>,
    pub candidate: Option<Candidate>,
    pub config: Option<DeckConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_candidate(mut self, candidate: Option<Candidate>) -> Self {
        self.candidate = candidate;
        self
    }

    pub fn with_config(mut self, config: DeckConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Fold a follow-up result into this one. Messages and affected ids
    /// accumulate; listed records and candidate reflect the later state.
    pub fn merge(mut self, later: CmdResult) -> Self {
        self.affected_ids.extend(later.affected_ids);
        self.messages.extend(later.messages);
        self.listed = later.listed;
        self.candidate = later.candidate;
        if later.config.is_some() {
            self.config = later.config;
        }
        self
    }
}

/// `#25 pikachu` style label used in notices.
pub(crate) fn label(id: CreatureId, name: &str) -> String {
    format!("#{} {}", id, name)
}
