//! # Command Layer
//!
//! Business logic for every user action. Each function takes the record store
//! and the detail state it may change, and returns a [`CmdResult`]. Nothing here
//! prints, prompts on its own, or knows about terminals; confirmation goes
//! through the [`Confirm`](crate::confirm::Confirm) collaborator.
//!
//! - [`view`]: show a record, return to the empty pane
//! - [`form`]: open add/edit forms, edit draft values, save, cancel
//! - [`remove`]: confirmed deletion

use crate::form::FieldErrors;
use crate::model::UserRecord;
use serde::Serialize;

pub mod form;
pub mod remove;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
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
}

/// A record touched by a command, with its position at the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffectedRecord {
    pub index: usize,
    pub record: UserRecord,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<AffectedRecord>,
    pub messages: Vec<CmdMessage>,
    /// Set when a save was refused by validation. The form stays open.
    pub rejected: Option<FieldErrors>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, index: usize, record: UserRecord) -> Self {
        self.affected.push(AffectedRecord { index, record });
        self
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected.is_some()
    }
}
