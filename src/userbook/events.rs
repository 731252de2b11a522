//! # Events
//!
//! Every user interaction arrives as one [`Event`]. The list region reports
//! clicks as a single delegated event carrying the control's role and the row
//! position it was tagged with; form controls (save, cancel, field input) only
//! mean something while a form is open. [`UserbookApi::dispatch`] routes each
//! event to the command layer.
//!
//! [`UserbookApi::dispatch`]: crate::api::UserbookApi::dispatch

use crate::model::Field;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Role of a per-row control in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    View,
    Edit,
    Remove,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [RowAction::View, RowAction::Edit, RowAction::Remove];

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Remove => "Remove",
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowAction::View => f.write_str("view"),
            RowAction::Edit => f.write_str("edit"),
            RowAction::Remove => f.write_str("remove"),
        }
    }
}

impl FromStr for RowAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(RowAction::View),
            "edit" => Ok(RowAction::Edit),
            "remove" => Ok(RowAction::Remove),
            other => Err(format!("Unknown row action '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The top-level "add" control.
    AddClicked,
    /// A control inside a list row.
    RowClicked { action: RowAction, index: usize },
    /// The "return" control of the read-only view.
    Return,
    /// A form input changed.
    Input { field: Field, value: String },
    Save,
    Cancel,
}
