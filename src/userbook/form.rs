//! # Detail Region State
//!
//! The detail region shows at most one thing: nothing, a read-only record, or a
//! form. [`DetailState`] is that value. It is owned by the API facade and only
//! changed by the command layer; renderers read it and never mutate it.
//!
//! ```text
//!             view(i)                 edit(i)
//!   Empty ───────────► Viewing(i) ◄──────────── cancel ── Editing(i)
//!     ▲  ◄── return ───┘                                      │
//!     │                                                       │ save (valid)
//!     ├──────────────────────────────────────────────────────┘
//!     │        add                save (valid) / cancel
//!     └──────────► Adding ─────────────────────────► Empty
//! ```
//!
//! Entering any state replaces what was shown before. A failed save keeps the
//! form open with its annotations.

use crate::model::{Field, UserRecord};
use std::collections::BTreeMap;

/// In-progress values of an open form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    values: UserRecord,
}

impl Draft {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            values: record.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// The record that gets stored on a successful save: every value trimmed,
    /// matching what the validators saw.
    pub fn to_record(&self) -> UserRecord {
        let mut record = UserRecord::default();
        for field in Field::ALL {
            record.set(field, self.get(field).trim());
        }
        record
    }
}

/// Per-field error annotations of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn clear(&mut self, field: Field) {
        self.messages.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Annotations in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Empty,
    Viewing {
        index: usize,
    },
    Editing {
        index: usize,
        draft: Draft,
        errors: FieldErrors,
    },
    Adding {
        draft: Draft,
        errors: FieldErrors,
    },
}

impl DetailState {
    pub fn name(&self) -> &'static str {
        match self {
            DetailState::Empty => "empty",
            DetailState::Viewing { .. } => "viewing",
            DetailState::Editing { .. } => "editing",
            DetailState::Adding { .. } => "adding",
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(self, DetailState::Editing { .. } | DetailState::Adding { .. })
    }

    /// Draft and annotations of the open form, if any.
    pub fn form_mut(&mut self) -> Option<(&mut Draft, &mut FieldErrors)> {
        match self {
            DetailState::Editing { draft, errors, .. } | DetailState::Adding { draft, errors } => {
                Some((draft, errors))
            }
            _ => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            DetailState::Editing { errors, .. } | DetailState::Adding { errors, .. } => {
                Some(errors)
            }
            _ => None,
        }
    }
}
