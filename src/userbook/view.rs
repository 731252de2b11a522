//! # Screen Projection
//!
//! A [`Screen`] is everything a UI needs to draw: the list region and the detail
//! region. It is computed from the record store and the detail state and holds
//! no state of its own, so any UI can be rebuilt from it at any time.
//!
//! The structs are `Serialize` so they can feed templates directly or be emitted
//! as JSON.

use crate::error::Result;
use crate::events::RowAction;
use crate::form::DetailState;
use crate::index::display_number;
use crate::model::{Field, InputKind, UserRecord};
use crate::store::{RecordStore, StorageBackend};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub list: ListView,
    pub detail: DetailView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub rows: Vec<RowView>,
}

/// One list row. `index` is the position every action is tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub index: usize,
    pub number: usize,
    pub name: String,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValue {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub input_kind: InputKind,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Add,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    Empty,
    Details {
        index: usize,
        number: usize,
        title: &'static str,
        fields: Vec<FieldValue>,
    },
    Form {
        mode: FormMode,
        index: Option<usize>,
        title: &'static str,
        submit_label: &'static str,
        fields: Vec<FormField>,
    },
}

impl ListView {
    pub fn project(records: &[UserRecord]) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| RowView {
                index,
                number: display_number(index),
                name: record.name.clone(),
                actions: RowAction::ALL.to_vec(),
            })
            .collect();
        Self { rows }
    }
}

impl DetailView {
    pub fn project<B: StorageBackend>(store: &RecordStore<B>, detail: &DetailState) -> Result<Self> {
        let view = match detail {
            DetailState::Empty => DetailView::Empty,
            DetailState::Viewing { index } => {
                let record = store.get(*index)?;
                DetailView::Details {
                    index: *index,
                    number: display_number(*index),
                    title: "User Details",
                    fields: Field::ALL
                        .into_iter()
                        .map(|field| FieldValue {
                            key: field.key(),
                            label: detail_label(field),
                            value: record.get(field).to_string(),
                        })
                        .collect(),
                }
            }
            DetailState::Editing {
                index,
                draft,
                errors,
            } => DetailView::Form {
                mode: FormMode::Edit,
                index: Some(*index),
                title: "Edit User",
                submit_label: "Save",
                fields: form_fields(|f| draft.get(f), |f| errors.get(f)),
            },
            DetailState::Adding { draft, errors } => DetailView::Form {
                mode: FormMode::Add,
                index: None,
                title: "Add User",
                submit_label: "Add",
                fields: form_fields(|f| draft.get(f), |f| errors.get(f)),
            },
        };
        Ok(view)
    }
}

impl Screen {
    pub fn project<B: StorageBackend>(store: &RecordStore<B>, detail: &DetailState) -> Result<Self> {
        Ok(Self {
            list: ListView::project(store.records()),
            detail: DetailView::project(store, detail)?,
        })
    }
}

// The read-only view says "Card", the form says "Card Number".
fn detail_label(field: Field) -> &'static str {
    match field {
        Field::Card => "Card",
        other => other.label(),
    }
}

fn form_fields<'a>(
    value: impl Fn(Field) -> &'a str,
    error: impl Fn(Field) -> Option<&'a str>,
) -> Vec<FormField> {
    Field::ALL
        .into_iter()
        .map(|field| FormField {
            key: field.key(),
            label: field.label(),
            input_kind: field.input_kind(),
            value: value(field).to_string(),
            error: error(field).map(str::to_string),
        })
        .collect()
}
