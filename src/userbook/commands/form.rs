use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UserbookError};
use crate::form::{DetailState, Draft, FieldErrors};
use crate::model::Field;
use crate::store::{RecordStore, StorageBackend};
use crate::validation::{validate_draft, ValidationMode};

/// Opens an empty add form.
pub fn open_add(detail: &mut DetailState) -> Result<CmdResult> {
    tracing::debug!(from = detail.name(), "opening add form");
    *detail = DetailState::Adding {
        draft: Draft::default(),
        errors: FieldErrors::default(),
    };
    Ok(CmdResult::default())
}

/// Opens an edit form pre-filled with the record at `index`.
pub fn open_edit<B: StorageBackend>(
    store: &RecordStore<B>,
    detail: &mut DetailState,
    index: usize,
) -> Result<CmdResult> {
    let record = store.get(index)?;
    tracing::debug!(index, from = detail.name(), "opening edit form");
    *detail = DetailState::Editing {
        index,
        draft: Draft::from_record(record),
        errors: FieldErrors::default(),
    };
    Ok(CmdResult::default())
}

/// Replaces one draft value. Annotations are left as they are until the next save.
pub fn input(detail: &mut DetailState, field: Field, value: impl Into<String>) -> Result<CmdResult> {
    let state = detail.name();
    let (draft, _) = detail.form_mut().ok_or(UserbookError::InvalidTransition {
        event: "fill in a field",
        state,
    })?;
    draft.set(field, value);
    Ok(CmdResult::default())
}

/// Validates the open form and, if every field passes, commits it.
///
/// A rejected save is not an error: the form stays open, its annotations are
/// updated, and the result carries them in `rejected`.
pub fn save<B: StorageBackend>(
    store: &mut RecordStore<B>,
    detail: &mut DetailState,
    mode: ValidationMode,
) -> Result<CmdResult> {
    let state = detail.name();
    let (target, valid, record, errors) = match detail {
        DetailState::Editing {
            index,
            draft,
            errors,
        } => {
            let valid = validate_draft(draft, mode, errors);
            (Some(*index), valid, draft.to_record(), errors.clone())
        }
        DetailState::Adding { draft, errors } => {
            let valid = validate_draft(draft, mode, errors);
            (None, valid, draft.to_record(), errors.clone())
        }
        _ => {
            return Err(UserbookError::InvalidTransition {
                event: "save",
                state,
            })
        }
    };

    if !valid {
        tracing::debug!(state, failing = errors.len(), "save rejected by validation");
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "User not saved: {} field{} need{} attention",
            errors.len(),
            if errors.len() == 1 { "" } else { "s" },
            if errors.len() == 1 { "s" } else { "" },
        )));
        result.rejected = Some(errors);
        return Ok(result);
    }

    let result = match target {
        Some(index) => {
            store.update(index, record.clone())?;
            CmdResult::default()
                .with_message(CmdMessage::success(format!("User updated: {}", record.name)))
                .with_affected(index, record)
        }
        None => {
            let index = store.add(record.clone())?;
            CmdResult::default()
                .with_message(CmdMessage::success(format!("User added: {}", record.name)))
                .with_affected(index, record)
        }
    };
    *detail = DetailState::Empty;
    Ok(result)
}

/// Discards the open form. Cancelling an edit goes back to viewing the
/// unchanged record; cancelling an add empties the pane.
pub fn cancel<B: StorageBackend>(
    store: &RecordStore<B>,
    detail: &mut DetailState,
) -> Result<CmdResult> {
    if let DetailState::Editing { index, .. } = *detail {
        return super::view::run(store, detail, index);
    }
    match detail {
        DetailState::Adding { .. } => {
            *detail = DetailState::Empty;
            Ok(CmdResult::default())
        }
        _ => Err(UserbookError::InvalidTransition {
            event: "cancel",
            state: detail.name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{names, store_with, user};
    use crate::validation::REQUIRED_MESSAGE;

    fn fill(detail: &mut DetailState, record: &crate::model::UserRecord) {
        for field in Field::ALL {
            input(detail, field, record.get(field)).unwrap();
        }
    }

    #[test]
    fn add_form_starts_empty() {
        let mut detail = DetailState::Viewing { index: 0 };
        open_add(&mut detail).unwrap();
        match &detail {
            DetailState::Adding { draft, errors } => {
                assert_eq!(draft, &Draft::default());
                assert!(errors.is_empty());
            }
            other => panic!("expected adding, got {:?}", other),
        }
    }

    #[test]
    fn saving_valid_add_appends_and_clears_pane() {
        let mut store = store_with(&["Bob"]);
        let mut detail = DetailState::Empty;
        open_add(&mut detail).unwrap();
        fill(&mut detail, &user("Anna"));

        let result = save(&mut store, &mut detail, ValidationMode::Exhaustive).unwrap();

        assert!(!result.is_rejected());
        assert_eq!(result.affected[0].index, 1);
        assert_eq!(detail, DetailState::Empty);
        assert_eq!(names(&store), vec!["Bob", "Anna"]);
    }

    #[test]
    fn saving_empty_add_annotates_all_fields() {
        let mut store = store_with(&[]);
        let mut detail = DetailState::Empty;
        open_add(&mut detail).unwrap();

        let result = save(&mut store, &mut detail, ValidationMode::Exhaustive).unwrap();

        let errors = result.rejected.unwrap();
        assert_eq!(errors.len(), 6);
        assert!(errors.iter().all(|(_, m)| m == REQUIRED_MESSAGE));
        assert!(detail.is_form());
        assert!(store.is_empty());
    }

    #[test]
    fn short_circuit_add_annotates_first_failure_only() {
        let mut store = store_with(&[]);
        let mut detail = DetailState::Empty;
        open_add(&mut detail).unwrap();

        let result = save(&mut store, &mut detail, ValidationMode::ShortCircuit).unwrap();

        let errors = result.rejected.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let store = store_with(&["Anna"]);
        let mut detail = DetailState::Empty;
        open_edit(&store, &mut detail, 0).unwrap();
        match &detail {
            DetailState::Editing { index, draft, .. } => {
                assert_eq!(*index, 0);
                assert_eq!(draft.to_record(), user("Anna"));
            }
            other => panic!("expected editing, got {:?}", other),
        }
    }

    #[test]
    fn saving_edit_updates_only_changed_field() {
        let mut store = store_with(&["Anna", "Bob"]);
        let mut detail = DetailState::Empty;
        open_edit(&store, &mut detail, 0).unwrap();
        input(&mut detail, Field::Age, "31").unwrap();

        save(&mut store, &mut detail, ValidationMode::Exhaustive).unwrap();

        let mut expected = user("Anna");
        expected.age = "31".into();
        assert_eq!(store.records()[0], expected);
        assert_eq!(store.records()[1], user("Bob"));
        assert_eq!(detail, DetailState::Empty);
    }

    #[test]
    fn invalid_edit_leaves_record_unchanged() {
        let mut store = store_with(&["Anna"]);
        let mut detail = DetailState::Empty;
        open_edit(&store, &mut detail, 0).unwrap();
        input(&mut detail, Field::Name, "anna").unwrap();

        let result = save(&mut store, &mut detail, ValidationMode::Exhaustive).unwrap();

        assert_eq!(
            result.rejected.unwrap().get(Field::Name),
            Some("Enter name from capital letter")
        );
        assert_eq!(store.records()[0], user("Anna"));
        assert_eq!(detail.name(), "editing");
        assert_eq!(
            detail.errors().unwrap().get(Field::Name),
            Some("Enter name from capital letter")
        );
    }

    #[test]
    fn saved_values_are_trimmed() {
        let mut store = store_with(&[]);
        let mut detail = DetailState::Empty;
        open_add(&mut detail).unwrap();
        fill(&mut detail, &user("Anna"));
        input(&mut detail, Field::Name, "  Anna  ").unwrap();

        save(&mut store, &mut detail, ValidationMode::Exhaustive).unwrap();
        assert_eq!(store.records()[0].name, "Anna");
    }

    #[test]
    fn cancel_edit_returns_to_original_record() {
        let store = store_with(&["Anna"]);
        let mut detail = DetailState::Empty;
        open_edit(&store, &mut detail, 0).unwrap();
        input(&mut detail, Field::Name, "Zed").unwrap();

        cancel(&store, &mut detail).unwrap();

        assert_eq!(detail, DetailState::Viewing { index: 0 });
        assert_eq!(store.records()[0].name, "Anna");
    }

    #[test]
    fn cancel_add_empties_pane() {
        let store = store_with(&[]);
        let mut detail = DetailState::Empty;
        open_add(&mut detail).unwrap();
        cancel(&store, &mut detail).unwrap();
        assert_eq!(detail, DetailState::Empty);
        assert!(store.is_empty());
    }

    #[test]
    fn form_events_without_form_are_rejected() {
        let mut store = store_with(&["Anna"]);
        let mut detail = DetailState::Viewing { index: 0 };
        assert!(input(&mut detail, Field::Name, "X").is_err());
        assert!(save(&mut store, &mut detail, ValidationMode::Exhaustive).is_err());
        assert!(cancel(&store, &mut detail).is_err());
        assert_eq!(detail, DetailState::Viewing { index: 0 });
    }

    #[test]
    fn failed_write_keeps_form_open() {
        let mut store = store_with(&[]);
        store.backend().set_simulate_write_error(true);
        let mut detail = DetailState::Empty;
        open_add(&mut detail).unwrap();
        fill(&mut detail, &user("Anna"));

        assert!(save(&mut store, &mut detail, ValidationMode::Exhaustive).is_err());
        assert!(detail.is_form());
        assert!(store.is_empty());
    }
}
