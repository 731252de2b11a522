use crate::commands::CmdResult;
use crate::error::{Result, UserbookError};
use crate::form::DetailState;
use crate::store::{RecordStore, StorageBackend};

/// Shows the record at `index` read-only, replacing whatever the pane held.
pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    detail: &mut DetailState,
    index: usize,
) -> Result<CmdResult> {
    let record = store.get(index)?.clone();
    tracing::debug!(index, from = detail.name(), "viewing record");
    *detail = DetailState::Viewing { index };
    Ok(CmdResult::default().with_affected(index, record))
}

/// The "return" control of the read-only view.
pub fn back(detail: &mut DetailState) -> Result<CmdResult> {
    if !matches!(detail, DetailState::Viewing { .. }) {
        return Err(UserbookError::InvalidTransition {
            event: "return",
            state: detail.name(),
        });
    }
    *detail = DetailState::Empty;
    Ok(CmdResult::default())
}
