use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::{Confirm, REMOVE_PROMPT};
use crate::error::Result;
use crate::form::DetailState;
use crate::store::{RecordStore, StorageBackend};

/// Removes the record at `index` after asking `confirm`.
///
/// Declining changes nothing, including the detail pane. A confirmed removal
/// always empties the pane, since any shown position may now point elsewhere.
pub fn run<B: StorageBackend, C: Confirm + ?Sized>(
    store: &mut RecordStore<B>,
    detail: &mut DetailState,
    index: usize,
    confirm: &mut C,
) -> Result<CmdResult> {
    store.get(index)?;

    if !confirm.confirm(REMOVE_PROMPT)? {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Removal cancelled.")));
    }

    let removed = store.remove(index)?;
    *detail = DetailState::Empty;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("User removed: {}", removed.name)))
        .with_affected(index, removed))
}
