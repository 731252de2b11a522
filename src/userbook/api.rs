//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every UI. It owns the session state explicitly:
//!
//! - the [`RecordStore`] (loaded once, saved after every mutation)
//! - the [`DetailState`] of the detail region
//! - the [`Confirm`] collaborator used before removal
//! - the [`ValidationMode`] for form submission
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdout, stderr, or prompts of its own
//! - **Presentation**: [`UserbookApi::screen`] returns a data projection, not text
//!
//! ## Generic Over Backend
//!
//! `UserbookApi<B: StorageBackend, C: Confirm>`:
//! - Production: `UserbookApi<FsBackend, _>`
//! - Testing: `UserbookApi<MemBackend, AutoConfirm>`

use crate::commands::{self, CmdResult};
use crate::confirm::Confirm;
use crate::error::Result;
use crate::events::{Event, RowAction};
use crate::form::DetailState;
use crate::model::Field;
use crate::store::{RecordStore, StorageBackend};
use crate::validation::ValidationMode;
use crate::view::Screen;

pub struct UserbookApi<B: StorageBackend, C: Confirm> {
    store: RecordStore<B>,
    detail: DetailState,
    confirm: C,
    validation: ValidationMode,
}

impl<B: StorageBackend, C: Confirm> UserbookApi<B, C> {
    /// Loads the collection stored under `key` and starts with an empty detail pane.
    pub fn open(backend: B, key: &str, confirm: C) -> Result<Self> {
        Ok(Self::new(RecordStore::load(backend, key)?, confirm))
    }

    pub fn new(store: RecordStore<B>, confirm: C) -> Self {
        Self {
            store,
            detail: DetailState::Empty,
            confirm,
            validation: ValidationMode::default(),
        }
    }

    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn screen(&self) -> Result<Screen> {
        Screen::project(&self.store, &self.detail)
    }

    pub fn open_add(&mut self) -> Result<CmdResult> {
        commands::form::open_add(&mut self.detail)
    }

    pub fn view(&mut self, index: usize) -> Result<CmdResult> {
        commands::view::run(&self.store, &mut self.detail, index)
    }

    pub fn back(&mut self) -> Result<CmdResult> {
        commands::view::back(&mut self.detail)
    }

    pub fn open_edit(&mut self, index: usize) -> Result<CmdResult> {
        commands::form::open_edit(&self.store, &mut self.detail, index)
    }

    pub fn input(&mut self, field: Field, value: impl Into<String>) -> Result<CmdResult> {
        commands::form::input(&mut self.detail, field, value)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::form::save(&mut self.store, &mut self.detail, self.validation)
    }

    pub fn cancel(&mut self) -> Result<CmdResult> {
        commands::form::cancel(&self.store, &mut self.detail)
    }

    pub fn remove(&mut self, index: usize) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, &mut self.detail, index, &mut self.confirm)
    }

    /// Routes one UI event to its operation.
    pub fn dispatch(&mut self, event: Event) -> Result<CmdResult> {
        tracing::debug!(?event, state = self.detail.name(), "dispatch");
        match event {
            Event::AddClicked => self.open_add(),
            Event::RowClicked { action, index } => match action {
                RowAction::View => self.view(index),
                RowAction::Edit => self.open_edit(index),
                RowAction::Remove => self.remove(index),
            },
            Event::Return => self.back(),
            Event::Input { field, value } => self.input(field, value),
            Event::Save => self.save(),
            Event::Cancel => self.cancel(),
        }
    }
}
