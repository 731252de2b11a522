//! # Userbook Architecture
//!
//! Userbook is a **UI-agnostic user-registry library**: an ordered collection of
//! user records with six validated fields, a list view, a read-only detail view
//! and an add/edit form. It ships with a terminal client, but nothing below the
//! CLI layer knows about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders screens, prompts, exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the record store and the detail state               │
//! │  - Routes events to commands, projects the screen           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - View, form and removal transitions                       │
//! │  - Validation on save, persistence through the store        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait (a key/value string store)          │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Addressing
//!
//! Records have no identifier. They are addressed by their 0-based position in
//! the collection, and removal shifts every later position down by one. The CLI
//! shows 1-based numbers instead; see [`index`].
//!
//! ## Stored Values
//!
//! Passwords and card numbers are stored and shown in plaintext, exactly as
//! typed (after trimming). Do not point this at data you care about.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each transition
//! - [`store`]: storage abstraction and the record store
//! - [`model`]: `UserRecord` and `Field`
//! - [`validation`]: field validators and the form validation pass
//! - [`form`]: `Draft`, `FieldErrors` and the `DetailState` machine
//! - [`view`]: the serializable screen projection
//! - [`events`]: UI events routed by the API
//! - [`confirm`]: the confirmation collaborator used before removal
//! - [`index`]: display numbers used by the CLI
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod error;
pub mod events;
pub mod form;
pub mod index;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;
