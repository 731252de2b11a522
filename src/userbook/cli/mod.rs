//! # CLI Behavior
//!
//! This is **one possible UI client** for userbook, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the library documentation.
//!
//! ## One-Shot Commands
//!
//! Each invocation loads the collection, performs one operation and renders the
//! resulting screen:
//!
//! - `userbook` with no command is `userbook list`.
//! - `userbook add --name Anna ...` opens the add form, fills the given fields
//!   and saves. A rejected save prints the annotated form and exits with 1.
//! - `userbook edit 2 --age 31` opens the edit form for row 2, overrides only the
//!   given fields and saves.
//! - `userbook remove 2` asks for confirmation unless `--yes` is given or
//!   `confirm-remove` is off.
//!
//! ## Interactive Session
//!
//! `userbook shell` keeps one API alive and feeds it one event per line, so the
//! form can be filled field by field and re-rendered after each step.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `shell`: the interactive line loop
//! - `render`: screen and message rendering (term, json, html)
//! - `setup`: argument parsing via clap
//! - `styles`: named terminal styles
//! - `templates`: embedded output templates

mod commands;
mod render;
pub mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;
