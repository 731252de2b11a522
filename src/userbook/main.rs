//! # Userbook CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + per-command handlers (commands.rs)      │
//! │  - Interactive session (shell.rs)                           │
//! │  - Template rendering (render.rs, templates.rs, styles.rs)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!              userbook library (api.rs and below)
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
