//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: resolves the data directory, loads config, builds the API
//! - `handle_*()`: per-command handlers that call the API and print the screen

use super::render::Renderer;
use super::setup::{Cli, Commands, FieldArgs, OutputMode};
use super::shell;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use userbook::api::UserbookApi;
use userbook::commands::CmdResult;
use userbook::config::UserbookConfig;
use userbook::confirm::{AutoConfirm, Confirm};
use userbook::error::{Result, UserbookError};
use userbook::index::parse_display_number;
use userbook::model::Field;
use userbook::store::fs_backend::FsBackend;
use userbook::store::StorageBackend;

pub const HOME_ENV: &str = "USERBOOK_HOME";
pub const LOG_ENV: &str = "USERBOOK_LOG";

type CliApi = UserbookApi<FsBackend, Box<dyn Confirm>>;

struct AppContext {
    api: CliApi,
    renderer: Renderer,
}

/// Asks on the terminal. Only `y` and `yes` count as agreement.
struct TermConfirm;

impl Confirm for TermConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Term::stderr().write_str(&format!("{} [y/N] ", prompt))?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    // Config does not need the collection loaded
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&data_dir, key.as_deref(), value.as_deref());
    }

    let skip_confirm = matches!(&cli.command, Some(Commands::Remove { yes: true, .. }));
    let mut ctx = init_context(&cli, data_dir, skip_confirm)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::View { number }) => handle_view(&mut ctx, &number),
        Some(Commands::Add { fields }) => handle_add(&mut ctx, &fields),
        Some(Commands::Edit { number, fields }) => handle_edit(&mut ctx, &number, &fields),
        Some(Commands::Remove { number, .. }) => handle_remove(&mut ctx, &number),
        Some(Commands::Shell) => shell::run(&mut ctx.api, &ctx.renderer),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "userbook", "userbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            UserbookError::Config(format!(
                "Could not determine a data directory, set {} or pass --data-dir",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli, data_dir: PathBuf, skip_confirm: bool) -> Result<AppContext> {
    let config = UserbookConfig::load(&data_dir)?;

    let confirm: Box<dyn Confirm> = if skip_confirm || !config.confirm_remove {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(TermConfirm)
    };

    let api = UserbookApi::open(FsBackend::new(data_dir), &config.storage_key, confirm)?
        .with_validation(config.validation);

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let renderer = Renderer::new(cli.output, use_color)?;

    Ok(AppContext { api, renderer })
}

fn print_screen(ctx: &AppContext, result: Option<&CmdResult>) -> Result<()> {
    let messages = result.map(|r| r.messages.as_slice()).unwrap_or_default();
    print!("{}", ctx.renderer.render(&ctx.api.screen()?, messages)?);
    Ok(())
}

fn field_values(args: &FieldArgs) -> Vec<(Field, &str)> {
    [
        (Field::Name, &args.name),
        (Field::Password, &args.password),
        (Field::Age, &args.age),
        (Field::Email, &args.email),
        (Field::Phone, &args.phone),
        (Field::Card, &args.card),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    .collect()
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    print_screen(ctx, None)
}

fn handle_view(ctx: &mut AppContext, number: &str) -> Result<()> {
    let index = parse_display_number(number)?;
    let result = ctx.api.view(index)?;
    print_screen(ctx, Some(&result))
}

fn handle_add(ctx: &mut AppContext, fields: &FieldArgs) -> Result<()> {
    ctx.api.open_add()?;
    fill_and_save(ctx, fields)
}

fn handle_edit(ctx: &mut AppContext, number: &str, fields: &FieldArgs) -> Result<()> {
    let index = parse_display_number(number)?;
    ctx.api.open_edit(index)?;
    fill_and_save(ctx, fields)
}

fn fill_and_save(ctx: &mut AppContext, fields: &FieldArgs) -> Result<()> {
    for (field, value) in field_values(fields) {
        ctx.api.input(field, value)?;
    }
    let result = ctx.api.save()?;
    print_screen(ctx, Some(&result))?;

    // A rejected form has been printed with its errors; the save still failed.
    if result.is_rejected() {
        std::process::exit(1);
    }
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, number: &str) -> Result<()> {
    let index = parse_display_number(number)?;
    let result = ctx.api.remove(index)?;
    print_screen(ctx, Some(&result))
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let store = ctx.api.store();
    let location = store.backend().item_location(store.key());
    match ctx.renderer.mode() {
        OutputMode::Json => println!("{}", serde_json::json!({ "path": location })),
        _ => println!("{}", location.display()),
    }
    Ok(())
}

fn handle_config(data_dir: &std::path::Path, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut config = UserbookConfig::load(data_dir)?;
    match (key, value) {
        (None, _) => {
            for key in UserbookConfig::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", config.get(key)?),
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(data_dir)?;
            println!("{} = {}", key, config.get(key)?);
        }
    }
    Ok(())
}
