//! Interactive session.
//!
//! One line is one event. The screen is re-rendered after every line, so the
//! form can be filled in field by field the way a UI would:
//!
//! ```text
//! userbook> add
//! userbook> set name Anna
//! userbook> save
//! ```
//!
//! Errors are printed and the session goes on; only `quit` or end of input ends it.

use super::render::Renderer;
use std::io::{self, Write};
use userbook::api::UserbookApi;
use userbook::confirm::Confirm;
use userbook::error::{Result, UserbookError};
use userbook::events::{Event, RowAction};
use userbook::index::parse_display_number;
use userbook::model::Field;
use userbook::store::StorageBackend;

pub const PROMPT: &str = "userbook> ";

pub const HELP: &str = "\
Commands:
  list                  show the list only
  add                   open the add form
  view N                show user N
  edit N                open the edit form for user N
  remove N              remove user N
  return                close the details view
  set FIELD VALUE       fill in a form field (name, password, age, email, phone, card)
  save                  submit the open form
  cancel                close the open form
  help                  show this help
  quit                  leave the session
";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Event(Event),
    List,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let word = word.to_ascii_lowercase();
    let command = match word.as_str() {
        "list" | "ls" => ShellCommand::List,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        "add" => ShellCommand::Event(Event::AddClicked),
        "return" | "back" => ShellCommand::Event(Event::Return),
        "save" => ShellCommand::Event(Event::Save),
        "cancel" => ShellCommand::Event(Event::Cancel),
        "view" | "edit" | "remove" | "rm" => {
            let action = match word.as_str() {
                "rm" => RowAction::Remove,
                word => word.parse().map_err(UserbookError::InvalidInput)?,
            };
            ShellCommand::Event(Event::RowClicked {
                action,
                index: parse_display_number(rest)?,
            })
        }
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim_start()),
                None => (rest, ""),
            };
            let field: Field = field.parse().map_err(UserbookError::InvalidInput)?;
            ShellCommand::Event(Event::Input {
                field,
                value: value.to_string(),
            })
        }
        other => {
            return Err(UserbookError::InvalidInput(format!(
                "Unknown command '{}', try 'help'",
                other
            )))
        }
    };
    Ok(Some(command))
}

pub fn run<B: StorageBackend, C: Confirm>(
    api: &mut UserbookApi<B, C>,
    renderer: &Renderer,
) -> Result<()> {
    print!("{}", renderer.render(&api.screen()?, &[])?);

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        // Read through the shared stdin buffer so the removal prompt can read
        // the next line as its answer.
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => return Ok(()),
            Ok(Some(ShellCommand::Help)) => print!("{}", HELP),
            Ok(Some(ShellCommand::List)) => print!("{}", renderer.render(&api.screen()?, &[])?),
            Ok(Some(ShellCommand::Event(event))) => match api.dispatch(event) {
                Ok(result) => print!("{}", renderer.render(&api.screen()?, &result.messages)?),
                Err(e) => eprintln!("Error: {}", e),
            },
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
