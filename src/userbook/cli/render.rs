//! # Rendering Module
//!
//! Turns a [`Screen`] plus the messages of the last command into output text.
//!
//! - **term**: minijinja templates with a `style` filter backed by `console::Style`
//! - **json**: the screen projection and messages, serialized as is
//! - **html**: an auto-escaped HTML fragment of the same screen
//!
//! ## Design Philosophy
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they require
//! Unicode-aware processing. Templates handle presentation: which style a piece of
//! text gets and where line breaks go.

use super::setup::OutputMode;
use super::styles::{names, USERBOOK_THEME};
use super::templates;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use userbook::commands::{CmdMessage, MessageLevel};
use userbook::error::{Result, UserbookError};
use userbook::model::InputKind;
use userbook::view::{DetailView, ListView, Screen};

/// Widest a name column gets before names are truncated.
pub const NAME_WIDTH: usize = 32;
pub const PASSWORD_MASK: char = '*';

#[derive(Serialize)]
struct TermScreen {
    rows: Vec<TermRow>,
    detail: Option<TermDetail>,
}

#[derive(Serialize)]
struct TermRow {
    number: String,
    name: String,
    padding: String,
    actions: String,
}

#[derive(Serialize)]
struct TermDetail {
    title: String,
    lines: Vec<TermLine>,
    actions: String,
}

#[derive(Serialize)]
struct TermLine {
    label: String,
    value: String,
    error: Option<String>,
    indent: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct FullOutput<'a> {
    list: &'a ListView,
    detail: &'a DetailView,
    messages: &'a [CmdMessage],
}

pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl Renderer {
    pub fn new(mode: OutputMode, use_color: bool) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        for (name, source) in templates::ALL {
            env.add_template(name, source).map_err(render_error)?;
        }
        let theme = &*USERBOOK_THEME;
        let use_color = use_color && mode == OutputMode::Term;
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        Ok(Self { env, mode })
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Renders the whole screen followed by the messages.
    pub fn render(&self, screen: &Screen, messages: &[CmdMessage]) -> Result<String> {
        match self.mode {
            OutputMode::Term => {
                let mut out = self.render_template("screen.tmp", &term_screen(screen))?;
                if !messages.is_empty() {
                    out.push('\n');
                    out.push_str(&self.render_messages(messages)?);
                }
                Ok(out)
            }
            OutputMode::Json => {
                let data = FullOutput {
                    list: &screen.list,
                    detail: &screen.detail,
                    messages,
                };
                let mut out = serde_json::to_string_pretty(&data)?;
                out.push('\n');
                Ok(out)
            }
            OutputMode::Html => {
                let data = FullOutput {
                    list: &screen.list,
                    detail: &screen.detail,
                    messages,
                };
                let mut out = self.render_template("screen.html", &data)?;
                out.push('\n');
                Ok(out)
            }
        }
    }

    /// Renders messages alone, one per line, styled by level.
    pub fn render_messages(&self, messages: &[CmdMessage]) -> Result<String> {
        if messages.is_empty() {
            return Ok(String::new());
        }
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: level_style(msg.level),
                })
                .collect(),
        };
        self.render_template("messages.tmp", &data)
    }

    fn render_template<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name).map_err(render_error)?;
        tmpl.render(data).map_err(render_error)
    }
}

fn render_error(err: minijinja::Error) -> UserbookError {
    UserbookError::Render(err.to_string())
}

fn level_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
    }
}

fn term_screen(screen: &Screen) -> TermScreen {
    TermScreen {
        rows: term_rows(&screen.list),
        detail: term_detail(&screen.detail),
    }
}

fn term_rows(list: &ListView) -> Vec<TermRow> {
    let cells: Vec<String> = list
        .rows
        .iter()
        .map(|row| truncate_to_width(&row.name, NAME_WIDTH))
        .collect();
    let column = cells.iter().map(|n| n.width()).max().unwrap_or(0);
    let number_column = list
        .rows
        .last()
        .map(|row| format!("{}.", row.number).len())
        .unwrap_or(0);

    list.rows
        .iter()
        .zip(cells)
        .map(|(row, name)| {
            let number = format!("{:>width$}", format!("{}.", row.number), width = number_column);
            let padding = " ".repeat(column.saturating_sub(name.width()));
            let actions = row
                .actions
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            TermRow {
                number,
                name,
                padding,
                actions,
            }
        })
        .collect()
}

fn term_detail(detail: &DetailView) -> Option<TermDetail> {
    match detail {
        DetailView::Empty => None,
        DetailView::Details { title, fields, .. } => {
            let width = label_width(fields.iter().map(|f| f.label));
            Some(TermDetail {
                title: title.to_string(),
                lines: fields
                    .iter()
                    .map(|f| term_line(f.label, width, f.value.clone(), None))
                    .collect(),
                actions: "[return]".to_string(),
            })
        }
        DetailView::Form {
            title,
            submit_label,
            fields,
            ..
        } => {
            let width = label_width(fields.iter().map(|f| f.label));
            Some(TermDetail {
                title: title.to_string(),
                lines: fields
                    .iter()
                    .map(|f| {
                        let value = match f.input_kind {
                            InputKind::Password => {
                                PASSWORD_MASK.to_string().repeat(f.value.chars().count())
                            }
                            _ => f.value.clone(),
                        };
                        term_line(f.label, width, value, f.error.clone())
                    })
                    .collect(),
                actions: format!("[{}] [cancel]", submit_label.to_lowercase()),
            })
        }
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.width() + 1).max().unwrap_or(0)
}

fn term_line(label: &str, width: usize, value: String, error: Option<String>) -> TermLine {
    TermLine {
        label: format!("{:<width$}", format!("{}:", label), width = width),
        value,
        error,
        indent: " ".repeat(width + 1),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use userbook::form::{DetailState, Draft, FieldErrors};
    use userbook::model::{Field, UserRecord};
    use userbook::store::mem_backend::MemBackend;
    use userbook::store::RecordStore;

    fn anna() -> UserRecord {
        UserRecord {
            name: "Anna".into(),
            password: "secret".into(),
            age: "30".into(),
            email: "a@b.co".into(),
            phone: "+380931234567".into(),
            card: "1111222233334444".into(),
        }
    }

    fn store(records: &[UserRecord]) -> RecordStore<MemBackend> {
        let mut store = RecordStore::load(MemBackend::new(), "users").unwrap();
        for record in records {
            store.add(record.clone()).unwrap();
        }
        store
    }

    fn plain(screen: &Screen) -> String {
        Renderer::new(OutputMode::Term, false)
            .unwrap()
            .render(screen, &[])
            .unwrap()
    }

    #[test]
    fn test_render_empty_list() {
        let screen = Screen::project(&store(&[]), &DetailState::Empty).unwrap();
        let output = plain(&screen);
        assert!(output.contains("Users"));
        assert!(output.contains("No users yet."));
    }

    #[test]
    fn test_render_list_rows() {
        let mut bob = anna();
        bob.name = "Bob".into();
        let screen = Screen::project(&store(&[anna(), bob]), &DetailState::Empty).unwrap();
        let output = plain(&screen);
        assert!(output.contains("1. Anna"));
        assert!(output.contains("2. Bob"));
        assert!(output.contains("view edit remove"));
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_render_details_in_plaintext() {
        let screen = Screen::project(&store(&[anna()]), &DetailState::Viewing { index: 0 }).unwrap();
        let output = plain(&screen);
        assert!(output.contains("User Details"));
        assert!(output.contains("secret"));
        assert!(output.contains("Card:"));
        assert!(output.contains("1111222233334444"));
        assert!(output.contains("[return]"));
    }

    #[test]
    fn test_render_form_masks_password_and_shows_errors() {
        let mut draft = Draft::default();
        draft.set(Field::Name, "anna");
        draft.set(Field::Password, "abc");
        let mut errors = FieldErrors::default();
        errors.set(Field::Name, "Enter name from capital letter");
        let detail = DetailState::Adding { draft, errors };

        let screen = Screen::project(&store(&[]), &detail).unwrap();
        let output = plain(&screen);
        assert!(output.contains("Add User"));
        assert!(output.contains("***"));
        assert!(!output.contains("abc"));
        assert!(output.contains("Enter name from capital letter"));
        assert!(output.contains("Card Number:"));
        assert!(output.contains("[add] [cancel]"));
    }

    #[test]
    fn test_render_html_escapes_values() {
        let mut record = anna();
        record.name = "<b>Anna</b>".into();
        let screen = Screen::project(&store(&[record]), &DetailState::Empty).unwrap();
        let output = Renderer::new(OutputMode::Html, false)
            .unwrap()
            .render(&screen, &[])
            .unwrap();
        assert!(output.contains("&lt;b&gt;Anna&lt;"));
        assert!(!output.contains("<b>"));
        assert!(output.contains(r#"<tr data-id="0">"#));
        assert!(output.contains(r#"class="remove" data-id="0""#));
        assert!(output.contains("</section>\n<section class=\"detail\">"));
    }

    #[test]
    fn test_render_json_includes_messages() {
        let screen = Screen::project(&store(&[anna()]), &DetailState::Empty).unwrap();
        let output = Renderer::new(OutputMode::Json, false)
            .unwrap()
            .render(&screen, &[CmdMessage::success("User added: Anna")])
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["list"]["rows"][0]["name"], "Anna");
        assert_eq!(value["detail"]["kind"], "empty");
        assert_eq!(value["messages"][0]["level"], "success");
    }

    #[test]
    fn test_render_messages() {
        let renderer = Renderer::new(OutputMode::Term, false).unwrap();
        assert!(renderer.render_messages(&[]).unwrap().is_empty());
        let output = renderer
            .render_messages(&[
                CmdMessage::info("Removal cancelled."),
                CmdMessage::warning("User not saved"),
            ])
            .unwrap();
        assert!(output.contains("Removal cancelled."));
        assert!(output.contains("User not saved"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Anna", 10), "Anna");
        assert_eq!(truncate_to_width("Bartholomew", 5), "Bart…");
    }
}
