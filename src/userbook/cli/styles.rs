//! Styles for the userbook terminal output.
//!
//! Templates only use semantic style names (`title`, `label`, `field_error`, ...) through
//! the `style` filter. This module maps those names to actual `console::Style`
//! values, so the look can change without touching templates.
//!
//! An unknown style name is rendered with a `(!?)` prefix, which makes typos in
//! templates visible instead of silently unstyled.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const TITLE: &str = "title";
    pub const INDEX: &str = "index";
    pub const LABEL: &str = "label";
    pub const VALUE: &str = "value";
    pub const ACTION: &str = "action";
    pub const MUTED: &str = "muted";
    pub const FIELD_ERROR: &str = "field_error";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style. Without color the text is returned as is, but
    /// unknown names are still flagged.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static USERBOOK_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::INDEX, Style::new().yellow())
        .add(names::LABEL, Style::new().cyan())
        .add(names::VALUE, Style::new())
        .add(names::ACTION, Style::new().dim())
        .add(names::MUTED, Style::new().dim().italic())
        .add(names::FIELD_ERROR, Style::new().red())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
});
