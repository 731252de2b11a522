//! # CLI Templates
//!
//! Output is rendered from stand-alone minijinja template files, included here as
//! string constants. Keeping them out of the code makes them easier to edit and diff.
//!
//! - `*.tmp` templates produce terminal text. They only reference semantic style
//!   names through the `style` filter (see `styles.rs`), and rely on `trim_blocks`
//!   so that each output line maps to one template line.
//! - `*.html` templates produce an HTML fragment. minijinja auto-escapes them
//!   based on the `.html` name, so user-entered values are always escaped.
//!
//! Layout math (column widths, truncation, masking) stays in Rust; templates get
//! pre-computed strings.

pub const SCREEN_TEMPLATE: &str = include_str!("templates/screen.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");

pub const SCREEN_HTML_TEMPLATE: &str = include_str!("templates/screen.html");
pub const LIST_HTML_TEMPLATE: &str = include_str!("templates/list.html");
pub const DETAIL_HTML_TEMPLATE: &str = include_str!("templates/detail.html");

/// Template names paired with their sources, as registered on the environment.
pub const ALL: [(&str, &str); 7] = [
    ("screen.tmp", SCREEN_TEMPLATE),
    ("list.tmp", LIST_TEMPLATE),
    ("detail.tmp", DETAIL_TEMPLATE),
    ("messages.tmp", MESSAGES_TEMPLATE),
    ("screen.html", SCREEN_HTML_TEMPLATE),
    ("list.html", LIST_HTML_TEMPLATE),
    ("detail.html", DETAIL_HTML_TEMPLATE),
];
