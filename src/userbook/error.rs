use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserbookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("No user at position {index} (collection has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot {event} while {state}")]
    InvalidTransition {
        event: &'static str,
        state: &'static str,
    },

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, UserbookError>;
