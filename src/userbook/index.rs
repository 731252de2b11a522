//! # Display Numbers
//!
//! The core addresses records by position (0-based), exactly as they sit in the
//! stored array. Users see 1-based numbers. This module is the only place that
//! converts between the two, so neither side has to remember the offset.
//!
//! Positions are not stable: removing a record renumbers every record after it.

use crate::error::{Result, UserbookError};

/// 1-based number shown for the record at `position`.
pub fn display_number(position: usize) -> usize {
    position + 1
}

/// Parses a user-typed number (`"1"`, `" 3 "`) into a position.
pub fn parse_display_number(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(UserbookError::InvalidIndex(format!(
            "'{}' is not a user number (numbers start at 1)",
            input
        ))),
    }
}
