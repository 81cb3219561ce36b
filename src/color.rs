//! Integer color codes mapped to 256-color ANSI escape sequences
//!
//! Positive codes select a foreground palette index, codes below -1 select a
//! background index, 0 is a black foreground and -1 is the reset sequence.
//! Greyscale indices (232-255) are out of range.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Lowest valid code (background 231)
pub const MIN_CODE: i32 = -231;
/// Highest valid code (foreground 231)
pub const MAX_CODE: i32 = 231;
/// Code reserved for the reset sequence
pub const RESET_CODE: i32 = -1;

pub const RESET: &str = "\x1b[0m";
const FG_ZERO: &str = "\x1b[38;5;0m";

static GLOBAL: LazyLock<ColorTable> = LazyLock::new(|| {
    let table = ColorTable::new();
    tracing::debug!(entries = table.len(), "color table built");
    table
});

/// Immutable code -> escape sequence table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    sequences: HashMap<i32, String>,
    /// Insertion order, ascending from `MIN_CODE`
    keys: Vec<i32>,
}

impl ColorTable {
    /// Build the full table. Rebuilding yields an identical value.
    #[must_use]
    pub fn new() -> Self {
        let capacity = usize::try_from(MAX_CODE - MIN_CODE + 1).unwrap_or_default();
        let mut sequences = HashMap::with_capacity(capacity);
        let mut keys = Vec::with_capacity(capacity);

        for code in MIN_CODE..=MAX_CODE {
            keys.push(code);
            sequences.insert(code, sequence_for(code));
        }

        Self { sequences, keys }
    }

    /// Process-wide table, built on first access
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Escape sequence for `code`, if it is in range
    #[must_use]
    pub fn get(&self, code: i32) -> Option<&str> {
        self.sequences.get(&code).map(String::as_str)
    }

    /// Escape sequence for `code`, or `""` when out of range.
    /// Unknown codes silently degrade to no styling.
    #[must_use]
    pub fn escape(&self, code: i32) -> &str {
        self.get(code).unwrap_or_else(|| {
            tracing::trace!(code, "unknown color code");
            ""
        })
    }

    /// The reset sequence
    #[must_use]
    pub fn reset(&self) -> &str {
        self.escape(RESET_CODE)
    }

    #[must_use]
    pub fn is_valid(&self, code: i32) -> bool {
        self.sequences.contains_key(&code)
    }

    /// Codes in ascending insertion order
    #[must_use]
    pub fn keys(&self) -> &[i32] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new()
    }
}

fn sequence_for(code: i32) -> String {
    match code {
        RESET_CODE => RESET.to_string(),
        c if c < 0 => format!("\x1b[48;5;{}m", -c),
        0 => FG_ZERO.to_string(),
        c => format!("\x1b[38;5;{c}m"),
    }
}
