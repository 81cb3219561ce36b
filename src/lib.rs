//! pfmt - 256-color ANSI print helpers keyed by compact integer codes
//!
//! Codes `1..=231` select a foreground, `-231..=-2` a background, `0` a black
//! foreground and `-1` the reset that closes every span.
//!
//! ```
//! use pfmt::{ColorService, ColorTable};
//!
//! let table = ColorTable::new();
//! let mut service = ColorService::new(&table, Vec::new());
//! service.print_colored("hello\n", 1).unwrap();
//! assert_eq!(service.into_inner(), b"\x1b[38;5;1mhello\x1b[0m\n");
//! ```

pub mod color;
pub mod error;
pub mod font;
pub mod output;
pub mod service;

pub use color::{ColorTable, MAX_CODE, MIN_CODE, RESET, RESET_CODE};
pub use error::{Error, Result};
pub use font::FontTable;
pub use service::ColorService;

/// Populated font table; independent of the color table
#[must_use]
pub fn init_font_map() -> FontTable {
    FontTable::initialized()
}
