//! Print helpers over an injected color table and writer

use crate::color::ColorTable;
use crate::error::Result;
use crate::output;
use std::io::{self, Write};

/// Stateless façade: a borrowed [`ColorTable`] plus the stream to write to.
///
/// Each print call composes the whole output first and issues a single
/// `write_all`, so spans from one call are never split across writes.
#[derive(Debug)]
pub struct ColorService<'t, W> {
    table: &'t ColorTable,
    out: W,
}

impl ColorService<'static, io::Stdout> {
    /// Global table writing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(ColorTable::global(), io::stdout())
    }
}

impl<'t, W: Write> ColorService<'t, W> {
    #[must_use]
    pub fn new(table: &'t ColorTable, out: W) -> Self {
        Self { table, out }
    }

    #[must_use]
    pub fn table(&self) -> &'t ColorTable {
        self.table
    }

    /// Consume the service, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print `text` in `code`, keeping a trailing newline outside the span.
    /// Returns bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the write fails.
    pub fn print_colored(&mut self, text: &str, code: i32) -> Result<usize> {
        let s = output::colored(self.table, text, code);
        self.emit(&s)
    }

    /// Print `text` in `code` followed by a line terminator
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the write fails.
    pub fn print_colored_line(&mut self, text: &str, code: i32) -> Result<usize> {
        let s = output::colored_line(self.table, text, code);
        self.emit(&s)
    }

    /// Color each `%h`-separated segment with the matching code.
    /// Write failures are logged, not returned.
    pub fn print_multi_colored(&mut self, text: &str, codes: &[i32]) {
        let s = output::multi_colored(self.table, text, codes);
        self.emit_quiet(&s);
    }

    /// [`Self::print_multi_colored`] followed by a line terminator
    pub fn print_multi_colored_line(&mut self, text: &str, codes: &[i32]) {
        let s = output::multi_colored_line(self.table, text, codes);
        self.emit_quiet(&s);
    }

    /// Print with a positive foreground and a background below -1.
    /// Nothing is written when the combination is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidColorCombination`] for out-of-side codes,
    /// or [`crate::Error::Io`] if the write fails.
    pub fn print_colored_fg_bg(
        &mut self,
        text: &str,
        foreground: i32,
        background: i32,
    ) -> Result<usize> {
        let s = output::fg_bg(self.table, text, foreground, background)?;
        self.emit(&s)
    }

    /// [`Self::print_colored_fg_bg`] followed by a line terminator
    ///
    /// # Errors
    ///
    /// Same as [`Self::print_colored_fg_bg`].
    pub fn print_colored_fg_bg_line(
        &mut self,
        text: &str,
        foreground: i32,
        background: i32,
    ) -> Result<usize> {
        let s = output::fg_bg_line(self.table, text, foreground, background)?;
        self.emit(&s)
    }

    #[must_use]
    pub fn apply_color(&self, text: &str, code: i32) -> String {
        output::apply_color(self.table, text, code)
    }

    #[must_use]
    pub fn strip_color(&self, text: &str) -> String {
        output::strip_color(self.table, text)
    }

    #[must_use]
    pub fn is_color_valid(&self, code: i32) -> bool {
        self.table.is_valid(code)
    }

    /// Write every code in its own color. Write failures are logged, not returned.
    pub fn list_available_colors(&mut self) {
        let s = output::available_colors(self.table);
        self.emit_quiet(&s);
    }

    fn emit(&mut self, s: &str) -> Result<usize> {
        self.out.write_all(s.as_bytes())?;
        self.out.flush()?;
        Ok(s.len())
    }

    fn emit_quiet(&mut self, s: &str) {
        if let Err(e) = self.emit(s) {
            tracing::debug!(error = %e, "dropped write failure");
        }
    }
}
