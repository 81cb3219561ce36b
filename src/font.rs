//! Font style escape sequences, kept apart from the color table

use std::collections::HashMap;

/// Names in display order
const NAMES: [&str; 4] = ["RESET", "BOLD", "UNDERLINE", "ITALIC"];

/// Symbolic style name -> escape sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontTable {
    styles: HashMap<&'static str, &'static str>,
}

impl FontTable {
    /// Empty table; call [`FontTable::init`] to populate
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the four fixed styles. Safe to call more than once.
    pub fn init(&mut self) {
        self.styles.insert("RESET", "\x1b[0m");
        self.styles.insert("BOLD", "\x1b[1m");
        self.styles.insert("UNDERLINE", "\x1b[4m");
        self.styles.insert("ITALIC", "\x1b[3m");
    }

    /// Fresh, populated table
    #[must_use]
    pub fn initialized() -> Self {
        let mut table = Self::new();
        table.init();
        table
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.styles.get(name).copied()
    }

    /// Populated entries in fixed order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        NAMES
            .iter()
            .filter_map(|name| self.styles.get(name).map(|seq| (*name, *seq)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_until_init() {
        let mut table = FontTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get("BOLD"), None);
        table.init();
        assert_eq!(table.get("BOLD"), Some("\x1b[1m"));
    }

    #[test]
    fn fixed_entries() {
        let table = FontTable::initialized();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("RESET", "\x1b[0m"),
                ("BOLD", "\x1b[1m"),
                ("UNDERLINE", "\x1b[4m"),
                ("ITALIC", "\x1b[3m"),
            ]
        );
        assert_eq!(table.get("STRIKE"), None);
    }

    #[test]
    fn init_twice_is_stable() {
        let mut table = FontTable::initialized();
        table.init();
        assert_eq!(table, FontTable::initialized());
    }
}
