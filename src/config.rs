//! Demo CLI configuration assembled from flags

use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Max level for the stderr log subscriber
    pub log_level: Level,
    /// Use the line-terminated variant of each print operation
    pub line: bool,
}

impl Config {
    /// `verbose` is the `-v` count: 0 = warn, 1 = info, 2 = debug, 3+ = trace
    pub fn new(verbose: u8, line: bool) -> Self {
        let log_level = match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { log_level, line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_level() {
        assert_eq!(Config::new(0, false).log_level, Level::WARN);
        assert_eq!(Config::new(1, false).log_level, Level::INFO);
        assert_eq!(Config::new(2, false).log_level, Level::DEBUG);
        assert_eq!(Config::new(9, true).log_level, Level::TRACE);
        assert!(Config::new(0, true).line);
    }
}
