//! REPL configuration.

use std::path::PathBuf;

/// Language version shown in the banner.
pub const LANGUAGE_VERSION: &str = "0.1";

/// History file name, resolved against the home directory.
pub const HISTORY_FILE: &str = ".jlisp_history";

/// Settings for an interactive session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Printed before each line is read.
    pub prompt: String,
    /// Printed once at startup.
    pub banner: String,
    /// Where line history is loaded from and saved to. `None` disables it.
    pub history: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: ">> ".to_string(),
            banner: format!("Jlisp Version {LANGUAGE_VERSION}\nPress Ctrl+c to Exit"),
            history: Some(default_history_path()),
        }
    }
}

impl ReplConfig {
    /// Same settings, without persisted history.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.history = None;
        self
    }
}

/// `~/.jlisp_history`, or the bare file name when no home directory is known.
fn default_history_path() -> PathBuf {
    match home_dir() {
        Some(home) => home.join(HISTORY_FILE),
        None => PathBuf::from(HISTORY_FILE),
    }
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    {
        std::env::var_os("HOME").map(PathBuf::from)
    }
    #[cfg(windows)]
    {
        std::env::var_os("USERPROFILE").map(PathBuf::from)
    }
    #[cfg(not(any(unix, windows)))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ReplConfig::default();
        assert_eq!(config.prompt, ">> ");
        assert_eq!(config.banner, "Jlisp Version 0.1\nPress Ctrl+c to Exit");
        let history = config.history.unwrap_or_default();
        assert!(history.ends_with(HISTORY_FILE));
    }

    #[test]
    fn test_without_history() {
        let config = ReplConfig::default().without_history();
        assert_eq!(config.history, None);
        assert_eq!(config.prompt, ">> ");
    }
}
