//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Port used until the user types another one.
pub const DEFAULT_PORT: &str = "COM4";

/// SYB startup options.
#[derive(Parser, Debug, Clone)]
#[command(name = "syb")]
#[command(author, version, about = "Type English text and speak it through a serial speech chip", long_about = None)]
pub struct Config {
    /// Serial port the allophones are sent to
    #[arg(long, env = "SYB_PORT", default_value = DEFAULT_PORT)]
    pub port: String,

    /// Directory holding the tx2al and sersend tools (defaults to the directory of this executable)
    #[arg(long, env = "SYB_TOOLS_DIR")]
    pub tools_dir: Option<PathBuf>,

    /// Open the log window at startup
    #[arg(long)]
    pub show_log: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            tools_dir: None,
            show_log: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["syb"]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.tools_dir.is_none());
        assert!(!config.show_log);
        assert!(!config.verbose);
    }

    #[test]
    fn flags() {
        let config =
            Config::try_parse_from(["syb", "--port", "COM9", "--tools-dir", "/opt/syb", "-v"])
                .unwrap();
        assert_eq!(config.port, "COM9");
        assert_eq!(config.tools_dir, Some(PathBuf::from("/opt/syb")));
        assert!(config.verbose);
    }
}
