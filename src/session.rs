//! Per-run session state: the serial port and the two external tools.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::Config;
use crate::error::{Result, SybError};

/// Base name of the text-to-allophone converter.
pub const CONVERTER_NAME: &str = "tx2al";
/// Base name of the serial sender.
pub const SENDER_NAME: &str = "sersend";

/// An external executable and whether it was found at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub path: PathBuf,
    pub available: bool,
}

impl Tool {
    fn locate(dir: &Path, name: &'static str) -> Self {
        let path = dir.join(format!("{}{}", name, EXE_SUFFIX));
        let available = path.is_file();
        if available {
            debug!("{} found at {}", name, path.display());
        } else {
            warn!("{} not found at {}", name, path.display());
        }
        Self {
            name,
            path,
            available,
        }
    }

    /// Line shown in the log window at startup.
    pub fn status_line(&self) -> String {
        if self.available {
            format!("{} is available", self.name)
        } else {
            format!("Error: {} not found", self.file_name())
        }
    }

    fn file_name(&self) -> String {
        format!("{}{}", self.name, EXE_SUFFIX)
    }
}

/// Paths handed to one send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub converter: PathBuf,
    pub sender: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub port: String,
    pub converter: Tool,
    pub sender: Tool,
}

impl Session {
    /// Looks up both tools once. A missing tool stays missing for the whole run.
    pub fn resolve(config: &Config) -> Result<Self> {
        let dir = match &config.tools_dir {
            Some(dir) => dir.clone(),
            None => install_dir()?,
        };
        Ok(Self::in_dir(&dir, &config.port))
    }

    pub fn in_dir(dir: &Path, port: &str) -> Self {
        Self {
            port: port.to_string(),
            converter: Tool::locate(dir, CONVERTER_NAME),
            sender: Tool::locate(dir, SENDER_NAME),
        }
    }

    pub fn send_enabled(&self) -> bool {
        self.converter.available && self.sender.available
    }

    pub fn tools(&self) -> Tools {
        Tools {
            converter: self.converter.path.clone(),
            sender: self.sender.path.clone(),
        }
    }
}

/// Directory containing the running executable.
fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        SybError::Config(format!("{} has no parent directory", exe.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(format!("{}{}", name, EXE_SUFFIX)), b"").unwrap();
    }

    #[test]
    fn both_tools_enable_send() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), CONVERTER_NAME);
        touch(dir.path(), SENDER_NAME);

        let session = Session::in_dir(dir.path(), "COM4");
        assert!(session.send_enabled());
        assert_eq!(session.converter.status_line(), "tx2al is available");
        assert_eq!(session.sender.status_line(), "sersend is available");
        assert_eq!(session.tools().converter, session.converter.path);
    }

    #[test]
    fn missing_tool_disables_send() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), CONVERTER_NAME);

        let session = Session::in_dir(dir.path(), "COM4");
        assert!(!session.send_enabled());
        assert!(session.converter.available);
        assert!(!session.sender.available);
        assert!(session.sender.status_line().starts_with("Error: sersend"));
    }

    #[test]
    fn configured_dir_and_port_are_used() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            port: "COM2".into(),
            tools_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let session = Session::resolve(&config).unwrap();
        assert_eq!(session.port, "COM2");
        assert!(session.converter.path.starts_with(dir.path()));
        assert!(!session.send_enabled());
    }

    #[test]
    fn default_dir_is_next_to_executable() {
        let session = Session::resolve(&Config::default()).unwrap();
        let exe_dir = std::env::current_exe().unwrap();
        assert_eq!(session.sender.path.parent(), exe_dir.parent());
    }
}
