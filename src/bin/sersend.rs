//! Sends a file's bytes to a serial port.
//!
//! Usage: `sersend <file> <port> [--baud N]`
//!
//! Exits 0 on success. On failure the reason goes to stdout (SYB shows it in
//! its log window) and the exit code is 1.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use syb::serial;

#[derive(Parser, Debug)]
#[command(name = "sersend")]
#[command(version, about = "Send a file over a serial port", long_about = None)]
struct Cli {
    /// File whose bytes are sent
    file: PathBuf,

    /// Serial port name, e.g. COM4 or /dev/ttyUSB0
    port: String,

    /// Baud rate
    #[arg(long, default_value = "9600")]
    baud: u32,

    /// Pause between 512-byte chunks, in milliseconds
    #[arg(long, default_value = "10")]
    pause_ms: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let data = std::fs::read(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let mut port = serial::open(&cli.port, cli.baud).map_err(|e| {
        anyhow::anyhow!(
            "Failed to open {}: {}\n{}",
            cli.port,
            e,
            serial::ports_line(&serial::available_ports())
        )
    })?;

    let written = serial::write_chunked(&mut port, &data, Duration::from_millis(cli.pause_ms))
        .with_context(|| format!("Failed to write to {}", cli.port))?;

    info!("Sent {} bytes from {} to {}", written, cli.file.display(), cli.port);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_then_port() {
        let cli = Cli::try_parse_from(["sersend", "/tmp/x.al", "COM4"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("/tmp/x.al"));
        assert_eq!(cli.port, "COM4");
        assert_eq!(cli.baud, 9600);
        assert_eq!(cli.pause_ms, 10);
    }

    #[test]
    fn port_is_required() {
        assert!(Cli::try_parse_from(["sersend", "/tmp/x.al"]).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            file: dir.path().join("absent.al"),
            port: "COM4".into(),
            baud: 9600,
            pause_ms: 0,
        };
        let err = run(&cli).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to read"));
    }
}
