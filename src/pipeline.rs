//! One press of Send: text → allophones → serial port.
//!
//! The converter writes into a fresh temporary file, the bytes are read back,
//! and the same file is handed to the sender. The file is removed when the
//! run ends, whichever way it ends.

use std::ffi::OsStr;
use std::path::Path;

use log::{debug, info, warn};
use tempfile::TempPath;

use crate::error::SybError;
use crate::process::{run_tool, ToolOutput};
use crate::session::Tools;

/// Indent put in front of each line of sender diagnostics.
pub const OUTPUT_INDENT: &str = "   ";

/// Something to append to the log window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Line(String),
    Bytes(Vec<u8>),
}

/// What a send produced, in the order it should be logged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReport {
    pub entries: Vec<LogEntry>,
    /// The allophones the converter produced (empty when conversion failed).
    pub allophones: Vec<u8>,
    /// True when the sender ran and exited successfully.
    pub sent: bool,
}

impl SendReport {
    fn line(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry::Line(message.into()));
    }
}

/// Converts `text` and sends it to `port`.
///
/// Never fails: every problem is reported as a log line in the returned report.
pub async fn speak(tools: Tools, port: String, text: String) -> SendReport {
    let mut report = SendReport::default();

    let temp = match scratch_file() {
        Ok(temp) => temp,
        Err(e) => {
            warn!("Could not create temporary file: {}", e);
            report.line(format!("Error creating temporary file: {}", e));
            return report;
        }
    };

    let allophones = convert(&tools.converter, &text, &temp, &mut report).await;
    report.line(text);
    report.entries.push(LogEntry::Bytes(allophones.clone()));

    if !allophones.is_empty() {
        report.sent = send(&tools.sender, &temp, &port, &mut report).await;
    }
    report.allophones = allophones;

    let path = temp.to_path_buf();
    if let Err(e) = temp.close() {
        warn!("Could not delete {}: {}", path.display(), e);
    }

    report
}

fn scratch_file() -> std::io::Result<TempPath> {
    let file = tempfile::Builder::new()
        .prefix("syb-")
        .suffix(".al")
        .tempfile()?;
    Ok(file.into_temp_path())
}

/// Runs the converter; any failure yields no bytes.
async fn convert(converter: &Path, text: &str, out: &Path, report: &mut SendReport) -> Vec<u8> {
    let args: [&OsStr; 4] = [
        OsStr::new("-T"),
        OsStr::new(text),
        OsStr::new("-O"),
        out.as_os_str(),
    ];

    match run_tool(converter, args).await {
        Ok(output) => match tokio::fs::read(out).await {
            Ok(bytes) => {
                info!("Converted {:?} into {} bytes", text, bytes.len());
                log_stdout("converter", &output);
                bytes
            }
            Err(e) => {
                warn!("Converter output {} unreadable: {}", out.display(), e);
                Vec::new()
            }
        },
        Err(SybError::Launch { source, .. }) => {
            report.line(format!("Error converting text: {}", source));
            Vec::new()
        }
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    }
}

/// Runs the sender; returns whether it succeeded.
async fn send(sender: &Path, file: &Path, port: &str, report: &mut SendReport) -> bool {
    let args: [&OsStr; 2] = [file.as_os_str(), OsStr::new(port)];

    match run_tool(sender, args).await {
        Ok(output) => {
            info!("Sent {} to {}", file.display(), port);
            log_stdout("sender", &output);
            true
        }
        Err(SybError::Exit { output, .. }) => {
            report.line("Error sending serial:");
            if !output.is_empty() {
                report.line(indent_lines(&output));
            }
            false
        }
        Err(e) => {
            let message = match e {
                SybError::Launch { source, .. } => source.to_string(),
                other => other.to_string(),
            };
            report.line(format!("Error sending serial: {}", message));
            false
        }
    }
}

fn log_stdout(tool: &str, output: &ToolOutput) {
    for line in output.stdout.lines() {
        debug!("{}: {}", tool, line);
    }
}

/// Prefixes every line of `output` with [`OUTPUT_INDENT`].
pub fn indent_lines(output: &str) -> String {
    output
        .lines()
        .map(|line| format!("{}{}", OUTPUT_INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}
