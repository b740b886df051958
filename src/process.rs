//! Running the external tools.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;

use log::debug;
use tokio::process::Command;

use crate::error::{Result, SybError};

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// What a tool that exited successfully printed.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
}

/// Runs `program` with `args` and waits for it to exit.
///
/// Stdout and stderr are captured and stdin is closed. A non-zero exit becomes
/// [`SybError::Exit`] carrying everything the tool printed, stdout first.
pub async fn run_tool<I, S>(program: &Path, args: I) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let tool = tool_name(program);

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    #[cfg(windows)]
    cmd.creation_flags(CREATE_NO_WINDOW);

    debug!("Running {:?}", cmd.as_std());

    let output = cmd.output().await.map_err(|source| SybError::Launch {
        tool: tool.clone(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    debug!("{} exited with {}", tool, output.status);

    if output.status.success() {
        if !stderr.is_empty() {
            debug!("{} stderr: {}", tool, stderr.trim_end());
        }
        Ok(ToolOutput { stdout })
    } else {
        Err(SybError::Exit {
            tool,
            code: output.status.code(),
            output: join_output(stdout, &stderr),
        })
    }
}

fn join_output(mut stdout: String, stderr: &str) -> String {
    if !stderr.is_empty() {
        if !stdout.is_empty() && !stdout.ends_with('\n') {
            stdout.push('\n');
        }
        stdout.push_str(stderr);
    }
    stdout
}

fn tool_name(program: &Path) -> String {
    program
        .file_stem()
        .unwrap_or(program.as_os_str())
        .to_string_lossy()
        .into_owned()
}
