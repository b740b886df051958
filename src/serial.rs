use std::io::Write;
use std::thread;
use std::time::Duration;

use log::{debug, warn};
use serialport::SerialPort;

/// Bytes written per chunk by [`write_chunked`].
pub const CHUNK_SIZE: usize = 512;

/// Names of the serial ports the OS reports, empty if enumeration fails.
pub fn available_ports() -> Vec<String> {
    match serialport::available_ports() {
        Ok(ports) => ports.into_iter().map(|p| p.port_name).collect(),
        Err(e) => {
            warn!("Could not list serial ports: {}", e);
            vec![]
        }
    }
}

/// Startup hint for the log window.
pub fn ports_line(ports: &[String]) -> String {
    if ports.is_empty() {
        "No serial ports found".to_string()
    } else {
        format!("Serial ports found: {}", ports.join(", "))
    }
}

pub fn open(port_name: &str, baud: u32) -> serialport::Result<Box<dyn SerialPort>> {
    serialport::new(port_name, baud)
        .timeout(Duration::from_secs(1))
        .open()
}

/// Writes `data` in [`CHUNK_SIZE`] pieces with `pause` between them, then flushes.
///
/// The pause gives slow speech chips time to drain their input buffer.
pub fn write_chunked<W: Write + ?Sized>(
    port: &mut W,
    data: &[u8],
    pause: Duration,
) -> std::io::Result<usize> {
    let mut written = 0;
    for chunk in data.chunks(CHUNK_SIZE) {
        port.write_all(chunk)?;
        written += chunk.len();
        debug!("Wrote {}/{} bytes", written, data.len());
        if written < data.len() && !pause.is_zero() {
            thread::sleep(pause);
        }
    }
    port.flush()?;
    Ok(written)
}
