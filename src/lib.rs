//! SYB: speak typed English through a serial speech chip.
//!
//! Text goes to the external `tx2al` converter, which writes allophone bytes
//! to a temporary file; `sersend` then pushes that file to the serial port.
//! This crate holds everything except the windows themselves.

pub mod config;
pub mod error;
pub mod hex;
pub mod input;
pub mod log_buffer;
pub mod pipeline;
pub mod process;
pub mod serial;
pub mod session;

pub use error::{Result, SybError};
