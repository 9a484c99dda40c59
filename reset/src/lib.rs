//! Syscon reset controller.
//!
//! Drives reset lines that are single bits inside a shared syscon register
//! block. Which bit asserts, deasserts and reports each line, and with which
//! polarity, comes from a `ti,reset-bits` description decoded once at probe.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │            Reset manager               │
//! └───────────────────┬────────────────────┘
//!                     │ ResetOps (by line id)
//!                     ▼
//! ┌────────────────────────────────────────┐
//! │    SysconReset  ──  ResetTable         │
//! │   validate → mask/value → access       │
//! └───────────────────┬────────────────────┘
//!                     │ Regmap (shared)
//!                     ▼
//! ┌────────────────────────────────────────┐
//! │        Syscon register block           │
//! └────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let syscon = unsafe { MmioRegmap::new(SYSCON_BASE, SYSCON_SIZE) };
//! let rst = probe(&node, &syscon, &ProbeConfig::default())?;
//! rst.deassert(USB_RESET)?;
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod control;
pub mod controller;
pub mod error;
pub mod flags;
pub mod ops;
pub mod probe;
pub mod table;

// Re-exports
pub use control::{RegBit, ResetControl, ResetOp, WORDS_PER_CONTROL};
pub use controller::SysconReset;
pub use error::{ResetError, Result};
pub use flags::{LineFlags, Polarity};
pub use ops::{ResetCtl, ResetOps};
pub use probe::{probe, DeviceNode, ProbeConfig, COMPATIBLE, RESET_BITS_PROPERTY};
pub use table::{ResetTable, BYTES_PER_CONTROL};
