//! Register map handles for shared syscon blocks.
//!
//! A syscon is a block of 32-bit control registers shared by several
//! drivers. Drivers never own the block; they borrow a [`Regmap`] handle and
//! address registers by byte offset from the start of the block.
//!
//! # Backends
//! - [`MmioRegmap`] - volatile access to a mapped register window
//! - [`RamRegmap`] - in-memory register file for simulation and host tests
//! - [`Serialized`] - lock around any handle shared between callers
//!
//! # Usage
//!
//! ```ignore
//! let syscon = unsafe { MmioRegmap::new(SYSCON_BASE, SYSCON_SIZE) };
//! syscon.update_bits(0x10, 1 << 2, 1 << 2)?;
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod mmio;
pub mod ram;
pub mod serialized;

// Re-exports
pub use error::{RegmapError, Result};
pub use mmio::MmioRegmap;
pub use ram::RamRegmap;
pub use serialized::Serialized;

/// Width of one register in bytes.
pub const REG_STRIDE: u32 = 4;

/// Access to a block of 32-bit registers addressed by byte offset.
pub trait Regmap {
    /// Read the register at `offset`.
    fn read(&self, offset: u32) -> Result<u32>;

    /// Write `value` to the register at `offset`.
    fn write(&self, offset: u32, value: u32) -> Result<()>;

    /// Replace the bits selected by `mask` with the same bits of `value`.
    ///
    /// Performs `reg = (reg & !mask) | (value & mask)` as one read followed
    /// by one write. Bits of `value` outside `mask` are ignored.
    fn update_bits(&self, offset: u32, mask: u32, value: u32) -> Result<()> {
        let old = self.read(offset)?;
        self.write(offset, apply_mask(old, mask, value))
    }
}

impl<T: Regmap + ?Sized> Regmap for &T {
    #[inline]
    fn read(&self, offset: u32) -> Result<u32> {
        (**self).read(offset)
    }

    #[inline]
    fn write(&self, offset: u32, value: u32) -> Result<()> {
        (**self).write(offset, value)
    }

    #[inline]
    fn update_bits(&self, offset: u32, mask: u32, value: u32) -> Result<()> {
        (**self).update_bits(offset, mask, value)
    }
}

/// Merge the masked bits of `value` into `old`.
#[inline]
pub const fn apply_mask(old: u32, mask: u32, value: u32) -> u32 {
    (old & !mask) | (value & mask)
}
