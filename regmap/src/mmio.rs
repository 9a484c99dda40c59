//! MMIO (Memory-Mapped I/O) register map.
//!
//! # Safety
//! - Window must be mapped with device attributes
//! - Base must be 4-byte aligned
//! - Nothing else may treat the window as ordinary memory

use core::ptr;

use crate::error::{RegmapError, Result};
use crate::{Regmap, REG_STRIDE};

/// Register map over a mapped syscon window `[base, base + size)`.
#[derive(Debug)]
pub struct MmioRegmap {
    base: usize,
    size: usize,
}

impl MmioRegmap {
    /// Create a handle for the window at `base`.
    ///
    /// # Safety
    /// `base..base + size` must be a valid, mapped, 4-byte aligned MMIO
    /// region for the lifetime of the handle.
    pub const unsafe fn new(base: usize, size: usize) -> Self {
        Self { base, size }
    }

    fn reg(&self, offset: u32) -> Result<*mut u32> {
        if offset % REG_STRIDE != 0 {
            return Err(RegmapError::Unaligned { offset });
        }
        let start = offset as usize;
        match start.checked_add(REG_STRIDE as usize) {
            Some(end) if end <= self.size => Ok((self.base + start) as *mut u32),
            _ => Err(RegmapError::OutOfBounds { offset }),
        }
    }
}

impl Regmap for MmioRegmap {
    #[inline]
    fn read(&self, offset: u32) -> Result<u32> {
        let reg = self.reg(offset)?;
        // SAFETY: `reg` is aligned and inside the window promised by `new`.
        Ok(unsafe { ptr::read_volatile(reg) })
    }

    #[inline]
    fn write(&self, offset: u32, value: u32) -> Result<()> {
        let reg = self.reg(offset)?;
        // SAFETY: `reg` is aligned and inside the window promised by `new`.
        unsafe { ptr::write_volatile(reg, value) };
        Ok(())
    }
}
