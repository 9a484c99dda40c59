//! In-memory register file.
//!
//! Behaves like a syscon block that simply latches every write. Used to
//! simulate a platform before real hardware exists and by host tests.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::error::{RegmapError, Result};
use crate::{apply_mask, Regmap, REG_STRIDE};

/// Register file of `N` 32-bit words.
pub struct RamRegmap<const N: usize> {
    words: [AtomicU32; N],
}

impl<const N: usize> RamRegmap<N> {
    /// All registers start at zero.
    pub fn new() -> Self {
        Self::from_words([0; N])
    }

    pub fn from_words(words: [u32; N]) -> Self {
        Self {
            words: words.map(AtomicU32::new),
        }
    }

    /// Size of the register file in bytes.
    pub const fn size(&self) -> usize {
        N * REG_STRIDE as usize
    }

    /// Copy of every register, lowest offset first.
    pub fn snapshot(&self) -> [u32; N] {
        let mut out = [0; N];
        for (dst, word) in out.iter_mut().zip(self.words.iter()) {
            *dst = word.load(Ordering::SeqCst);
        }
        out
    }

    fn word(&self, offset: u32) -> Result<&AtomicU32> {
        if offset % REG_STRIDE != 0 {
            return Err(RegmapError::Unaligned { offset });
        }
        self.words
            .get((offset / REG_STRIDE) as usize)
            .ok_or(RegmapError::OutOfBounds { offset })
    }
}

impl<const N: usize> Default for RamRegmap<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Regmap for RamRegmap<N> {
    fn read(&self, offset: u32) -> Result<u32> {
        Ok(self.word(offset)?.load(Ordering::SeqCst))
    }

    fn write(&self, offset: u32, value: u32) -> Result<()> {
        self.word(offset)?.store(value, Ordering::SeqCst);
        Ok(())
    }

    fn update_bits(&self, offset: u32, mask: u32, value: u32) -> Result<()> {
        let word = self.word(offset)?;
        let mut old = word.load(Ordering::SeqCst);
        loop {
            match word.compare_exchange_weak(
                old,
                apply_mask(old, mask, value),
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return Ok(()),
                Err(current) => old = current,
            }
        }
    }
}
