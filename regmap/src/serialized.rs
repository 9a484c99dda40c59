//! Lock around a register map shared between callers.
//!
//! The syscon drivers themselves never lock. Platforms that hand one
//! handle to several callers wrap it here so that `update_bits` stays a
//! single read-modify-write with respect to every other user.

use spin::Mutex;

use crate::error::Result;
use crate::{apply_mask, Regmap};

/// Register map whose accesses are serialized by a spin lock.
pub struct Serialized<R> {
    inner: R,
    lock: Mutex<()>,
}

impl<R: Regmap> Serialized<R> {
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            lock: Mutex::new(()),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Regmap> Regmap for Serialized<R> {
    fn read(&self, offset: u32) -> Result<u32> {
        let _guard = self.lock.lock();
        self.inner.read(offset)
    }

    fn write(&self, offset: u32, value: u32) -> Result<()> {
        let _guard = self.lock.lock();
        self.inner.write(offset, value)
    }

    fn update_bits(&self, offset: u32, mask: u32, value: u32) -> Result<()> {
        let _guard = self.lock.lock();
        let old = self.inner.read(offset)?;
        self.inner.write(offset, apply_mask(old, mask, value))
    }
}
