//! Reset operations seam.
//!
//! A reset manager dispatches requests for a line through [`ResetOps`]
//! without knowing how the controller behind it encodes polarity.

use syscon_regmap::Regmap;

use crate::controller::SysconReset;
use crate::error::Result;

/// Operations a reset controller exposes to the reset manager.
pub trait ResetOps {
    /// Put line `id` into reset.
    fn rst_assert(&self, id: usize) -> Result<()>;

    /// Release line `id` from reset.
    fn rst_deassert(&self, id: usize) -> Result<()>;

    /// Whether line `id` is in reset.
    fn rst_status(&self, id: usize) -> Result<bool>;
}

impl<R: Regmap> ResetOps for SysconReset<R> {
    fn rst_assert(&self, id: usize) -> Result<()> {
        self.assert(id)
    }

    fn rst_deassert(&self, id: usize) -> Result<()> {
        self.deassert(id)
    }

    fn rst_status(&self, id: usize) -> Result<bool> {
        self.status(id)
    }
}

/// Handle to one reset line of a controller.
#[derive(Clone, Copy)]
pub struct ResetCtl<'a> {
    ops: &'a dyn ResetOps,
    id: usize,
}

impl<'a> ResetCtl<'a> {
    pub fn new(ops: &'a dyn ResetOps, id: usize) -> Self {
        Self { ops, id }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn assert(&self) -> Result<()> {
        self.ops.rst_assert(self.id)
    }

    pub fn deassert(&self) -> Result<()> {
        self.ops.rst_deassert(self.id)
    }

    pub fn status(&self) -> Result<bool> {
        self.ops.rst_status(self.id)
    }
}

impl core::fmt::Debug for ResetCtl<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResetCtl").field("id", &self.id).finish()
    }
}
