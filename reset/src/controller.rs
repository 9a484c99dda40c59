//! Syscon reset controller.
//!
//! Serves assert, deassert and status requests for lines described by a
//! [`ResetTable`], against a register map shared with other drivers.
//!
//! Every call validates the line, then performs at most one register read
//! and one register write. Nothing is cached and nothing is retried; the
//! controller never waits for a line to settle after writing it.

use syscon_regmap::Regmap;

use crate::control::{RegBit, ResetControl, ResetOp};
use crate::error::{ResetError, Result};
use crate::table::ResetTable;

/// Reset controller over a shared syscon register map.
pub struct SysconReset<R: Regmap> {
    /// Shared register map handle (usually a reference).
    regmap: R,
    /// Line descriptions, fixed at construction.
    table: ResetTable,
}

impl<R: Regmap> SysconReset<R> {
    /// Create a controller from a register map and a raw `ti,reset-bits`
    /// description.
    ///
    /// No partial controller is produced on a malformed description.
    pub fn new(regmap: R, reset_bits: &[u8]) -> Result<Self> {
        let table = ResetTable::decode(reset_bits)?;
        log::info!("ti-syscon reset: probed {} controls", table.len());
        Ok(Self::with_table(regmap, table))
    }

    /// Create a controller from an already decoded table.
    pub fn with_table(regmap: R, table: ResetTable) -> Self {
        Self { regmap, table }
    }

    /// Put line `id` into reset.
    ///
    /// Returns once the register write is issued.
    pub fn assert(&self, id: usize) -> Result<()> {
        self.drive(id, ResetOp::Assert)
    }

    /// Release line `id` from reset.
    pub fn deassert(&self, id: usize) -> Result<()> {
        self.drive(id, ResetOp::Deassert)
    }

    /// Whether line `id` is currently in reset.
    ///
    /// The line is asserted when its status bit equals the configured
    /// active value.
    pub fn status(&self, id: usize) -> Result<bool> {
        let (reg, mask, active_high) = self.resolve(id, ResetOp::Status)?;
        let value = self.regmap.read(reg.offset)?;
        let bit_set = value & mask != 0;

        log::trace!(
            "ti-syscon reset: status line {} reg 0x{:x} = 0x{:08x}",
            id,
            reg.offset,
            value
        );
        Ok(bit_set == active_high)
    }

    /// Number of described lines.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Description of line `id`.
    pub fn control(&self, id: usize) -> Result<&ResetControl> {
        self.table.get(id)
    }

    pub fn controls(&self) -> &[ResetControl] {
        self.table.as_slice()
    }

    fn drive(&self, id: usize, op: ResetOp) -> Result<()> {
        let (reg, mask, active_high) = self.resolve(id, op)?;
        let value = if active_high { mask } else { 0 };

        log::trace!(
            "ti-syscon reset: {:?} line {} reg 0x{:x} mask 0x{:08x} value 0x{:08x}",
            op,
            id,
            reg.offset,
            mask,
            value
        );
        self.regmap.update_bits(reg.offset, mask, value)?;
        Ok(())
    }

    /// Validate `id` and `op`, returning the register bit, its mask and
    /// whether its active value is 1. Performs no register access.
    fn resolve(&self, id: usize, op: ResetOp) -> Result<(RegBit, u32, bool)> {
        let (reg, polarity) = self.table.get(id)?.path(op);
        let active_high = polarity.active_level().ok_or(ResetError::Unsupported)?;

        // Bit outside a 32-bit register cannot be driven or observed.
        let mask = match reg.mask() {
            Some(mask) => mask,
            None => {
                log::warn!("ti-syscon reset: line {} uses bit {} of a 32-bit register", id, reg.bit);
                return Err(ResetError::Unsupported);
            }
        };

        Ok((reg, mask, active_high))
    }
}
