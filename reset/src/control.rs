//! Per-line reset control records.

use crate::flags::{LineFlags, Polarity};

/// Number of 32-bit words describing one line.
pub const WORDS_PER_CONTROL: usize = 7;

/// A single bit inside the syscon block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegBit {
    /// Register offset from the syscon base.
    pub offset: u32,
    /// Bit index inside the register.
    pub bit: u32,
}

impl RegBit {
    pub const fn new(offset: u32, bit: u32) -> Self {
        Self { offset, bit }
    }

    /// `1 << bit`, or `None` when the bit does not exist in a 32-bit register.
    pub const fn mask(&self) -> Option<u32> {
        1u32.checked_shl(self.bit)
    }
}

/// Reset operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOp {
    Assert,
    Deassert,
    Status,
}

/// How one reset line is driven and observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetControl {
    /// Bit written to put the line into reset.
    pub assert: RegBit,
    /// Bit written to release the line.
    pub deassert: RegBit,
    /// Bit read to observe the line.
    pub status: RegBit,
    /// Raw flags word as described.
    pub flags: u32,
    polarity: LineFlags,
}

impl ResetControl {
    pub const fn new(assert: RegBit, deassert: RegBit, status: RegBit, flags: u32) -> Self {
        Self {
            assert,
            deassert,
            status,
            flags,
            polarity: LineFlags::from_raw(flags),
        }
    }

    /// Build from one description group, in binding order: assert offset,
    /// assert bit, deassert offset, deassert bit, status offset, status bit,
    /// flags.
    pub const fn from_words(words: [u32; WORDS_PER_CONTROL]) -> Self {
        Self::new(
            RegBit::new(words[0], words[1]),
            RegBit::new(words[2], words[3]),
            RegBit::new(words[4], words[5]),
            words[6],
        )
    }

    /// Polarities decoded from `flags`.
    pub const fn polarity(&self) -> LineFlags {
        self.polarity
    }

    /// Register bit and polarity used by `op`.
    pub const fn path(&self, op: ResetOp) -> (RegBit, Polarity) {
        match op {
            ResetOp::Assert => (self.assert, self.polarity.assert),
            ResetOp::Deassert => (self.deassert, self.polarity.deassert),
            ResetOp::Status => (self.status, self.polarity.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::*;

    #[test]
    fn test_from_words_field_order() {
        let control = ResetControl::from_words([0x10, 2, 0x14, 3, 0x18, 4, ASSERT_SET | STATUS_NONE]);

        assert_eq!(control.assert, RegBit::new(0x10, 2));
        assert_eq!(control.deassert, RegBit::new(0x14, 3));
        assert_eq!(control.status, RegBit::new(0x18, 4));
        assert_eq!(control.flags, ASSERT_SET | STATUS_NONE);
        assert_eq!(control.polarity().assert, Polarity::ActiveHigh);
        assert_eq!(control.polarity().deassert, Polarity::ActiveLow);
        assert_eq!(control.polarity().status, Polarity::Unsupported);
    }

    #[test]
    fn test_path_selects_operation() {
        let control = ResetControl::from_words([0x0, 1, 0x4, 5, 0x8, 9, DEASSERT_SET]);

        assert_eq!(control.path(ResetOp::Assert), (RegBit::new(0x0, 1), Polarity::ActiveLow));
        assert_eq!(control.path(ResetOp::Deassert), (RegBit::new(0x4, 5), Polarity::ActiveHigh));
        assert_eq!(control.path(ResetOp::Status), (RegBit::new(0x8, 9), Polarity::ActiveLow));
    }

    #[test]
    fn test_mask() {
        assert_eq!(RegBit::new(0, 0).mask(), Some(1));
        assert_eq!(RegBit::new(0, 31).mask(), Some(0x8000_0000));
        assert_eq!(RegBit::new(0, 32).mask(), None);
    }
}
