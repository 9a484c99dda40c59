//! Reset line flags.
//!
//! The flags word of each line selects, independently for assert, deassert
//! and status, whether the operation exists and which register value means
//! "in reset". Values match the `ti,syscon-reset` device-tree binding.

// ═══════════════════════════════════════════════════════════════════════════
// DEVICE-TREE BINDING VALUES
// ═══════════════════════════════════════════════════════════════════════════

/// Assert by writing 0.
pub const ASSERT_CLEAR: u32 = 0 << 0;
/// Assert by writing 1.
pub const ASSERT_SET: u32 = 1 << 0;
/// Assert not supported.
pub const ASSERT_NONE: u32 = 1 << 1;

/// Deassert by writing 0.
pub const DEASSERT_CLEAR: u32 = 0 << 2;
/// Deassert by writing 1.
pub const DEASSERT_SET: u32 = 1 << 2;
/// Deassert not supported.
pub const DEASSERT_NONE: u32 = 1 << 3;

/// Status bit reads 0 while in reset.
pub const STATUS_CLEAR: u32 = 0 << 4;
/// Status bit reads 1 while in reset.
pub const STATUS_SET: u32 = 1 << 4;
/// Status not supported.
pub const STATUS_NONE: u32 = 1 << 5;

/// No operation supported.
pub const RESET_NONE: u32 = ASSERT_NONE | DEASSERT_NONE | STATUS_NONE;

// ═══════════════════════════════════════════════════════════════════════════
// DECODED FORM
// ═══════════════════════════════════════════════════════════════════════════

/// How one operation of a line is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Operation not available on this line.
    Unsupported,
    /// Active register value is 1.
    ActiveHigh,
    /// Active register value is 0.
    ActiveLow,
}

impl Polarity {
    /// Decode one operation's pair of flags.
    ///
    /// The `none` flag is tested first and wins over `set`.
    pub const fn decode(flags: u32, set: u32, none: u32) -> Self {
        if flags & none != 0 {
            Self::Unsupported
        } else if flags & set != 0 {
            Self::ActiveHigh
        } else {
            Self::ActiveLow
        }
    }

    /// Register bit value that means "active", if the operation exists.
    pub const fn active_level(self) -> Option<bool> {
        match self {
            Self::Unsupported => None,
            Self::ActiveHigh => Some(true),
            Self::ActiveLow => Some(false),
        }
    }
}

/// Per-operation polarities of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFlags {
    pub assert: Polarity,
    pub deassert: Polarity,
    pub status: Polarity,
}

impl LineFlags {
    /// Decode a raw flags word. Unknown bits are ignored.
    pub const fn from_raw(flags: u32) -> Self {
        Self {
            assert: Polarity::decode(flags, ASSERT_SET, ASSERT_NONE),
            deassert: Polarity::decode(flags, DEASSERT_SET, DEASSERT_NONE),
            status: Polarity::decode(flags, STATUS_SET, STATUS_NONE),
        }
    }
}
