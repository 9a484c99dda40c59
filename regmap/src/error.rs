//! Register map errors.

/// Error returned by a register map handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegmapError {
    /// Offset lies outside the register window.
    OutOfBounds { offset: u32 },
    /// Offset is not a multiple of the register stride.
    Unaligned { offset: u32 },
    /// Bus fault reported by the backend.
    Bus { offset: u32 },
}

impl core::fmt::Display for RegmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds { offset } => write!(f, "register 0x{:x} outside syscon window", offset),
            Self::Unaligned { offset } => write!(f, "register 0x{:x} is not 32-bit aligned", offset),
            Self::Bus { offset } => write!(f, "bus fault accessing register 0x{:x}", offset),
        }
    }
}

/// Result type for register map operations.
pub type Result<T> = core::result::Result<T, RegmapError>;
