//! Reset controller errors.

use syscon_regmap::RegmapError;

/// Error returned by the syscon reset controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetError {
    /// Reset description is empty or not a whole number of 7-word groups.
    MalformedDescription,
    /// Line index is not below the number of described lines.
    OutOfRange,
    /// The line does not support the requested operation.
    Unsupported,
    /// Register map access failed.
    RegisterAccess(RegmapError),
    /// Device node is not a syscon reset controller.
    NotCompatible,
}

impl From<RegmapError> for ResetError {
    fn from(e: RegmapError) -> Self {
        Self::RegisterAccess(e)
    }
}

impl core::fmt::Display for ResetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedDescription => write!(f, "invalid reset description"),
            Self::OutOfRange => write!(f, "reset line out of range"),
            Self::Unsupported => write!(f, "operation not supported for this reset"),
            Self::RegisterAccess(e) => write!(f, "register access failed: {}", e),
            Self::NotCompatible => write!(f, "node is not a syscon reset controller"),
        }
    }
}

/// Result type for reset operations.
pub type Result<T> = core::result::Result<T, ResetError>;
