//! Error types for curve construction and mapping.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by curve construction and by point mapping.
///
/// All variants indicate caller error; none is transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Curve order is zero or negative.
    #[error("curve order must be positive, got {0}")]
    InvalidOrder(i64),

    /// Curve order is positive but not a power of two.
    #[error("curve order must be a power of two, got {0}")]
    NotPowerOfTwo(i64),

    /// Curve order exceeds what the index domain (or a lookup table) can hold.
    #[error("curve order {order} exceeds the maximum of {max}")]
    OrderTooLarge { order: i64, max: i64 },

    /// Curve index outside `[0, len)`.
    #[error("index {index} out of range [0, {len})")]
    IndexOutOfRange { index: i64, len: i64 },

    /// Grid coordinate outside `[0, order)` on either axis.
    #[error("coordinate ({x}, {y}) out of range [0, {order})")]
    CoordinateOutOfRange { x: i64, y: i64, order: i64 },
}

impl Error {
    /// True for either out-of-range variant.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::CoordinateOutOfRange { .. }
        )
    }
}
