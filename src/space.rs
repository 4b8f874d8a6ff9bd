//! The capability shared by every space-filling curve in this crate.

use crate::error::Result;

/// A bijection between curve indices `[0, width * height)` and grid
/// coordinates `[0, width) x [0, height)`.
///
/// Implementations are immutable after construction, so a single instance
/// may be shared freely across threads.
pub trait SpaceFilling: Send + Sync {
    /// Width and height of the 2D space.
    fn dimensions(&self) -> (i64, i64);

    /// Map a curve index to its `(x, y)` grid coordinate.
    fn map(&self, t: i64) -> Result<(i64, i64)>;

    /// Map a grid coordinate back to its curve index.
    fn map_inverse(&self, x: i64, y: i64) -> Result<i64>;
}
