//! Precomputed lookup tables for small Hilbert spaces.
//!
//! A table stores both the forward (index to coordinate) and inverse
//! (coordinate to index) mapping of one [`HilbertSpace`], so each lookup is
//! O(1). Tables are generated in parallel from the computed mapping and are
//! immutable afterwards.

use rayon::prelude::*;

use super::curve::HilbertSpace;
use crate::error::{Error, Result};
use crate::space::SpaceFilling;

/// Largest order a table is built for (1M entries, ~8MB for both directions).
pub const MAX_TABLE_ORDER: i64 = 1024;

/// Hilbert space backed by lookup tables.
#[derive(Clone, Debug)]
pub struct HilbertTable {
    space: HilbertSpace,
    /// Maps distance to packed (x, y) coordinates (x in low 16 bits, y in high 16 bits).
    forward: Vec<u32>,
    /// Maps (x, y) to distance. Indexed as `inverse[y * N + x]`.
    inverse: Vec<u32>,
}

#[inline(always)]
fn pack(x: i64, y: i64) -> u32 {
    (x as u32) | ((y as u32) << 16)
}

#[inline(always)]
fn unpack(packed: u32) -> (i64, i64) {
    (i64::from(packed & 0xFFFF), i64::from(packed >> 16))
}

impl HilbertTable {
    /// Generate the tables for `space`, orientation included.
    ///
    /// # Errors
    /// [`Error::OrderTooLarge`] when the space is wider than [`MAX_TABLE_ORDER`].
    pub fn new(space: HilbertSpace) -> Result<Self> {
        let n = space.order();
        if n > MAX_TABLE_ORDER {
            return Err(Error::OrderTooLarge {
                order: n,
                max: MAX_TABLE_ORDER,
            });
        }

        let len = space.len() as usize;
        let width = n as usize;

        let forward = (0..len)
            .into_par_iter()
            .map(|d| space.map(d as i64).map(|(x, y)| pack(x, y)))
            .collect::<Result<Vec<u32>>>()?;

        let inverse = (0..len)
            .into_par_iter()
            .map(|i| {
                let (x, y) = ((i % width) as i64, (i / width) as i64);
                space.map_inverse(x, y).map(|d| d as u32)
            })
            .collect::<Result<Vec<u32>>>()?;

        tracing::debug!(
            order = n,
            entries = len,
            vertical_compatible = space.is_vertical_compatible(),
            "built hilbert lookup table"
        );

        Ok(Self {
            space,
            forward,
            inverse,
        })
    }

    /// The space this table was generated from.
    #[inline]
    pub fn space(&self) -> HilbertSpace {
        self.space
    }

    /// Width and height of the space, always `(N, N)`.
    #[inline]
    pub fn dimensions(&self) -> (i64, i64) {
        self.space.dimensions()
    }

    /// Look up `(x, y)` from a distance along the curve.
    #[inline]
    pub fn map(&self, t: i64) -> Result<(i64, i64)> {
        let len = self.space.len();
        if t < 0 || t >= len {
            return Err(Error::IndexOutOfRange { index: t, len });
        }
        Ok(unpack(self.forward[t as usize]))
    }

    /// Look up the distance along the curve from `(x, y)`.
    #[inline]
    pub fn map_inverse(&self, x: i64, y: i64) -> Result<i64> {
        let n = self.space.order();
        if x < 0 || x >= n || y < 0 || y >= n {
            return Err(Error::CoordinateOutOfRange { x, y, order: n });
        }
        Ok(i64::from(self.inverse[(y * n + x) as usize]))
    }
}

impl SpaceFilling for HilbertTable {
    fn dimensions(&self) -> (i64, i64) {
        HilbertTable::dimensions(self)
    }

    fn map(&self, t: i64) -> Result<(i64, i64)> {
        HilbertTable::map(self, t)
    }

    fn map_inverse(&self, x: i64, y: i64) -> Result<i64> {
        HilbertTable::map_inverse(self, x, y)
    }
}
