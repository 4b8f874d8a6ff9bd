//! Hilbert curve algorithms for mapping between 1D and 2D coordinates.
//!
//! The Hilbert curve is a space-filling curve that provides good locality preservation:
//! indices that are close on the curve land on cells that are close in the grid.
//!
//! Both directions walk the quadrant levels of the curve once, so every call is
//! `O(log N)` and allocation free.

use crate::error::{Error, Result};
use crate::space::SpaceFilling;

/// Largest supported curve order. `N * N` must fit the `i64` index domain.
pub const MAX_ORDER: i64 = 1 << 31;

/// Rotate/flip a quadrant appropriately for the Hilbert curve transformation.
///
/// During the inverse walk `x` or `y` may still carry bits above the current
/// quadrant size, so the reflection can go negative. Only bits below `n` are
/// read afterwards, and two's complement keeps those correct.
#[inline(always)]
fn rot(n: i64, x: i64, y: i64, rx: bool, ry: bool) -> (i64, i64) {
    if ry {
        return (x, y);
    }
    if rx {
        (n - 1 - y, n - 1 - x)
    } else {
        (y, x)
    }
}

/// A 2D Hilbert space of order `N`, covering an `N x N` grid.
///
/// With `vertical_compatible` set, the curve is rotated 90 degrees and then
/// reflected across the horizontal axis. Instead of the usual "U" the curve
/// traces a backwards "C", so several spaces stacked on top of each other
/// keep the locality property across the seams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HilbertSpace {
    order: i64,
    vertical_compatible: bool,
}

impl HilbertSpace {
    /// Create a Hilbert space of order `n`.
    ///
    /// # Errors
    /// * [`Error::InvalidOrder`] when `n <= 0`
    /// * [`Error::NotPowerOfTwo`] when `n` is positive but not a power of two
    /// * [`Error::OrderTooLarge`] when `n > MAX_ORDER`
    ///
    /// # Examples
    /// ```
    /// use hilbert_space::HilbertSpace;
    /// let space = HilbertSpace::new(4, false).unwrap();
    /// assert_eq!(space.map(2).unwrap(), (1, 1));
    /// assert_eq!(space.map_inverse(1, 1).unwrap(), 2);
    /// ```
    pub fn new(n: i64, vertical_compatible: bool) -> Result<Self> {
        if n <= 0 {
            return Err(Error::InvalidOrder(n));
        }
        if n & (n - 1) != 0 {
            return Err(Error::NotPowerOfTwo(n));
        }
        if n > MAX_ORDER {
            return Err(Error::OrderTooLarge {
                order: n,
                max: MAX_ORDER,
            });
        }

        tracing::trace!(order = n, vertical_compatible, "created hilbert space");

        Ok(Self {
            order: n,
            vertical_compatible,
        })
    }

    /// Side length `N` of the grid.
    #[inline]
    pub fn order(&self) -> i64 {
        self.order
    }

    /// Whether the rotated, stackable orientation is in use.
    #[inline]
    pub fn is_vertical_compatible(&self) -> bool {
        self.vertical_compatible
    }

    /// Number of cells on the curve, `N * N`.
    #[inline]
    pub fn len(&self) -> i64 {
        self.order * self.order
    }

    /// Always false; the smallest space holds a single cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Width and height of the space, always `(N, N)`.
    #[inline]
    pub fn dimensions(&self) -> (i64, i64) {
        (self.order, self.order)
    }

    /// Convert a distance along the curve to `(x, y)` coordinates.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] unless `0 <= t < N * N`.
    pub fn map(&self, t: i64) -> Result<(i64, i64)> {
        if t < 0 || t >= self.len() {
            return Err(Error::IndexOutOfRange {
                index: t,
                len: self.len(),
            });
        }

        let n = self.order;
        let mut x = 0i64;
        let mut y = 0i64;
        let mut s = 1i64;
        let mut t = t;

        while s < n {
            let rx = t & 2 != 0;
            let ry = (t & 1 != 0) ^ rx;

            (x, y) = rot(s, x, y, rx, ry);

            if rx {
                x += s;
            }
            if ry {
                y += s;
            }
            t /= 4;
            s *= 2;
        }

        if self.vertical_compatible {
            // Rotate 90 degrees counter clockwise.
            (x, y) = (y, n - 1 - x);
            // Reflect across the horizontal axis.
            y = n - 1 - y;
        }

        Ok((x, y))
    }

    /// Convert `(x, y)` coordinates to the distance along the curve.
    ///
    /// # Errors
    /// [`Error::CoordinateOutOfRange`] unless both coordinates lie in `[0, N)`.
    pub fn map_inverse(&self, x: i64, y: i64) -> Result<i64> {
        let n = self.order;
        if x < 0 || x >= n || y < 0 || y >= n {
            return Err(Error::CoordinateOutOfRange { x, y, order: n });
        }

        let mut x = x;
        let mut y = y;

        if self.vertical_compatible {
            // Undo the reflection, then the rotation.
            y = n - 1 - y;
            (x, y) = (n - 1 - y, x);
        }

        let mut d = 0i64;
        let mut s = n / 2;

        while s > 0 {
            let rx = x & s != 0;
            let ry = y & s != 0;
            let quadrant = (if rx { 3 } else { 0 }) ^ i64::from(ry);
            d += s * s * quadrant;
            (x, y) = rot(s, x, y, rx, ry);
            s /= 2;
        }

        Ok(d)
    }
}

impl SpaceFilling for HilbertSpace {
    fn dimensions(&self) -> (i64, i64) {
        HilbertSpace::dimensions(self)
    }

    fn map(&self, t: i64) -> Result<(i64, i64)> {
        HilbertSpace::map(self, t)
    }

    fn map_inverse(&self, x: i64, y: i64) -> Result<i64> {
        HilbertSpace::map_inverse(self, x, y)
    }
}
