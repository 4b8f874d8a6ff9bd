//! Hilbert space - locality-preserving mapping between 1D and 2D.
//!
//! This library maps a curve index in `[0, N^2)` to a cell of an `N x N` grid
//! along a Hilbert space-filling curve, and back. Indices that are close on
//! the curve land on cells that are close in the grid, which makes the mapping
//! useful for spatial indexes, tile caches and load distribution.
//!
//! ```
//! use hilbert_space::{HilbertSpace, SpaceFilling};
//!
//! let space = HilbertSpace::new(8, false)?;
//! let (x, y) = space.map(10)?;
//! assert_eq!(space.map_inverse(x, y)?, 10);
//!
//! // Any curve can be used through the shared trait.
//! let curve: &dyn SpaceFilling = &space;
//! assert_eq!(curve.dimensions(), (8, 8));
//! # Ok::<(), hilbert_space::Error>(())
//! ```

pub mod error;
pub mod hilbert;
pub mod space;

pub use error::{Error, Result};
pub use hilbert::{HilbertSpace, HilbertTable, MAX_ORDER, MAX_TABLE_ORDER};
pub use space::SpaceFilling;
