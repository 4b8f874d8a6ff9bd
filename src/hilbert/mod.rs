//! Hilbert curve mapping.
//!
//! This module provides:
//! - The computed Hilbert mapping, in standard or vertically stackable orientation
//! - Lookup-table acceleration for small orders

pub mod curve;
pub mod table;

pub use curve::{HilbertSpace, MAX_ORDER};
pub use table::{HilbertTable, MAX_TABLE_ORDER};
