//! IO module for format-specific reading and writing operations.
//!
//! - `csv` - election tables, edge lists and result tables
//! - `fs` - output directories and all-or-nothing staging of result files

pub(crate) mod csv;
pub(crate) mod fs;
