//! Shared terminal utilities.
//!
//! Box drawing, number formatting and the entropy summary.

mod output;

pub use output::*;
