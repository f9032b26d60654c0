//! Password generation.

pub mod assemble;
pub mod charset;
mod generate;
pub mod words;

pub use generate::{Generated, Report, generate, generate_with_fallback};
