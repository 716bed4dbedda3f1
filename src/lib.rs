//! Retext: Text Transformation Library
//!
//! A library for interactively transforming text files: case conversion,
//! sentence capitalization, line numbering, and whitespace cleanup.

pub mod cli;
pub mod report;
pub mod session;
pub mod transform;
pub mod utils;
