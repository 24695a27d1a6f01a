//! MDX conversion tests
//!
//! Whole-document conversions through the public API.

mod lines;
