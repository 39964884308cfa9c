//! Application configuration and constants.
//!
//! The store initializes from a fixed seed dataset and has no external
//! configuration surface, so this module only carries constants.

pub mod constants;

pub use constants::*;
