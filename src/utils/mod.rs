//! Small shared utilities.

mod version;

pub use version::*;
