//! Data model for raw inventory records and scan results.
//!
//! Records enter this crate exactly as their extractors produced them
//! ([`RawRecord`]) and leave it as one canonical identity per package,
//! aggregated with enrichment into a [`PackageScanResult`]. The types here
//! are format-agnostic: every extractor-specific detail lives inside the
//! [`PackageMetadata`] tagged union.

mod ecosystem;
mod metadata;
mod record;
mod scan_result;

pub use ecosystem::*;
pub use metadata::*;
pub use record::*;
pub use scan_result::*;
