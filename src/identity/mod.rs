//! Canonical identity resolution.
//!
//! Every upstream extractor encodes package identity a little differently:
//! name casing rules, version conventions, metadata shapes. Downstream
//! vulnerability matching needs exactly one identity per package, so this
//! module wraps each [`RawRecord`](crate::model::RawRecord) in a
//! [`PackageIdentity`] that applies the ecosystem-specific canonicalization
//! rules — and, for SBOM-derived records whose raw fields are not
//! trustworthy, a purl-derived [`OverrideIdentity`] computed once at wrap
//! time.

mod classify;
pub mod purl;
mod resolver;

pub use classify::{classify, SourceCategory};
pub use purl::OverrideIdentity;
pub use resolver::PackageIdentity;
