//! **Canonical package identity for heterogeneous inventory sources.**
//!
//! `package-identity` is the normalization layer between inventory
//! extractors and vulnerability matching. Extractors — OS package
//! databases, language package managers, SBOM documents, VCS metadata,
//! build-artifact scanners — all encode package identity differently:
//! different casing rules, different version conventions, different
//! embedded metadata shapes. Matching needs one consistent answer to
//! "what package is this, which ecosystem, what version, and what kind of
//! source said so." This crate gives that answer.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the raw inventory record ([`RawRecord`]) exactly as an
//!   extractor produced it, the [`PackageMetadata`] tagged union over the
//!   recognized extractor payloads, OSV-style ecosystems, and the
//!   per-package scan result.
//! - **[`identity`]**: the resolver. [`PackageIdentity`] wraps one record
//!   and exposes canonical accessors; [`SourceCategory`] classifies the
//!   producing extractor; `identity::purl` converts package URLs into
//!   override identities for SBOM-derived records.
//! - **[`extractor`]**: the seam to the external extractors — a trait plus
//!   the canonical names of the known upstream implementations.
//!
//! Everything is pure, synchronous computation over in-memory data. There
//! are no fatal error paths: malformed ecosystems and purls degrade to
//! best-effort values with a diagnostic, because one bad record must never
//! halt a scan.
//!
//! ## Getting Started
//!
//! ```
//! use package_identity::{PackageIdentity, RawRecord, SourceCategory};
//!
//! let record = RawRecord::new("My.Package__Name", "1.0.3", "PyPI");
//! let identity = PackageIdentity::from_record(&record);
//!
//! // PEP 503 normalization: styled spellings compare equal.
//! assert_eq!(identity.canonical_name(), "my-package-name");
//! assert_eq!(identity.version(), "1.0.3");
//! // No extractor reference on the record.
//! assert_eq!(identity.source_category(), SourceCategory::Unknown);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod extractor;
pub mod identity;
pub mod model;
pub mod utils;

// Re-export main types for convenience
pub use error::{IdentityError, Result};
pub use extractor::Extractor;
pub use identity::{classify, OverrideIdentity, PackageIdentity, SourceCategory};
pub use model::{
    ApkMetadata, DpkgMetadata, Ecosystem, EcosystemParse, JavaArchiveMetadata, LayerDetails,
    License, LockfileMetadata, PackageMetadata, PackageScanResult, ParsedEcosystem, RawRecord,
    RpmMetadata, Severity, SourceCodeIdentifier, Vulnerability,
};
