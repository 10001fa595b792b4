//! Error types for package-identity.
//!
//! This core has no fatal failure modes: a malformed record must never halt a
//! scan. The variants here are *diagnostics* — either surfaced as a warning
//! next to a best-effort value (unrecognized ecosystems) or swallowed at the
//! call site after being observed (malformed purls during override
//! construction).

use thiserror::Error;

/// Recoverable diagnostics produced while resolving package identity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdentityError {
    /// The ecosystem tag on a record did not match any known ecosystem.
    ///
    /// Resolution still succeeds with [`Ecosystem::Unknown`]; this diagnostic
    /// rides alongside the parsed value so the caller decides how to surface
    /// it.
    ///
    /// [`Ecosystem::Unknown`]: crate::model::Ecosystem::Unknown
    #[error("unrecognized ecosystem {value:?}")]
    UnknownEcosystem { value: String },

    /// A package URL could not be parsed or mapped to a known ecosystem.
    #[error("malformed package URL {purl:?}: {reason}")]
    MalformedPurl { purl: String, reason: String },

    /// A package URL parsed but its type has no OSV ecosystem mapping.
    #[error("package URL type {ty:?} has no ecosystem mapping")]
    UnmappedPurlType { ty: String },
}

impl IdentityError {
    /// Create an unknown-ecosystem diagnostic.
    pub fn unknown_ecosystem(value: impl Into<String>) -> Self {
        Self::UnknownEcosystem {
            value: value.into(),
        }
    }

    /// Create a malformed-purl diagnostic.
    pub fn malformed_purl(purl: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPurl {
            purl: purl.into(),
            reason: reason.into(),
        }
    }
}

/// Convenient Result type for package-identity operations.
pub type Result<T> = std::result::Result<T, IdentityError>;
