//! Package URL ↔ identity conversion.
//!
//! SBOM documents describe components by purl, so SBOM-derived records get
//! their identity from the purl rather than from the raw name/version
//! fields the extractor happened to fill in. Parsing proper is delegated to
//! the `packageurl` crate; this module maps purl types onto OSV ecosystem
//! tags and composes the advisory-facing name out of namespace and name.

use crate::error::{IdentityError, Result};
use crate::model::Ecosystem;
use packageurl::PackageUrl;
use std::str::FromStr;

/// Secondary identity computed from a package URL.
///
/// Immutable once computed; when present it takes precedence over every
/// ecosystem-specific name/version rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideIdentity {
    pub name: String,
    pub version: String,
    pub ecosystem: String,
}

/// Map a purl type onto its OSV ecosystem tag.
fn ecosystem_for_purl_type(ty: &str) -> Option<Ecosystem> {
    Some(match ty {
        "apk" => Ecosystem::Alpine,
        "cargo" => Ecosystem::CratesIo,
        "cran" => Ecosystem::Cran,
        "deb" => Ecosystem::Debian,
        "gem" => Ecosystem::RubyGems,
        "golang" => Ecosystem::Go,
        "hackage" => Ecosystem::Hackage,
        "hex" => Ecosystem::Hex,
        "maven" => Ecosystem::Maven,
        "npm" => Ecosystem::Npm,
        "nuget" => Ecosystem::NuGet,
        "composer" => Ecosystem::Packagist,
        "pub" => Ecosystem::Pub,
        "pypi" => Ecosystem::PyPI,
        "swift" => Ecosystem::SwiftUrl,
        _ => return None,
    })
}

/// Compose the advisory-facing package name from purl namespace and name.
///
/// Maven advisories key on `group:artifact`; most namespaced ecosystems
/// (npm scopes, Go module paths, Composer vendors) join with `/`.
fn compose_name(purl: &PackageUrl<'_>) -> String {
    match purl.namespace() {
        Some(namespace) if purl.ty() == "maven" => format!("{namespace}:{}", purl.name()),
        Some(namespace) => format!("{namespace}/{}", purl.name()),
        None => purl.name().to_string(),
    }
}

/// Parse a purl string into an [`OverrideIdentity`].
///
/// Errors are diagnostics, not failures: the caller constructing an
/// override cache drops them and falls back to the ecosystem-specific
/// resolution rules.
pub fn to_identity(purl: &str) -> Result<OverrideIdentity> {
    let parsed = PackageUrl::from_str(purl)
        .map_err(|e| IdentityError::malformed_purl(purl, e.to_string()))?;

    let ecosystem = ecosystem_for_purl_type(parsed.ty()).ok_or_else(|| {
        IdentityError::UnmappedPurlType {
            ty: parsed.ty().to_string(),
        }
    })?;

    Ok(OverrideIdentity {
        name: compose_name(&parsed),
        version: parsed.version().unwrap_or_default().to_string(),
        ecosystem: ecosystem.to_string(),
    })
}
