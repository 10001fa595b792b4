//! Per-package scan results.
//!
//! A [`PackageScanResult`] pairs one resolved identity with whatever
//! enrichment the surrounding scan discovered for it: vulnerability
//! advisories, licenses, and container-layer provenance. It is created once
//! per resolved package per scan and not mutated after enrichment completes.

use crate::identity::PackageIdentity;
use serde::{Deserialize, Serialize};

/// One package's scan outcome.
#[derive(Debug)]
pub struct PackageScanResult<'a> {
    pub identity: PackageIdentity<'a>,
    pub vulnerabilities: Vec<Vulnerability>,
    pub licenses: Vec<License>,
    /// Which container image layer introduced the package, when scanning an
    /// image.
    pub layer_details: Option<LayerDetails>,
}

impl<'a> PackageScanResult<'a> {
    /// Start a result for a resolved identity, with no enrichment yet.
    #[must_use]
    pub fn new(identity: PackageIdentity<'a>) -> Self {
        Self {
            identity,
            vulnerabilities: Vec::new(),
            licenses: Vec::new(),
            layer_details: None,
        }
    }
}

/// A vulnerability advisory attached to a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Advisory identifier, e.g. `GHSA-...` or `CVE-...`.
    pub id: String,
    /// Alternate identifiers for the same advisory.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Severity scores, one per scoring system the advisory reports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub severity: Vec<Severity>,
}

/// One severity score on an advisory, e.g. a CVSS v3.1 vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Severity {
    /// Scoring system, e.g. `CVSS_V3`.
    #[serde(rename = "type")]
    pub severity_type: String,
    /// Score in that system's notation.
    pub score: String,
}

/// A license expression reported for a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct License(pub String);

impl License {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Container-layer provenance for a package found in an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDetails {
    /// Index of the layer within the image.
    pub index: usize,
    /// Layer diff ID.
    pub diff_id: String,
    /// The Dockerfile command that created the layer, if recorded.
    pub command: String,
    /// Whether the layer belongs to the detected base image.
    pub in_base_image: bool,
}
