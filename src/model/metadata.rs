//! Extractor-specific metadata payloads.
//!
//! Every extractor attaches its own metadata shape to the records it emits.
//! This core only needs to recognize a small fixed set of those shapes —
//! the three OS package databases, Java archives, and lockfiles that report
//! dependency groups — so the payload is an explicit tagged union with an
//! `Unknown` fallback, not open-ended type inspection.

use serde::{Deserialize, Serialize};

/// Metadata attached to a record by its producing extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PackageMetadata {
    /// Alpine `apk` database entry.
    Apk(ApkMetadata),
    /// Debian-family `dpkg` status entry.
    Dpkg(DpkgMetadata),
    /// RPM database entry.
    Rpm(RpmMetadata),
    /// Java archive (`.jar`/`.war`/`.ear`) manifest or pom identity.
    JavaArchive(JavaArchiveMetadata),
    /// Manifest/lockfile entry that reports dependency groups.
    Lockfile(LockfileMetadata),
    /// Payload from an extractor this core does not recognize, or none.
    #[default]
    Unknown,
}

impl PackageMetadata {
    /// Dependency-group tags (`"dev"`, `"optional"`, ...) if the payload
    /// reports them, empty otherwise.
    #[must_use]
    pub fn dep_groups(&self) -> &[String] {
        match self {
            Self::Lockfile(m) => &m.dep_groups,
            _ => &[],
        }
    }
}

/// Alpine `apk` metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApkMetadata {
    /// Binary package name as installed.
    pub package_name: String,
    /// Origin (source) package the binary was built from.
    pub origin_name: String,
    pub os_id: String,
    pub os_version_id: String,
    pub architecture: String,
}

/// Debian-family `dpkg` metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpkgMetadata {
    /// Binary package name as installed.
    pub package_name: String,
    /// Source package name; advisories key on this, not the binary name.
    pub source_name: String,
    pub source_version: String,
    pub os_id: String,
    pub os_version_codename: String,
    pub architecture: String,
}

/// RPM-family metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpmMetadata {
    /// Binary package name as installed.
    pub package_name: String,
    pub source_rpm: String,
    pub epoch: u64,
    pub os_id: String,
    pub os_version_id: String,
    pub architecture: String,
}

/// Java archive metadata carrying the Maven coordinates found inside the
/// archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaArchiveMetadata {
    pub artifact_id: String,
    pub group_id: String,
    pub sha1: String,
}

/// Metadata for lockfile entries that carry dependency-group tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockfileMetadata {
    /// Groups the dependency belongs to, e.g. `"dev"` or `"test"`.
    pub dep_groups: Vec<String>,
}
