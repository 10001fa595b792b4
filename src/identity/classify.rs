//! Source classification: which kind of extractor produced a record.
//!
//! The mapping from extractor name to category is a single fixed table
//! built on first use, so the "four disjoint sets" invariant is auditable
//! in one place instead of scattered through conditionals. Classification
//! is total: unrecognized extractors default to [`SourceCategory::ProjectPackage`]
//! (a manifest or lockfile local to the scanned project) and a record with
//! no extractor at all is [`SourceCategory::Unknown`].

use crate::extractor::names;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Category of the source of truth a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceCategory {
    /// OS package database (dpkg, apk, rpm).
    OsPackage,
    /// SBOM document (SPDX, CycloneDX).
    SbomDocument,
    /// Version-control metadata (git checkout).
    VersionControl,
    /// Installed build artifact (node_modules, Go binary, jar, wheel/egg).
    BuildArtifact,
    /// Manifest or lockfile declared by the scanned project. The default
    /// assumption for extractors not listed in any other set.
    ProjectPackage,
    /// Record carries no extractor reference.
    Unknown,
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OsPackage => "os",
            Self::SbomDocument => "sbom",
            Self::VersionControl => "git",
            Self::BuildArtifact => "artifact",
            Self::ProjectPackage => "project",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

const OS_EXTRACTORS: &[&str] = &[names::DPKG, names::APK, names::RPM];
const SBOM_EXTRACTORS: &[&str] = &[names::SPDX, names::CDX];
const VCS_EXTRACTORS: &[&str] = &[names::GIT_REPO];
const ARTIFACT_EXTRACTORS: &[&str] = &[
    names::NODE_MODULES,
    names::GO_BINARY,
    names::JAVA_ARCHIVE,
    names::PYTHON_WHEEL_EGG,
];

static CATEGORY_TABLE: LazyLock<HashMap<&'static str, SourceCategory>> = LazyLock::new(|| {
    let groups = [
        (OS_EXTRACTORS, SourceCategory::OsPackage),
        (SBOM_EXTRACTORS, SourceCategory::SbomDocument),
        (VCS_EXTRACTORS, SourceCategory::VersionControl),
        (ARTIFACT_EXTRACTORS, SourceCategory::BuildArtifact),
    ];

    let mut table = HashMap::new();
    for (group, category) in groups {
        for name in group {
            let previous = table.insert(*name, category);
            debug_assert!(previous.is_none(), "extractor {name} listed in two sets");
        }
    }
    table
});

/// Classify an extractor name into a source category.
///
/// Total: `None` (no extractor on the record) is [`SourceCategory::Unknown`],
/// and names outside the table are [`SourceCategory::ProjectPackage`].
#[must_use]
pub fn classify(extractor_name: Option<&str>) -> SourceCategory {
    match extractor_name {
        None => SourceCategory::Unknown,
        Some(name) => CATEGORY_TABLE
            .get(name)
            .copied()
            .unwrap_or(SourceCategory::ProjectPackage),
    }
}
