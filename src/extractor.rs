//! The extractor seam.
//!
//! Extractors are external collaborators: each one owns the parsing of its
//! source format (an OS package database, a lockfile, an SBOM document, a
//! git checkout) and emits [`RawRecord`]s upstream of this crate. Identity
//! resolution only needs two things from them: a stable name for
//! classification, and — for SBOM extractors — the ability to render a
//! record back into a package URL.

use crate::model::RawRecord;
use packageurl::PackageUrl;

/// A producer of raw inventory records.
///
/// Implementations live outside this crate. `Send + Sync` is required so
/// records can be produced by parallel scan workers; the trait itself is
/// stateless from this crate's point of view.
pub trait Extractor: Send + Sync {
    /// Stable identifier for this extractor, used by the source classifier.
    /// Known upstream names are collected in [`names`].
    fn name(&self) -> &'static str;

    /// Render a record as a package URL, if this extractor can.
    ///
    /// Only SBOM extractors are expected to implement this meaningfully;
    /// the default is `None`, which leaves identity resolution to the
    /// ecosystem-specific rules.
    fn to_purl(&self, _record: &RawRecord) -> Option<PackageUrl<'static>> {
        None
    }
}

/// Canonical names of the known upstream extractors.
///
/// The source classifier's lookup table is built from these; using the
/// constants keeps the classifier and extractor implementations agreeing on
/// spelling.
pub mod names {
    // OS package databases
    pub const DPKG: &str = "os/dpkg";
    pub const APK: &str = "os/apk";
    pub const RPM: &str = "os/rpm";

    // SBOM documents
    pub const SPDX: &str = "sbom/spdx";
    pub const CDX: &str = "sbom/cdx";

    // Version control
    pub const GIT_REPO: &str = "vcs/gitrepo";

    // Build artifacts
    pub const NODE_MODULES: &str = "javascript/nodemodules";
    pub const GO_BINARY: &str = "go/binary";
    pub const JAVA_ARCHIVE: &str = "java/archive";
    pub const PYTHON_WHEEL_EGG: &str = "python/wheelegg";
}
