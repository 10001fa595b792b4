//! The identity resolver: canonical accessors over one raw record.

use crate::identity::{classify, purl, OverrideIdentity, SourceCategory};
use crate::model::{Ecosystem, PackageMetadata, ParsedEcosystem, RawRecord};
use crate::utils::parse_semver_like;
use regex::Regex;
use std::sync::LazyLock;

/// Raw name a Go binary reports for its own toolchain runtime.
const GO_SELF_REFERENCE: &str = "go";
/// Package name advisories use for the Go standard library.
const GO_STDLIB: &str = "stdlib";

/// PEP 503: runs of `-`, `_`, `.` collapse to a single `-`.
static PYPI_NAME_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.]+").expect("static regex"));

/// Canonical view of one raw inventory record.
///
/// Wraps exactly one [`RawRecord`] without mutating it; every accessor is
/// idempotent and side-effect-free apart from a lazy `tracing::warn!` when
/// the ecosystem string does not parse. Each resolver instance is
/// independent — parallel scan workers each wrap their own records, nothing
/// is shared or locked.
#[derive(Debug, Clone)]
pub struct PackageIdentity<'a> {
    record: &'a RawRecord,
    /// Purl-derived identity for SBOM records. Computed once at wrap time,
    /// immutable afterwards, preferred over every ecosystem-specific rule.
    override_identity: Option<OverrideIdentity>,
}

impl<'a> PackageIdentity<'a> {
    /// Wrap a record.
    ///
    /// For SBOM-derived records this computes the override identity by
    /// rendering the record back into a purl and parsing that. A missing or
    /// unparseable purl leaves the override empty and the ecosystem-specific
    /// rules apply — SBOM identity is best-effort.
    #[must_use]
    pub fn from_record(record: &'a RawRecord) -> Self {
        let mut identity = Self {
            record,
            override_identity: None,
        };

        if identity.source_category() == SourceCategory::SbomDocument {
            identity.override_identity = record
                .extractor
                .as_deref()
                .and_then(|extractor| extractor.to_purl(record))
                .and_then(|p| purl::to_identity(&p.to_string()).ok());
        }

        identity
    }

    /// The wrapped record.
    #[must_use]
    pub fn record(&self) -> &'a RawRecord {
        self.record
    }

    /// Canonical package name, the spelling vulnerability databases key on.
    ///
    /// Exactly one rule fires, in priority order: purl override, Go
    /// toolchain self-reference, PEP 503 normalization for PyPI, Maven
    /// `group:artifact` coordinates, dpkg source name, apk origin name, and
    /// finally the raw name unchanged. The order is load-bearing — the later
    /// rules are narrower overrides of the raw name, not of each other.
    #[must_use]
    pub fn canonical_name(&self) -> String {
        if let Some(override_identity) = &self.override_identity {
            return override_identity.name.clone();
        }

        let ecosystem = self.ecosystem().ecosystem;

        // A Go binary reports its own runtime as module "go"; advisories
        // track it as "stdlib".
        if ecosystem == Ecosystem::Go && self.record.name == GO_SELF_REFERENCE {
            return GO_STDLIB.to_string();
        }

        // PEP 503 normalized names, so differently-styled spellings of the
        // same PyPI package compare equal.
        if ecosystem == Ecosystem::PyPI {
            return PYPI_NAME_SEPARATORS
                .replace_all(&self.record.name.to_lowercase(), "-")
                .into_owned();
        }

        match &self.record.metadata {
            PackageMetadata::JavaArchive(m) if !m.artifact_id.is_empty() && !m.group_id.is_empty() => {
                format!("{}:{}", m.group_id, m.artifact_id)
            }
            // Debian advisories key on the source package, not the binary.
            PackageMetadata::Dpkg(m) if !m.source_name.is_empty() => m.source_name.clone(),
            PackageMetadata::Apk(m) if !m.origin_name.is_empty() => m.origin_name.clone(),
            _ => self.record.name.clone(),
        }
    }

    /// Parsed ecosystem, from the override if present, else the raw record.
    ///
    /// Unparseable ecosystem strings are warned about and resolved to
    /// [`Ecosystem::Unknown`] — never an error, so one malformed record
    /// cannot halt a scan.
    #[must_use]
    pub fn ecosystem(&self) -> ParsedEcosystem {
        let raw = self
            .override_identity
            .as_ref()
            .map_or(self.record.ecosystem.as_str(), |o| o.ecosystem.as_str());

        let outcome = ParsedEcosystem::parse(raw);
        if let Some(warning) = &outcome.warning {
            tracing::warn!("{warning}");
        }
        outcome.parsed
    }

    /// Canonical version string.
    ///
    /// Go toolchains before the module era record only `major.minor` for the
    /// standard library; those get a synthesized patch of 99 so they match
    /// as "latest patch of this minor release". That deliberately trades a
    /// possible missed true positive for far fewer false positives against
    /// an unknown real patch level. Three-component versions pass through
    /// untouched.
    #[must_use]
    pub fn version(&self) -> String {
        if let Some(override_identity) = &self.override_identity {
            return override_identity.version.clone();
        }

        if self.ecosystem().ecosystem == Ecosystem::Go && self.canonical_name() == GO_STDLIB {
            let parsed = parse_semver_like(&self.record.version, 3);
            if let [major, minor] = parsed.components[..] {
                return format!("{major}.{minor}.99");
            }
        }

        self.record.version.clone()
    }

    /// First recorded filesystem location, or `""`.
    #[must_use]
    pub fn location(&self) -> &str {
        self.record.locations.first().map_or("", String::as_str)
    }

    /// Source-control commit hash, or `""` when the record has no
    /// source-code provenance.
    #[must_use]
    pub fn commit(&self) -> &str {
        self.record
            .source_code
            .as_ref()
            .map_or("", |sc| sc.commit.as_str())
    }

    /// Category of the extractor that produced the record.
    #[must_use]
    pub fn source_category(&self) -> SourceCategory {
        classify(self.record.extractor_name())
    }

    /// Dependency-group tags from the metadata payload, empty if the
    /// payload does not report any.
    #[must_use]
    pub fn dependency_groups(&self) -> &[String] {
        self.record.metadata.dep_groups()
    }

    /// Binary package name for OS-database records, `""` otherwise.
    ///
    /// Distinct from [`canonical_name`](Self::canonical_name): OS tooling
    /// needs the installed *binary* name even when advisories key on the
    /// *source* name.
    #[must_use]
    pub fn os_package_name(&self) -> &str {
        match &self.record.metadata {
            PackageMetadata::Apk(m) => &m.package_name,
            PackageMetadata::Dpkg(m) => &m.package_name,
            PackageMetadata::Rpm(m) => &m.package_name,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ApkMetadata, DpkgMetadata, JavaArchiveMetadata, LockfileMetadata, RpmMetadata,
        SourceCodeIdentifier,
    };

    #[test]
    fn test_raw_name_passes_through() {
        let record = RawRecord::new("lodash", "4.17.21", "npm");
        let identity = PackageIdentity::from_record(&record);
        assert_eq!(identity.canonical_name(), "lodash");
        assert_eq!(identity.version(), "4.17.21");
    }

    #[test]
    fn test_pypi_names_normalize_equal() {
        let styled = RawRecord::new("My.Package__Name", "1.0", "PyPI");
        let plain = RawRecord::new("my-package-name", "1.0", "PyPI");
        assert_eq!(
            PackageIdentity::from_record(&styled).canonical_name(),
            PackageIdentity::from_record(&plain).canonical_name()
        );
        assert_eq!(
            PackageIdentity::from_record(&styled).canonical_name(),
            "my-package-name"
        );
    }

    #[test]
    fn test_go_self_reference_becomes_stdlib() {
        let record = RawRecord::new("go", "1.19.4", "Go");
        assert_eq!(PackageIdentity::from_record(&record).canonical_name(), "stdlib");
    }

    #[test]
    fn test_go_stdlib_patch_synthesis() {
        let two = RawRecord::new("go", "1.19", "Go");
        assert_eq!(PackageIdentity::from_record(&two).version(), "1.19.99");

        let three = RawRecord::new("go", "1.19.4", "Go");
        assert_eq!(PackageIdentity::from_record(&three).version(), "1.19.4");
    }

    #[test]
    fn test_go_patch_synthesis_only_for_stdlib() {
        let record = RawRecord::new("github.com/gorilla/mux", "1.8", "Go");
        assert_eq!(PackageIdentity::from_record(&record).version(), "1.8");
    }

    #[test]
    fn test_dpkg_source_name_wins_canonical_binary_stays_os() {
        let record = RawRecord::new("foo", "1.0", "Debian:12").with_metadata(
            PackageMetadata::Dpkg(DpkgMetadata {
                package_name: "foo".to_string(),
                source_name: "foo-src".to_string(),
                ..DpkgMetadata::default()
            }),
        );
        let identity = PackageIdentity::from_record(&record);
        assert_eq!(identity.canonical_name(), "foo-src");
        assert_eq!(identity.os_package_name(), "foo");
    }

    #[test]
    fn test_dpkg_empty_source_name_falls_back() {
        let record = RawRecord::new("foo", "1.0", "Debian:12").with_metadata(
            PackageMetadata::Dpkg(DpkgMetadata {
                package_name: "foo".to_string(),
                ..DpkgMetadata::default()
            }),
        );
        assert_eq!(PackageIdentity::from_record(&record).canonical_name(), "foo");
    }

    #[test]
    fn test_apk_origin_name() {
        let record = RawRecord::new("libcrypto3", "3.1.4-r5", "Alpine:v3.19").with_metadata(
            PackageMetadata::Apk(ApkMetadata {
                package_name: "libcrypto3".to_string(),
                origin_name: "openssl".to_string(),
                ..ApkMetadata::default()
            }),
        );
        let identity = PackageIdentity::from_record(&record);
        assert_eq!(identity.canonical_name(), "openssl");
        assert_eq!(identity.os_package_name(), "libcrypto3");
    }

    #[test]
    fn test_java_archive_coordinates() {
        let record = RawRecord::new("log4j-core-2.14.1.jar", "2.14.1", "Maven").with_metadata(
            PackageMetadata::JavaArchive(JavaArchiveMetadata {
                artifact_id: "log4j-core".to_string(),
                group_id: "org.apache.logging.log4j".to_string(),
                sha1: String::new(),
            }),
        );
        assert_eq!(
            PackageIdentity::from_record(&record).canonical_name(),
            "org.apache.logging.log4j:log4j-core"
        );
    }

    #[test]
    fn test_java_archive_partial_coordinates_fall_back() {
        let record = RawRecord::new("mystery.jar", "1.0", "Maven").with_metadata(
            PackageMetadata::JavaArchive(JavaArchiveMetadata {
                artifact_id: "mystery".to_string(),
                group_id: String::new(),
                sha1: String::new(),
            }),
        );
        assert_eq!(
            PackageIdentity::from_record(&record).canonical_name(),
            "mystery.jar"
        );
    }

    #[test]
    fn test_rpm_binary_name() {
        let record = RawRecord::new("bash", "5.2.26", "Red Hat:9").with_metadata(
            PackageMetadata::Rpm(RpmMetadata {
                package_name: "bash".to_string(),
                ..RpmMetadata::default()
            }),
        );
        assert_eq!(PackageIdentity::from_record(&record).os_package_name(), "bash");
    }

    #[test]
    fn test_location_first_or_empty() {
        let none = RawRecord::new("a", "1", "npm");
        assert_eq!(PackageIdentity::from_record(&none).location(), "");

        let some = RawRecord::new("a", "1", "npm")
            .with_locations(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(PackageIdentity::from_record(&some).location(), "a");
    }

    #[test]
    fn test_commit_or_empty() {
        let plain = RawRecord::new("a", "1", "npm");
        assert_eq!(PackageIdentity::from_record(&plain).commit(), "");

        let committed = RawRecord::new("a", "", "GIT").with_source_code(SourceCodeIdentifier {
            repo: "https://example.com/a.git".to_string(),
            commit: "0e5d0f3ed2cbecf8f319d8dd9dd6d185aa4b5b5c".to_string(),
        });
        assert_eq!(
            PackageIdentity::from_record(&committed).commit(),
            "0e5d0f3ed2cbecf8f319d8dd9dd6d185aa4b5b5c"
        );
    }

    #[test]
    fn test_dependency_groups_or_empty() {
        let plain = RawRecord::new("a", "1", "npm");
        assert!(PackageIdentity::from_record(&plain)
            .dependency_groups()
            .is_empty());

        let grouped = RawRecord::new("a", "1", "npm").with_metadata(PackageMetadata::Lockfile(
            LockfileMetadata {
                dep_groups: vec!["dev".to_string()],
            },
        ));
        assert_eq!(
            PackageIdentity::from_record(&grouped).dependency_groups(),
            ["dev"]
        );
    }

    #[test]
    fn test_unknown_ecosystem_is_best_effort() {
        let record = RawRecord::new("pkg", "1.0", "SomethingNew:2024");
        let parsed = PackageIdentity::from_record(&record).ecosystem();
        assert_eq!(
            parsed.ecosystem,
            Ecosystem::Unknown("SomethingNew".to_string())
        );
        assert_eq!(parsed.suffix.as_deref(), Some("2024"));
    }
}
