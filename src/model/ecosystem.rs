//! OSV-style ecosystem tags and their structured decomposition.
//!
//! Vulnerability databases key advisories by ecosystem strings such as
//! `npm`, `crates.io`, or `Debian:11`. The part after the first `:` is a
//! release suffix (a Linux distribution release, usually) and is kept
//! separate from the base tag so matching logic can compare at either
//! granularity.
//!
//! Parsing is total: an unrecognized base tag becomes
//! [`Ecosystem::Unknown`] and the diagnostic travels *next to* the parsed
//! value rather than replacing it, so a single malformed record never stops
//! a scan.

use crate::error::IdentityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base ecosystem tag, using the spellings the OSV schema uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Ecosystem {
    AlmaLinux,
    Alpine,
    Cran,
    CratesIo,
    Debian,
    Go,
    Hackage,
    Hex,
    Linux,
    Maven,
    Npm,
    NuGet,
    OssFuzz,
    Packagist,
    Pub,
    PyPI,
    RedHat,
    RockyLinux,
    RubyGems,
    SwiftUrl,
    Ubuntu,
    Wolfi,
    /// Base tag that matched none of the known ecosystems. Carried verbatim
    /// so downstream output still round-trips the original string.
    Unknown(String),
}

impl Ecosystem {
    /// Look up a base tag (no suffix) against the known OSV spellings.
    fn from_osv_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "AlmaLinux" => Self::AlmaLinux,
            "Alpine" => Self::Alpine,
            "CRAN" => Self::Cran,
            "crates.io" => Self::CratesIo,
            "Debian" => Self::Debian,
            "Go" => Self::Go,
            "Hackage" => Self::Hackage,
            "Hex" => Self::Hex,
            "Linux" => Self::Linux,
            "Maven" => Self::Maven,
            "npm" => Self::Npm,
            "NuGet" => Self::NuGet,
            "OSS-Fuzz" => Self::OssFuzz,
            "Packagist" => Self::Packagist,
            "Pub" => Self::Pub,
            "PyPI" => Self::PyPI,
            "Red Hat" => Self::RedHat,
            "Rocky Linux" => Self::RockyLinux,
            "RubyGems" => Self::RubyGems,
            "SwiftURL" => Self::SwiftUrl,
            "Ubuntu" => Self::Ubuntu,
            "Wolfi" => Self::Wolfi,
            _ => return None,
        })
    }

    /// Returns true for ecosystems whose records come from an OS package
    /// database rather than a language package manager.
    #[must_use]
    pub fn is_os(&self) -> bool {
        matches!(
            self,
            Self::AlmaLinux
                | Self::Alpine
                | Self::Debian
                | Self::Linux
                | Self::RedHat
                | Self::RockyLinux
                | Self::Ubuntu
                | Self::Wolfi
        )
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::AlmaLinux => "AlmaLinux",
            Self::Alpine => "Alpine",
            Self::Cran => "CRAN",
            Self::CratesIo => "crates.io",
            Self::Debian => "Debian",
            Self::Go => "Go",
            Self::Hackage => "Hackage",
            Self::Hex => "Hex",
            Self::Linux => "Linux",
            Self::Maven => "Maven",
            Self::Npm => "npm",
            Self::NuGet => "NuGet",
            Self::OssFuzz => "OSS-Fuzz",
            Self::Packagist => "Packagist",
            Self::Pub => "Pub",
            Self::PyPI => "PyPI",
            Self::RedHat => "Red Hat",
            Self::RockyLinux => "Rocky Linux",
            Self::RubyGems => "RubyGems",
            Self::SwiftUrl => "SwiftURL",
            Self::Ubuntu => "Ubuntu",
            Self::Wolfi => "Wolfi",
            Self::Unknown(s) => s,
        };
        write!(f, "{tag}")
    }
}

/// Structured decomposition of an ecosystem string: base tag plus optional
/// release suffix (`Debian:11` → base `Debian`, suffix `11`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedEcosystem {
    pub ecosystem: Ecosystem,
    pub suffix: Option<String>,
}

/// A parsed ecosystem together with the diagnostic that parsing may have
/// produced. The parsed value is always usable.
#[derive(Debug, Clone)]
pub struct EcosystemParse {
    pub parsed: ParsedEcosystem,
    pub warning: Option<IdentityError>,
}

impl ParsedEcosystem {
    /// Parse an ecosystem string. Never fails: an unrecognized base tag is
    /// kept as [`Ecosystem::Unknown`] and reported through the returned
    /// warning.
    #[must_use]
    pub fn parse(value: &str) -> EcosystemParse {
        let (base, suffix) = match value.split_once(':') {
            Some((base, suffix)) => (base, Some(suffix.to_string())),
            None => (value, None),
        };

        match Ecosystem::from_osv_tag(base) {
            Some(ecosystem) => EcosystemParse {
                parsed: Self { ecosystem, suffix },
                warning: None,
            },
            None => EcosystemParse {
                parsed: Self {
                    ecosystem: Ecosystem::Unknown(base.to_string()),
                    suffix,
                },
                warning: Some(IdentityError::unknown_ecosystem(value)),
            },
        }
    }
}

impl fmt::Display for ParsedEcosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suffix {
            Some(suffix) => write!(f, "{}:{suffix}", self.ecosystem),
            None => write!(f, "{}", self.ecosystem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_tag() {
        let EcosystemParse { parsed, warning } = ParsedEcosystem::parse("PyPI");
        assert_eq!(parsed.ecosystem, Ecosystem::PyPI);
        assert_eq!(parsed.suffix, None);
        assert!(warning.is_none());
    }

    #[test]
    fn test_parse_distro_suffix() {
        let EcosystemParse { parsed, warning } = ParsedEcosystem::parse("Debian:11");
        assert_eq!(parsed.ecosystem, Ecosystem::Debian);
        assert_eq!(parsed.suffix.as_deref(), Some("11"));
        assert!(warning.is_none());
        assert_eq!(parsed.to_string(), "Debian:11");
    }

    #[test]
    fn test_parse_unknown_is_best_effort() {
        let EcosystemParse { parsed, warning } = ParsedEcosystem::parse("FreeBSD:14");
        assert_eq!(
            parsed.ecosystem,
            Ecosystem::Unknown("FreeBSD".to_string())
        );
        assert_eq!(parsed.suffix.as_deref(), Some("14"));
        let warning = warning.expect("unknown tag should produce a diagnostic");
        assert!(warning.to_string().contains("FreeBSD:14"));
    }

    #[test]
    fn test_display_round_trips_osv_spellings() {
        for tag in ["crates.io", "Red Hat", "OSS-Fuzz", "npm", "Alpine:v3.20"] {
            let parse = ParsedEcosystem::parse(tag);
            assert_eq!(parse.parsed.to_string(), tag);
        }
    }

    #[test]
    fn test_is_os() {
        assert!(Ecosystem::Alpine.is_os());
        assert!(Ecosystem::Ubuntu.is_os());
        assert!(!Ecosystem::Npm.is_os());
        assert!(!Ecosystem::Unknown("BSD".into()).is_os());
    }
}
