//! Raw inventory records as emitted by extractors.

use crate::extractor::Extractor;
use crate::model::PackageMetadata;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Source-control provenance attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCodeIdentifier {
    /// Repository URL or path, if known.
    pub repo: String,
    /// Commit hash the record was observed at.
    pub commit: String,
}

/// One package observation from a source of truth.
///
/// Created and owned upstream; the identity resolver holds a shared
/// reference for the duration of a scan pass and never mutates it. Only
/// `name` and `ecosystem` are required by the input contract — everything
/// else defaults to absent.
#[derive(Clone, Default)]
pub struct RawRecord {
    /// Package name exactly as the extractor recorded it.
    pub name: String,
    /// Version string exactly as the extractor recorded it.
    pub version: String,
    /// OSV-style ecosystem string, possibly with a release suffix.
    pub ecosystem: String,
    /// Filesystem locations the package was observed at.
    pub locations: Vec<String>,
    /// Source-control provenance, if the record came from a checkout.
    pub source_code: Option<SourceCodeIdentifier>,
    /// Extractor-specific payload.
    pub metadata: PackageMetadata,
    /// The extractor that produced this record, if known.
    pub extractor: Option<Arc<dyn Extractor>>,
}

impl RawRecord {
    /// Create a record with the two required fields; the rest start absent.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        ecosystem: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ecosystem: ecosystem.into(),
            ..Self::default()
        }
    }

    /// Attach filesystem locations.
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    /// Attach source-control provenance.
    #[must_use]
    pub fn with_source_code(mut self, source_code: SourceCodeIdentifier) -> Self {
        self.source_code = Some(source_code);
        self
    }

    /// Attach an extractor-specific metadata payload.
    #[must_use]
    pub fn with_metadata(mut self, metadata: PackageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Attach the producing extractor.
    #[must_use]
    pub fn with_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Name of the producing extractor, if any.
    #[must_use]
    pub fn extractor_name(&self) -> Option<&'static str> {
        self.extractor.as_deref().map(Extractor::name)
    }
}

impl fmt::Debug for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawRecord")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("ecosystem", &self.ecosystem)
            .field("locations", &self.locations)
            .field("source_code", &self.source_code)
            .field("metadata", &self.metadata)
            .field("extractor", &self.extractor_name())
            .finish()
    }
}
