//! Loose version decomposition.
//!
//! Inventory version strings are rarely valid semver (`1.19`, `go1.19.4`,
//! `1.2.3-r0`). This parser pulls out the leading dotted numeric components
//! and keeps whatever follows as an opaque build tail, which is all the
//! identity rules need.

/// A version split into leading numeric components and a build tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemverLikeVersion {
    /// Leading dotted numeric components, at most the cap passed to
    /// [`parse_semver_like`].
    pub components: Vec<u64>,
    /// Everything after the numeric prefix, verbatim (may be empty).
    pub build: String,
    /// The input, untouched.
    pub original: String,
}

/// Parse up to `max_components` leading dotted numeric components.
///
/// A leading `v` or `go` prefix is tolerated. Parsing stops at the first
/// segment that is not purely numeric; the rest of the string becomes
/// `build`. Never fails — a fully non-numeric input just has no components.
#[must_use]
pub fn parse_semver_like(value: &str, max_components: usize) -> SemverLikeVersion {
    let trimmed = value
        .strip_prefix("go")
        .or_else(|| value.strip_prefix('v'))
        .unwrap_or(value);

    let mut components = Vec::new();
    let mut consumed = 0;

    for (i, segment) in trimmed.split('.').enumerate() {
        if components.len() == max_components {
            break;
        }
        let Ok(number) = segment.parse::<u64>() else {
            break;
        };
        components.push(number);
        // Account for the dot separator on all but the first segment.
        consumed += segment.len() + usize::from(i > 0);
    }

    SemverLikeVersion {
        components,
        build: trimmed[consumed..].to_string(),
        original: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_components() {
        let v = parse_semver_like("1.19", 3);
        assert_eq!(v.components, [1, 19]);
        assert_eq!(v.build, "");
    }

    #[test]
    fn test_three_components() {
        let v = parse_semver_like("1.19.4", 3);
        assert_eq!(v.components, [1, 19, 4]);
    }

    #[test]
    fn test_component_cap() {
        let v = parse_semver_like("1.2.3.4.5", 3);
        assert_eq!(v.components, [1, 2, 3]);
        assert_eq!(v.build, ".4.5");
    }

    #[test]
    fn test_go_prefix() {
        let v = parse_semver_like("go1.21", 3);
        assert_eq!(v.components, [1, 21]);
    }

    #[test]
    fn test_v_prefix_and_prerelease_tail() {
        let v = parse_semver_like("v1.8.0-beta.1", 3);
        assert_eq!(v.components, [1, 8]);
        assert_eq!(v.build, ".0-beta.1");
    }

    #[test]
    fn test_non_numeric_input() {
        let v = parse_semver_like("latest", 3);
        assert!(v.components.is_empty());
        assert_eq!(v.build, "latest");
        assert_eq!(v.original, "latest");
    }
}
