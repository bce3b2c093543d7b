//! Version range specifications as declared in package.json
//!
//! Handles version constraints like `^1.2.3`, `~1.2.3`, `>=1.0.0`, `1.2.x`
//! and `>=1.0.0 <2.0.0`.

/// The kind of version specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionSpecKind {
    /// Exact/pinned version (e.g., `1.2.3`, `=1.2.3`, `v1.2.3`)
    Exact,
    /// Caret range (e.g., `^1.2.3`) - compatible with major version
    Caret,
    /// Tilde range (e.g., `~1.2.3`) - compatible with minor version
    Tilde,
    /// Greater than or equal (e.g., `>=1.2.3`)
    GreaterOrEqual,
    /// Greater than (e.g., `>1.2.3`)
    Greater,
    /// Less than or equal (e.g., `<=1.2.3`)
    LessOrEqual,
    /// Less than (e.g., `<1.2.3`)
    Less,
    /// Partial wildcard (e.g., `1.x`, `1.2.*`)
    Wildcard,
    /// Complex range (e.g., `>=1.0.0 <2.0.0`, `1.0.0 - 2.0.0`)
    Range,
}

impl VersionSpecKind {
    /// Returns true if the extracted version is one the declared range
    /// actually admits. `>1.2.3` excludes `1.2.3` itself.
    pub fn is_lower_bound(&self) -> bool {
        !matches!(
            self,
            VersionSpecKind::Less | VersionSpecKind::LessOrEqual | VersionSpecKind::Greater
        )
    }
}

/// A parsed range and the concrete version it was normalized to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    /// The kind of version specification
    pub kind: VersionSpecKind,
    /// The extracted concrete version (without prefix, zero-filled)
    pub version: String,
}

impl VersionSpec {
    /// Creates a new VersionSpec
    pub fn new(kind: VersionSpecKind, version: impl Into<String>) -> Self {
        Self {
            kind,
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound_kinds() {
        assert!(VersionSpecKind::Exact.is_lower_bound());
        assert!(VersionSpecKind::Caret.is_lower_bound());
        assert!(VersionSpecKind::GreaterOrEqual.is_lower_bound());
        assert!(VersionSpecKind::Range.is_lower_bound());
        assert!(!VersionSpecKind::Greater.is_lower_bound());
        assert!(!VersionSpecKind::Less.is_lower_bound());
        assert!(!VersionSpecKind::LessOrEqual.is_lower_bound());
    }

    #[test]
    fn test_version_spec_new() {
        let spec = VersionSpec::new(VersionSpecKind::Caret, "1.2.3");
        assert_eq!(spec.kind, VersionSpecKind::Caret);
        assert_eq!(spec.version, "1.2.3");
    }
}
