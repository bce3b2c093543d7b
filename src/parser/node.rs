//! npm version range parser
//!
//! Handles version formats:
//! - Exact: `1.2.3`, `=1.2.3`, `v1.2.3`
//! - Caret: `^1.2.3`, `^1.2`
//! - Tilde: `~1.2.3`
//! - Comparison: `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3`
//! - Wildcard: `1.x`, `1.2.*`
//! - Range: `>=1.0.0 <2.0.0`, `1.0.0 - 2.0.0`
//!
//! Versions with fewer than three components are zero-filled, so `^1.2`
//! becomes `1.2.0`.

use crate::domain::{VersionSpec, VersionSpecKind};
use regex::Regex;
use std::sync::LazyLock;

/// npm version range parser
pub(crate) struct NodeVersionParser;

static PARTIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(\d+)(?:\.(\d+))?(?:\.(\d+))?(-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?$").unwrap()
});
static WILDCARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+)(?:\.(\d+))?\.[xX*]$").unwrap());
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^>=\s*(v?\d+(?:\.\d+){0,2})\s+<=?\s*v?\d+(?:\.\d+){0,2}$|^(v?\d+(?:\.\d+){0,2})\s+-\s+v?\d+(?:\.\d+){0,2}$")
        .unwrap()
});

/// Zero-fills a partial version such as `1.2` or `v3` into `1.2.0` / `3.0.0`
fn complete(partial: &str) -> Option<String> {
    let caps = PARTIAL_RE.captures(partial)?;
    let major = caps.get(1)?.as_str();
    let minor = caps.get(2).map_or("0", |m| m.as_str());
    let patch = caps.get(3).map_or("0", |m| m.as_str());
    let pre = caps.get(4).map_or("", |m| m.as_str());
    Some(format!("{}.{}.{}{}", major, minor, patch, pre))
}

impl NodeVersionParser {
    /// Parse a version range string from package.json
    pub fn parse(&self, version_str: &str) -> Option<VersionSpec> {
        let trimmed = version_str.trim();

        if trimmed.is_empty() {
            return None;
        }

        // Two-character operators must be checked before their one-character prefixes
        let operators = [
            (">=", VersionSpecKind::GreaterOrEqual),
            ("<=", VersionSpecKind::LessOrEqual),
            ("^", VersionSpecKind::Caret),
            ("~", VersionSpecKind::Tilde),
            (">", VersionSpecKind::Greater),
            ("<", VersionSpecKind::Less),
            ("=", VersionSpecKind::Exact),
        ];

        if let Some(caps) = RANGE_RE.captures(trimmed) {
            let first = caps.get(1).or_else(|| caps.get(2))?.as_str();
            return Some(VersionSpec::new(VersionSpecKind::Range, complete(first)?));
        }

        if let Some(caps) = WILDCARD_RE.captures(trimmed) {
            let major = caps.get(1)?.as_str();
            let minor = caps.get(2).map_or("0", |m| m.as_str());
            return Some(VersionSpec::new(
                VersionSpecKind::Wildcard,
                format!("{}.{}.0", major, minor),
            ));
        }

        for (prefix, kind) in operators {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                return Some(VersionSpec::new(kind, complete(rest.trim())?));
            }
        }

        complete(trimmed).map(|version| VersionSpec::new(VersionSpecKind::Exact, version))
    }
}

/// Normalizes a declared range into a concrete, installable version.
///
/// Returns `None` for anything that does not name a lower bound: `*`,
/// `latest`, `<2.0.0`, git URLs, file paths.
pub fn clean_version(raw: &str) -> Option<String> {
    let spec = NodeVersionParser.parse(raw)?;
    if !spec.kind.is_lower_bound() {
        return None;
    }
    semver::Version::parse(&spec.version)
        .ok()
        .map(|v| v.to_string())
}
