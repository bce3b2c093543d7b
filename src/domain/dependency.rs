//! Declared dependency information

/// A dependency as declared in package.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    /// Package name
    pub name: String,
    /// The version range exactly as written in the manifest (e.g., `^3.0.0`)
    pub declared: String,
    /// Concrete version the range was normalized to (e.g., `3.0.0`)
    pub version: String,
}

impl DependencySpec {
    /// Creates a new dependency spec
    pub fn new(
        name: impl Into<String>,
        declared: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared: declared.into(),
            version: version.into(),
        }
    }
}

/// Splits `name@version` into the bare package name and optional version.
///
/// Scoped packages keep their leading `@`: `@types/node@20.0.0` yields
/// `("@types/node", Some("20.0.0"))`.
pub fn parse_name_version(input: &str) -> (&str, Option<&str>) {
    let input = input.trim();
    match input.rfind('@') {
        Some(idx) if idx > 0 => {
            let version = &input[idx + 1..];
            let version = if version.is_empty() {
                None
            } else {
                Some(version)
            };
            (&input[..idx], version)
        }
        _ => (input, None),
    }
}
