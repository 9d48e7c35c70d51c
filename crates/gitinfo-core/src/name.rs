use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::{GitInfoError, Result};

/// A dot-separated type name such as `com.example.GitInfo`, split into its
/// package (`com.example`) and simple name (`GitInfo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    package: String,
    simple_name: String,
}

impl QualifiedName {
    /// Split `fqn` at its last dot. Fails when there is no dot or any
    /// segment is empty.
    pub fn parse(fqn: &str) -> Result<Self> {
        let (package, simple_name) = fqn
            .rsplit_once('.')
            .ok_or_else(|| GitInfoError::InvalidClassName(fqn.to_string()))?;

        let name = Self {
            package: package.to_string(),
            simple_name: simple_name.to_string(),
        };
        if let Some(empty) = name.segments().find(|s| s.is_empty()) {
            return Err(GitInfoError::InvalidIdentifier {
                name: fqn.to_string(),
                segment: empty.to_string(),
            });
        }
        Ok(name)
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn package_segments(&self) -> impl Iterator<Item = &str> {
        self.package.split('.')
    }

    /// Package segments followed by the simple name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.package_segments()
            .chain(std::iter::once(self.simple_name.as_str()))
    }

    /// `a/b/Name.<extension>` for `a.b.Name`.
    pub fn relative_path(&self, extension: &str) -> PathBuf {
        let mut path: PathBuf = self.package_segments().collect();
        path.push(format!("{}.{extension}", self.simple_name));
        path
    }
}

impl FromStr for QualifiedName {
    type Err = GitInfoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.simple_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn splits_at_last_dot() {
        let name = QualifiedName::parse("a.b.C").unwrap();
        assert_eq!(name.package(), "a.b");
        assert_eq!(name.simple_name(), "C");
        assert_eq!(name.to_string(), "a.b.C");
    }

    #[test]
    fn single_package_segment() {
        let name: QualifiedName = "poc.GitInfo".parse().unwrap();
        assert_eq!(name.package(), "poc");
        assert_eq!(name.relative_path("java"), Path::new("poc").join("GitInfo.java"));
    }

    #[test]
    fn relative_path_nests_packages() {
        let name = QualifiedName::parse("com.example.build.GitInfo").unwrap();
        let expected = Path::new("com")
            .join("example")
            .join("build")
            .join("GitInfo.rs");
        assert_eq!(name.relative_path("rs"), expected);
    }

    #[test]
    fn rejects_name_without_dot() {
        let err = QualifiedName::parse("C").unwrap_err();
        assert!(matches!(err, GitInfoError::InvalidClassName(ref n) if n == "C"));
    }

    #[test]
    fn rejects_empty_segments() {
        for bad in [".C", "a.", "a..C", "."] {
            let err = QualifiedName::parse(bad).unwrap_err();
            assert!(
                matches!(err, GitInfoError::InvalidIdentifier { .. }),
                "expected identifier error for {bad:?}, got {err:?}"
            );
        }
    }
}
