use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{GitInfoError, Result};
use crate::language::Language;
use crate::name::QualifiedName;
use crate::vcs::GitInfo;

/// Text rendered in place of a value whose query failed.
pub const DEFAULT_ABSENT_PLACEHOLDER: &str = "null";

/// Renders a [`GitInfo`] as source and writes it under an output directory.
#[derive(Debug, Clone)]
pub struct SourceEmitter {
    language: Language,
    absent_placeholder: String,
}

impl SourceEmitter {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            absent_placeholder: DEFAULT_ABSENT_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_absent_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.absent_placeholder = placeholder.into();
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Where `name` lands under `output_dir`.
    pub fn path_for(&self, output_dir: &Path, name: &QualifiedName) -> PathBuf {
        output_dir.join(name.relative_path(self.language.extension()))
    }

    pub fn render(&self, name: &QualifiedName, info: &GitInfo) -> String {
        let placeholder = self.absent_placeholder.as_str();
        self.language.render(
            name,
            info.sha.as_deref().unwrap_or(placeholder),
            info.branch.as_deref().unwrap_or(placeholder),
        )
    }

    /// Render and write the source file, replacing any previous one.
    /// Returns the path written.
    pub fn emit(&self, output_dir: &Path, name: &QualifiedName, info: &GitInfo) -> Result<PathBuf> {
        let path = self.path_for(output_dir, name);
        write_atomic(&path, &self.render(name, info))?;
        tracing::info!("wrote {}", path.display());
        Ok(path)
    }
}

/// Write `contents` to a temp file next to `path`, then rename it over
/// `path`. Parent directories are created as needed.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let failed = |source| GitInfoError::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(parent).map_err(failed)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(failed)?;
    tmp.write_all(contents.as_bytes()).map_err(failed)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(failed)?;
    }
    tmp.persist(path).map_err(|e| failed(e.error))?;
    Ok(())
}
