//! Generate a source file that embeds the current commit id and branch name
//! as constants.
//!
//! ```no_run
//! use gitinfo_core::{generate, SystemRunner};
//!
//! let path = generate("build/generated".as_ref(), "com.example.GitInfo", &SystemRunner::new())?;
//! println!("wrote {}", path.display());
//! # Ok::<(), gitinfo_core::GitInfoError>(())
//! ```

pub mod config;
pub mod emitter;
pub mod errors;
pub mod language;
pub mod name;
pub mod runner;
pub mod vcs;

use std::path::{Path, PathBuf};

pub use emitter::SourceEmitter;
pub use errors::{GitInfoError, Result};
pub use language::Language;
pub use name::QualifiedName;
pub use runner::{CommandRunner, SystemRunner};
pub use vcs::{GitInfo, Pinned};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Generate a Java source file for `class_name` under `output_dir` using
/// `git` through `runner`. See [`Generator`] for the other options.
pub fn generate<R: CommandRunner + ?Sized>(
    output_dir: &Path,
    class_name: &str,
    runner: &R,
) -> Result<PathBuf> {
    Generator::new(output_dir, class_name).run(runner)
}

/// One generation run: validate the name, query the VCS, write the file.
#[derive(Debug, Clone)]
pub struct Generator {
    output_dir: PathBuf,
    class_name: String,
    language: Language,
    vcs: String,
    absent_placeholder: String,
    pinned: Pinned,
}

impl Generator {
    pub fn new(output_dir: impl Into<PathBuf>, class_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            class_name: class_name.into(),
            language: Language::default(),
            vcs: vcs::DEFAULT_VCS.into(),
            absent_placeholder: emitter::DEFAULT_ABSENT_PLACEHOLDER.into(),
            pinned: Pinned::default(),
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn vcs(mut self, vcs: impl Into<String>) -> Self {
        self.vcs = vcs.into();
        self
    }

    pub fn absent_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.absent_placeholder = placeholder.into();
        self
    }

    pub fn pinned(mut self, pinned: Pinned) -> Self {
        self.pinned = pinned;
        self
    }

    /// Parse and check the class name for the configured language.
    pub fn qualified_name(&self) -> Result<QualifiedName> {
        let name = QualifiedName::parse(&self.class_name)?;
        self.language.validate(&name)?;
        Ok(name)
    }

    /// Path the generated file is written to.
    pub fn output_path(&self) -> Result<PathBuf> {
        let name = self.qualified_name()?;
        Ok(self.emitter().path_for(&self.output_dir, &name))
    }

    pub fn run<R: CommandRunner + ?Sized>(&self, runner: &R) -> Result<PathBuf> {
        let name = self.qualified_name()?;
        let info = vcs::resolve(runner, &self.vcs, &self.pinned)?;
        self.emitter().emit(&self.output_dir, &name, &info)
    }

    fn emitter(&self) -> SourceEmitter {
        SourceEmitter::new(self.language).with_absent_placeholder(self.absent_placeholder.clone())
    }
}
