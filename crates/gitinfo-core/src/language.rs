use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{GitInfoError, Result};
use crate::name::QualifiedName;

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
    "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
    "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
    "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "true", "try", "void", "volatile", "while", "_",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
    "trait", "true", "type", "unsafe", "use", "where", "while", "_",
    // reserved for future use
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Contextual keywords Java accepts in package names but not as a type name.
const JAVA_RESTRICTED_TYPE_NAMES: &[&str] = &["permits", "record", "sealed", "var", "yield"];

/// Language of the generated source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Java,
    Rust,
}

impl Language {
    pub fn extension(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Rust => "rs",
        }
    }

    /// ASCII identifiers only. Java additionally allows `$`.
    pub fn is_identifier(self, s: &str) -> bool {
        let extra = |c: char| c == '_' || (self == Language::Java && c == '$');
        let mut chars = s.chars();
        let head_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || extra(c));
        head_ok
            && chars.all(|c| c.is_ascii_alphanumeric() || extra(c))
            && !self.keywords().contains(&s)
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Language::Java => JAVA_KEYWORDS,
            Language::Rust => RUST_KEYWORDS,
        }
    }

    /// Whether `s` can name the generated type.
    pub fn is_type_name(self, s: &str) -> bool {
        self.is_identifier(s)
            && !(self == Language::Java && JAVA_RESTRICTED_TYPE_NAMES.contains(&s))
    }

    /// Check every segment of `name` is a usable identifier in this language.
    pub fn validate(self, name: &QualifiedName) -> Result<()> {
        let bad = name
            .package_segments()
            .find(|s| !self.is_identifier(s))
            .or_else(|| Some(name.simple_name()).filter(|s| !self.is_type_name(s)));
        match bad {
            Some(bad) => Err(GitInfoError::InvalidIdentifier {
                name: name.to_string(),
                segment: bad.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// `value` as a double-quoted string literal.
    pub fn quote(self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        match self {
            Language::Java => {
                for c in value.chars() {
                    match c {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        '\t' => out.push_str("\\t"),
                        c if c.is_control() => {
                            let _ = write!(out, "\\u{:04x}", c as u32);
                        }
                        c => out.push(c),
                    }
                }
            }
            Language::Rust => out.extend(value.escape_debug()),
        }
        out.push('"');
        out
    }

    /// Source declaring `name` with `SHA` and `BRANCH` constants.
    pub fn render(self, name: &QualifiedName, sha: &str, branch: &str) -> String {
        match self {
            Language::Java => self.render_java(name, sha, branch),
            Language::Rust => self.render_rust(name, sha, branch),
        }
    }

    fn render_java(self, name: &QualifiedName, sha: &str, branch: &str) -> String {
        format!(
            "package {package};\n\
             \n\
             public abstract class {simple} {{\n\
             \x20   public static final String SHA = {sha};\n\
             \x20   public static final String BRANCH = {branch};\n\
             }}\n",
            package = name.package(),
            simple = name.simple_name(),
            sha = self.quote(sha),
            branch = self.quote(branch),
        )
    }

    fn render_rust(self, name: &QualifiedName, sha: &str, branch: &str) -> String {
        let mut out = String::from("// @generated by gitinfo. Do not edit.\n\n");
        let mut depth = 0;
        for module in name.package_segments() {
            let _ = writeln!(out, "{}pub mod {module} {{", indent(depth));
            depth += 1;
        }

        let pad = indent(depth);
        let simple = name.simple_name();
        let _ = writeln!(out, "{pad}pub enum {simple} {{}}");
        out.push('\n');
        let _ = writeln!(out, "{pad}impl {simple} {{");
        let _ = writeln!(out, "{pad}    pub const SHA: &str = {};", self.quote(sha));
        let _ = writeln!(out, "{pad}    pub const BRANCH: &str = {};", self.quote(branch));
        let _ = writeln!(out, "{pad}}}");

        while depth > 0 {
            depth -= 1;
            let _ = writeln!(out, "{}}}", indent(depth));
        }
        out
    }
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "rust" | "rs" => Ok(Language::Rust),
            other => Err(format!("unknown language {other:?} (expected java or rust)")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Java => write!(f, "java"),
            Language::Rust => write!(f, "rust"),
        }
    }
}
