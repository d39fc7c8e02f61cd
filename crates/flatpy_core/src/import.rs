//! Import line classification.
//!
//! Only two anchored, single-line shapes are recognized:
//!
//! ```text
//! import .<stem>
//! from .<stem> import <name>(, <name>)*
//! ```
//!
//! Anything else, including lines that merely look like imports, is plain
//! text and passes through the resolver untouched.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

static IMPORT_ALL: OnceLock<Regex> = OnceLock::new();
static IMPORT_SOME: OnceLock<Regex> = OnceLock::new();

fn import_all_re() -> &'static Regex {
    IMPORT_ALL.get_or_init(|| Regex::new(r"^import \.(\w+)[ \t]*$").expect("valid pattern"))
}

fn import_some_re() -> &'static Regex {
    IMPORT_SOME.get_or_init(|| {
        Regex::new(r"^from \.(\w+) import (\w+(?:[ \t]*,[ \t]*\w+)*)[ \t]*$")
            .expect("valid pattern")
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportDescriptor {
    /// `import .m`
    ImportAll { module_path: String },
    /// `from .m import a, b`; names keep their written order and duplicates.
    ImportSome {
        module_path: String,
        names: Vec<String>,
    },
}

impl ImportDescriptor {
    /// Module stem, without the leading dot or file suffix.
    pub fn module_path(&self) -> &str {
        match self {
            ImportDescriptor::ImportAll { module_path }
            | ImportDescriptor::ImportSome { module_path, .. } => module_path,
        }
    }

    pub fn names(&self) -> &[String] {
        match self {
            ImportDescriptor::ImportAll { .. } => &[],
            ImportDescriptor::ImportSome { names, .. } => names,
        }
    }

    pub fn is_selective(&self) -> bool {
        matches!(self, ImportDescriptor::ImportSome { .. })
    }
}

impl fmt::Display for ImportDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportDescriptor::ImportAll { module_path } => write!(f, "import .{module_path}"),
            ImportDescriptor::ImportSome { module_path, names } => {
                write!(f, "from .{module_path} import {}", names.join(", "))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Import(ImportDescriptor),
}

/// Classifies one line (without its newline). Total: malformed input is
/// simply `Plain`.
pub fn classify(line: &str) -> LineKind {
    if let Some(caps) = import_all_re().captures(line) {
        return LineKind::Import(ImportDescriptor::ImportAll {
            module_path: caps[1].to_string(),
        });
    }
    if let Some(caps) = import_some_re().captures(line) {
        let names = caps[2].split(',').map(|n| n.trim().to_string()).collect();
        return LineKind::Import(ImportDescriptor::ImportSome {
            module_path: caps[1].to_string(),
            names,
        });
    }
    LineKind::Plain
}

/// All import lines of `source` with their zero-based line index.
pub fn scan_imports(source: &str) -> Vec<(usize, ImportDescriptor)> {
    source
        .split('\n')
        .enumerate()
        .filter_map(|(idx, line)| match classify(line) {
            LineKind::Import(desc) => Some((idx, desc)),
            LineKind::Plain => None,
        })
        .collect()
}
