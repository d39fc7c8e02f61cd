use std::fmt;

use flatpy_syntax::{Diagnostic, SourceFile, codes};
use thiserror::Error;

use crate::ImportChain;

/// The import line that triggered a failure. `line` is zero-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSite {
    pub file: String,
    pub line: usize,
}

impl fmt::Display for ImportSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveErrorKind {
    CyclicImport,
    ModuleNotFound,
}

/// Display is the user-facing message and nothing else.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("{module} has already been imported. Mutually recursive imports are not allowed.")]
    CyclicImport {
        module: String,
        /// Active chain at detection time; `module` is already on it.
        chain: ImportChain,
        site: Option<ImportSite>,
    },
    #[error("{module} could not be found. Only files of this exercise can be imported.")]
    ModuleNotFound {
        module: String,
        suggestion: Option<String>,
        site: Option<ImportSite>,
    },
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            ResolveError::CyclicImport { .. } => ResolveErrorKind::CyclicImport,
            ResolveError::ModuleNotFound { .. } => ResolveErrorKind::ModuleNotFound,
        }
    }

    pub fn module(&self) -> &str {
        match self {
            ResolveError::CyclicImport { module, .. }
            | ResolveError::ModuleNotFound { module, .. } => module,
        }
    }

    pub fn site(&self) -> Option<&ImportSite> {
        match self {
            ResolveError::CyclicImport { site, .. } | ResolveError::ModuleNotFound { site, .. } => {
                site.as_ref()
            }
        }
    }

    pub(crate) fn at(mut self, at: ImportSite) -> Self {
        match &mut self {
            ResolveError::CyclicImport { site, .. } | ResolveError::ModuleNotFound { site, .. } => {
                site.get_or_insert(at);
            }
        }
        self
    }

    /// `a -> b -> a`, closing the loop on the re-entered module.
    pub fn cycle(&self) -> Option<String> {
        match self {
            ResolveError::CyclicImport { module, chain, .. } => Some(format!("{chain} -> {module}")),
            ResolveError::ModuleNotFound { .. } => None,
        }
    }

    /// Diagnostic for this failure. The span points at the import line when
    /// `source` is the file named by the site.
    pub fn to_diagnostic(&self, source: &SourceFile) -> Diagnostic {
        let span = self
            .site()
            .filter(|site| site.file == source.name)
            .and_then(|site| source.text.line_span(site.line));
        let diag = Diagnostic::error(self.to_string(), span);
        match self {
            ResolveError::CyclicImport { .. } => {
                let diag = diag.with_code(codes::CIRCULAR_IMPORT);
                match self.cycle() {
                    Some(cycle) => diag.with_help(format!("import chain: {cycle}")),
                    None => diag,
                }
            }
            ResolveError::ModuleNotFound { suggestion, .. } => {
                let diag = diag.with_code(codes::MODULE_NOT_FOUND);
                match suggestion {
                    Some(s) => diag.with_suggestion(format!("did you mean '{s}'?")),
                    None => diag,
                }
            }
        }
    }
}
