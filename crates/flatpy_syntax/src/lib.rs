//! flatpy_syntax: source text and diagnostics shared by the flatpy crates.
//!
//! Holds named source files with a line index, diagnostics and their text
//! rendering, input normalization, and name suggestion helpers.
mod diagnostic;
mod normalize;
mod render;
mod source;
mod span;
mod util;

pub use diagnostic::{Diagnostic, Severity, codes};
pub use normalize::normalize_source;
pub use render::{RenderOptions, render_diagnostic, render_diagnostic_with_options, render_diagnostics};
pub use source::{SourceFile, SourceText};
pub use span::Span;
pub use util::{find_best_match, levenshtein_distance};
