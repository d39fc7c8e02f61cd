use flatpy_core::{FileRegistry, ResolveError};
use flatpy_syntax::{RenderOptions, SourceFile, render_diagnostic_with_options};
use serde_json::{Value, json};

pub(crate) mod check;
pub(crate) mod common;
pub(crate) mod flatten;
pub(crate) mod imports;

/// The file a failure should be reported against: the file holding the
/// offending import, or the entry file.
fn report_source(registry: &FileRegistry, entry: &str, err: &ResolveError) -> SourceFile {
    err.site()
        .and_then(|site| registry.source_file(&site.file))
        .or_else(|| registry.source_file(entry))
        .unwrap_or_else(|| SourceFile::new(entry, ""))
}

pub(crate) fn error_json(registry: &FileRegistry, entry: &str, err: &ResolveError) -> Value {
    let source = report_source(registry, entry, err);
    let d = err.to_diagnostic(&source);
    json!({
        "severity": d.severity.as_str(),
        "code": d.code,
        "message": d.message,
        "module": err.module(),
        "file": source.name,
        "line": err.site().map(|s| s.line + 1),
        "chain": err.cycle(),
        "suggestion": d.suggestion,
    })
}

pub(crate) fn emit_error(
    registry: &FileRegistry,
    entry: &str,
    err: &ResolveError,
    render_opts: RenderOptions,
    json_out: bool,
) {
    if json_out {
        println!("{}", error_json(registry, entry, err));
    } else {
        let source = report_source(registry, entry, err);
        let d = err.to_diagnostic(&source);
        eprintln!("{}", render_diagnostic_with_options(&source, &d, render_opts));
    }
}
