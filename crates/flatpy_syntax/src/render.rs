use crate::{Diagnostic, Severity, SourceFile, Span};

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub color: bool,
}

pub fn render_diagnostic(source: &SourceFile, diag: &Diagnostic) -> String {
    render_diagnostic_with_options(source, diag, RenderOptions::default())
}

pub fn render_diagnostic_with_options(
    source: &SourceFile,
    diag: &Diagnostic,
    opts: RenderOptions,
) -> String {
    let mut out = header(source, diag, opts);
    if let Some(span) = diag.span {
        push_excerpt(&mut out, source, span);
    }
    if let Some(s) = &diag.suggestion {
        out.push_str("\n  = suggestion: ");
        out.push_str(s);
    }
    if let Some(h) = &diag.help {
        out.push_str("\n  = help: ");
        out.push_str(h);
    }
    out
}

pub fn render_diagnostics(source: &SourceFile, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| render_diagnostic(source, d))
        .collect::<Vec<_>>()
        .join("\n")
}

fn header(source: &SourceFile, diag: &Diagnostic, opts: RenderOptions) -> String {
    let severity = match (diag.severity, opts.color) {
        (Severity::Error, true) => "\x1b[31mError\x1b[0m".to_string(),
        (Severity::Warning, true) => "\x1b[33mWarning\x1b[0m".to_string(),
        (s, false) => format!("{s:?}"),
    };
    let code = diag.code.map(|c| format!(" [{c}]")).unwrap_or_default();
    match diag.span {
        Some(span) => {
            let (line, col) = source.text.line_col(span.start);
            format!(
                "{severity}{code}:{}:{}: {}: {}",
                line + 1,
                col + 1,
                source.name,
                diag.message
            )
        }
        None => format!("{severity}{code}: {}: {}", source.name, diag.message),
    }
}

fn push_excerpt(out: &mut String, source: &SourceFile, span: Span) {
    let (line, col) = source.text.line_col(span.start);
    let Some(line_text) = source.text.line(line as usize) else {
        return;
    };
    let width = source
        .text
        .slice(Span::new(span.start, span.end.min(line_end(source, line))))
        .chars()
        .count()
        .max(1);
    out.push_str("\n  | ");
    out.push_str(line_text);
    out.push_str("\n  | ");
    out.extend(std::iter::repeat_n(' ', col as usize));
    out.extend(std::iter::repeat_n('^', width));
}

fn line_end(source: &SourceFile, line: u32) -> u32 {
    source
        .text
        .line_span(line as usize)
        .map(|s| s.end)
        .unwrap_or(source.text.as_str().len() as u32)
}
