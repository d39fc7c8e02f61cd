use crate::Span;

/// Text plus the byte offset of every line start.
#[derive(Clone, Debug)]
pub struct SourceText {
    text: String,
    line_starts: Vec<u32>,
}

impl SourceText {
    pub fn new(text: String) -> Self {
        let mut line_starts = Vec::with_capacity(text.len().saturating_div(40).max(8));
        line_starts.push(0u32);
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { text, line_starts }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.start as usize..span.end as usize]
    }

    /// Number of lines as produced by splitting on `\n`; a trailing newline
    /// yields a final empty line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Span of line `idx` without its terminating newline.
    pub fn line_span(&self, idx: usize) -> Option<Span> {
        let start = *self.line_starts.get(idx)?;
        let end = match self.line_starts.get(idx + 1) {
            Some(next) => next - 1,
            None => self.text.len() as u32,
        };
        Some(Span::new(start, end))
    }

    pub fn line(&self, idx: usize) -> Option<&str> {
        self.line_span(idx).map(|span| self.slice(span))
    }

    /// Zero-based `(line, column)` of a byte offset; the column counts chars.
    pub fn line_col(&self, byte: u32) -> (u32, u32) {
        let byte = byte.min(self.text.len() as u32);
        let idx = match self.line_starts.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts[idx] as usize;
        let mut target = byte as usize;
        while target > line_start && !self.text.is_char_boundary(target) {
            target -= 1;
        }
        let col = self.text[line_start..target].chars().count() as u32;
        (idx as u32, col)
    }
}

/// A named piece of source text, e.g. one exercise file.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub name: String,
    pub text: SourceText,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: SourceText::new(text.into()),
        }
    }

    pub fn content(&self) -> &str {
        self.text.as_str()
    }
}
