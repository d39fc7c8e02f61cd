/// Normalizes text read from disk: drops a leading byte order mark and
/// turns `\r\n` and lone `\r` line endings into `\n`.
pub fn normalize_source(input: &str) -> String {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::normalize_source;

    #[test]
    fn crlf_and_cr_become_lf() {
        assert_eq!(normalize_source("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn bom_is_dropped_only_at_start() {
        assert_eq!(normalize_source("\u{FEFF}x = 1"), "x = 1");
        assert_eq!(normalize_source("x\u{FEFF}"), "x\u{FEFF}");
    }
}
