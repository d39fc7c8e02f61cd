//! Entry point used by the execution surface.

use tracing::warn;

use crate::{FileRegistry, ImportChain, ResolveError, ResolverConfig, resolve};

/// Flattens the selected file, keeping the typed failure.
pub fn try_run(
    short_name: &str,
    content: &str,
    registry: &FileRegistry,
    config: &ResolverConfig,
) -> Result<String, ResolveError> {
    resolve(content, &ImportChain::root(short_name), registry, config)
}

/// Flattens the selected file. Never fails: a resolution failure becomes a
/// script that prints the failure message.
pub fn run(
    short_name: &str,
    content: &str,
    registry: &FileRegistry,
    config: &ResolverConfig,
) -> String {
    match try_run(short_name, content, registry, config) {
        Ok(script) => script,
        Err(e) => {
            warn!(entry = short_name, module = e.module(), error = %e, "import resolution failed");
            fallback_script(&e.to_string())
        }
    }
}

/// A one-line script whose only effect is printing `message`.
pub fn fallback_script(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len() + 2);
    for c in message.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    format!("print(\"{escaped}\")")
}

#[cfg(test)]
mod tests {
    use super::fallback_script;

    #[test]
    fn fallback_escapes_string_breakers() {
        assert_eq!(fallback_script("plain"), "print(\"plain\")");
        assert_eq!(
            fallback_script("say \"hi\"\\\nbye"),
            "print(\"say \\\"hi\\\"\\\\\\nbye\")"
        );
    }
}
