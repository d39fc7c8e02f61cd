//! Recursive import inliner.

use tracing::debug;

use crate::{
    FileRegistry, ImportChain, ImportDescriptor, ImportSite, LineKind, ResolveError,
    ResolverConfig, classify,
};

/// One top-level resolution pass over a frozen registry.
///
/// Wrapper names come from a counter owned by the pass, so they are unique
/// across every nesting level of the pass. Use a fresh `Resolver` per pass.
pub struct Resolver<'r> {
    registry: &'r FileRegistry,
    config: &'r ResolverConfig,
    next_wrapper: usize,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r FileRegistry, config: &'r ResolverConfig) -> Self {
        Self {
            registry,
            config,
            next_wrapper: 0,
        }
    }

    /// Number of wrapper functions emitted so far in this pass.
    pub fn wrappers_emitted(&self) -> usize {
        self.next_wrapper
    }

    /// Resolves the registered file `short_name` as the root of the chain.
    pub fn resolve_file(&mut self, short_name: &str) -> Result<String, ResolveError> {
        let registry = self.registry;
        let source = registry.lookup(short_name)?;
        self.resolve(source, &ImportChain::root(short_name))
    }

    /// Flattens `source`, which belongs to `chain.leaf()`. The first failure
    /// anywhere below aborts the pass and is returned unchanged.
    pub fn resolve(&mut self, source: &str, chain: &ImportChain) -> Result<String, ResolveError> {
        let mut out: Vec<String> = Vec::new();
        for (idx, line) in source.split('\n').enumerate() {
            let desc = match classify(line) {
                LineKind::Plain => {
                    out.push(line.to_string());
                    continue;
                }
                LineKind::Import(desc) => desc,
            };
            let site = ImportSite {
                file: chain.leaf().to_string(),
                line: idx,
            };
            let body = self.inline_module(desc.module_path(), chain, site)?;
            let replacement = match &desc {
                ImportDescriptor::ImportAll { .. } => format!("\n{body}\n"),
                ImportDescriptor::ImportSome { names, .. } => self.wrap_selective(&body, names),
            };
            out.push(replacement);
        }
        Ok(out.join("\n"))
    }

    fn inline_module(
        &mut self,
        stem: &str,
        chain: &ImportChain,
        site: ImportSite,
    ) -> Result<String, ResolveError> {
        let target = self.config.short_name(stem);
        if chain.contains(&target) {
            return Err(ResolveError::CyclicImport {
                module: target,
                chain: chain.clone(),
                site: Some(site),
            });
        }
        let registry = self.registry;
        let content = registry.lookup(&target).map_err(|e| e.at(site))?;
        debug!(module = %target, depth = chain.len(), "inlining module");
        self.resolve(content, &chain.extended(target))
    }

    fn wrap_selective(&mut self, body: &str, names: &[String]) -> String {
        let wrapper = format!("{}{}", self.config.wrapper_prefix, self.next_wrapper);
        self.next_wrapper += 1;
        debug!(%wrapper, names = names.len(), "wrapping selective import");

        let indent = self.config.indent.as_str();
        let joined = names.join(", ");
        let mut out = format!("def {wrapper}():\n");
        for line in body.split('\n') {
            out.push_str(indent);
            out.push_str(line);
            out.push('\n');
        }
        if joined.is_empty() {
            out.push_str(&format!("{indent}return\n{wrapper}()"));
        } else {
            out.push_str(&format!("{indent}return {joined}\n{joined} = {wrapper}()"));
        }
        out
    }
}

/// Flattens `source` (the content of `chain.leaf()`) in a fresh pass.
pub fn resolve(
    source: &str,
    chain: &ImportChain,
    registry: &FileRegistry,
    config: &ResolverConfig,
) -> Result<String, ResolveError> {
    Resolver::new(registry, config).resolve(source, chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_names_emit_bare_call() {
        let registry: FileRegistry = [("m.py", "x = 1")].into_iter().collect();
        let config = ResolverConfig::default();
        let mut resolver = Resolver::new(&registry, &config);
        let out = resolver.wrap_selective("x = 1", &[]);
        assert_eq!(out, "def __wrap0():\n\tx = 1\n\treturn\n__wrap0()");
        assert_eq!(resolver.wrappers_emitted(), 1);
    }

    #[test]
    fn custom_indent_and_prefix() {
        let registry = FileRegistry::new();
        let config = ResolverConfig::new()
            .with_indent("    ")
            .with_wrapper_prefix("_mod");
        let mut resolver = Resolver::new(&registry, &config);
        resolver.next_wrapper = 7;
        let out = resolver.wrap_selective("a = 1\nb = 2", &["a".into(), "b".into()]);
        assert_eq!(
            out,
            "def _mod7():\n    a = 1\n    b = 2\n    return a, b\na, b = _mod7()"
        );
    }
}
