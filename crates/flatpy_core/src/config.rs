//! Resolver configuration.

/// Conventions shared by the registry and the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Appended to a module stem to form the registry short-name.
    pub module_suffix: String,
    /// One nesting level inside a synthesized wrapper function.
    pub indent: String,
    /// Wrapper functions are named `<prefix><n>`.
    pub wrapper_prefix: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            module_suffix: ".py".into(),
            indent: "\t".into(),
            wrapper_prefix: "__wrap".into(),
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.module_suffix = suffix.into();
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_wrapper_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.wrapper_prefix = prefix.into();
        self
    }

    pub fn short_name(&self, stem: &str) -> String {
        format!("{stem}{}", self.module_suffix)
    }

    pub fn stem_of<'a>(&self, short_name: &'a str) -> Option<&'a str> {
        short_name
            .strip_suffix(self.module_suffix.as_str())
            .filter(|stem| !stem.is_empty())
    }

    pub fn is_module_file(&self, name: &str) -> bool {
        self.stem_of(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::ResolverConfig;

    #[test]
    fn suffix_convention_round_trips() {
        let cfg = ResolverConfig::default();
        assert_eq!(cfg.short_name("utils"), "utils.py");
        assert_eq!(cfg.stem_of("utils.py"), Some("utils"));
        assert_eq!(cfg.stem_of(".py"), None);
        assert!(!cfg.is_module_file("notes.txt"));
    }

    #[test]
    fn custom_suffix() {
        let cfg = ResolverConfig::new().with_module_suffix(".star");
        assert_eq!(cfg.short_name("rules"), "rules.star");
        assert!(cfg.is_module_file("rules.star"));
        assert!(!cfg.is_module_file("rules.py"));
    }
}
