use std::fmt;
use std::sync::Arc;

/// The short-names on the active resolution path, root first.
///
/// A chain is never mutated: [`ImportChain::extended`] returns a new chain and
/// leaves the receiver as it was, so sibling imports never observe each
/// other's descent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportChain {
    names: Arc<[String]>,
}

impl ImportChain {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            names: Arc::from(vec![name.into()]),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn extended(&self, name: impl Into<String>) -> Self {
        let mut names = self.names.to_vec();
        names.push(name.into());
        Self {
            names: Arc::from(names),
        }
    }

    pub fn root_name(&self) -> &str {
        &self.names[0]
    }

    pub fn leaf(&self) -> &str {
        &self.names[self.names.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// A chain starts with its root, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for ImportChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" -> "))
    }
}
