use flatpy_syntax::{SourceFile, find_best_match};
use indexmap::IndexMap;

use crate::ResolveError;

/// One exercise file as the editing surface holds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseFile {
    /// Registry key, e.g. `utils.py`.
    pub short_name: String,
    /// Content as originally shipped with the exercise.
    pub original_content: String,
    /// Current, possibly edited, content.
    pub content: String,
}

impl ExerciseFile {
    pub fn new(short_name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            short_name: short_name.into(),
            original_content: content.clone(),
            content,
        }
    }

    pub fn is_modified(&self) -> bool {
        self.content != self.original_content
    }
}

/// Frozen `short_name -> content` snapshot for one resolution pass.
/// Iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileRegistry {
    files: IndexMap<String, String>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a file, returning the previous content.
    pub fn insert(&mut self, short_name: impl Into<String>, content: impl Into<String>) -> Option<String> {
        self.files.insert(short_name.into(), content.into())
    }

    pub fn from_files<'a>(files: impl IntoIterator<Item = &'a ExerciseFile>) -> Self {
        files
            .into_iter()
            .map(|f| (f.short_name.clone(), f.content.clone()))
            .collect()
    }

    /// Content of `short_name`, or `ModuleNotFound` with the closest
    /// registered name as a suggestion.
    pub fn lookup(&self, short_name: &str) -> Result<&str, ResolveError> {
        self.get(short_name).ok_or_else(|| ResolveError::ModuleNotFound {
            module: short_name.to_string(),
            suggestion: find_best_match(short_name, self.names()).map(str::to_string),
            site: None,
        })
    }

    pub fn get(&self, short_name: &str) -> Option<&str> {
        self.files.get(short_name).map(String::as_str)
    }

    pub fn contains(&self, short_name: &str) -> bool {
        self.files.contains_key(short_name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn source_file(&self, short_name: &str) -> Option<SourceFile> {
        self.get(short_name)
            .map(|content| SourceFile::new(short_name, content))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FileRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            files: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResolveErrorKind;

    #[test]
    fn lookup_missing_fails_with_suggestion() {
        let reg: FileRegistry = [("main.py", ""), ("utils.py", "x = 1")].into_iter().collect();
        assert_eq!(reg.lookup("utils.py").unwrap(), "x = 1");
        let err = reg.lookup("util.py").unwrap_err();
        assert_eq!(err.kind(), ResolveErrorKind::ModuleNotFound);
        assert_eq!(err.module(), "util.py");
        let ResolveError::ModuleNotFound { suggestion, .. } = err else {
            unreachable!()
        };
        assert_eq!(suggestion.as_deref(), Some("utils.py"));
    }

    #[test]
    fn empty_content_is_still_found() {
        let mut reg = FileRegistry::new();
        reg.insert("empty.py", "");
        assert_eq!(reg.lookup("empty.py").unwrap(), "");
    }

    #[test]
    fn keeps_insertion_order() {
        let files = [
            ExerciseFile::new("b.py", "1"),
            ExerciseFile::new("a.py", "2"),
        ];
        let reg = FileRegistry::from_files(&files);
        assert_eq!(reg.names().collect::<Vec<_>>(), ["b.py", "a.py"]);
    }
}
