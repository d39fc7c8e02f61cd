//! Exercise workspace: the set of files being edited, the selected file, and
//! its unsaved editor buffer.

use thiserror::Error;

use crate::{ExerciseFile, FileRegistry, ResolverConfig, run};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("unknown file: {0}")]
    UnknownFile(String),
    #[error("an exercise needs at least one file")]
    NoFiles,
}

const DEFAULT_MAIN: &str = r#"# No ProgrammingExercise has been loaded.
# This is the default file main.py

from .utils import greeting, getLocality

def greetWorld():
  print(greeting(getLocality()))

def foo():
  print("foo!")
"#;

const DEFAULT_UTILS: &str = r#"# No ProgrammingExercise has been loaded.
# This is the default file utils.py

# Mutually recursive imports are disallowed.
# Try uncommenting the line below!
#from .main import foo

def greeting(recipient):
  return "Hello " + recipient + "!"

def getLocality():
  return "world"
"#;

const DEFAULT_TEST: &str = r#"# No ProgrammingExercise has been loaded.
# This is the default file test.py

from .main import greetWorld

greetWorld()
"#;

#[derive(Clone, Debug)]
pub struct Workspace {
    files: Vec<ExerciseFile>,
    selected: usize,
    editor_value: String,
    config: ResolverConfig,
}

impl Workspace {
    /// Opens `files` with the first one selected.
    pub fn new(files: Vec<ExerciseFile>) -> Result<Self, WorkspaceError> {
        let editor_value = files.first().ok_or(WorkspaceError::NoFiles)?.content.clone();
        Ok(Self {
            files,
            selected: 0,
            editor_value,
            config: ResolverConfig::default(),
        })
    }

    /// The sample exercise shown when nothing has been loaded.
    pub fn default_exercise() -> Self {
        let files = vec![
            ExerciseFile::new("main.py", DEFAULT_MAIN),
            ExerciseFile::new("utils.py", DEFAULT_UTILS),
            ExerciseFile::new("test.py", DEFAULT_TEST),
        ];
        Self {
            editor_value: DEFAULT_MAIN.to_string(),
            files,
            selected: 0,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn files(&self) -> &[ExerciseFile] {
        &self.files
    }

    pub fn selected(&self) -> &ExerciseFile {
        &self.files[self.selected]
    }

    pub fn editor_value(&self) -> &str {
        &self.editor_value
    }

    pub fn set_editor_value(&mut self, value: impl Into<String>) {
        self.editor_value = value.into();
    }

    /// Writes the editor buffer into the selected file.
    pub fn commit(&mut self) {
        let file = &mut self.files[self.selected];
        if file.content != self.editor_value {
            file.content.clone_from(&self.editor_value);
        }
    }

    /// Commits the buffer, then switches to `short_name`.
    pub fn select(&mut self, short_name: &str) -> Result<(), WorkspaceError> {
        let idx = self
            .files
            .iter()
            .position(|f| f.short_name == short_name)
            .ok_or_else(|| WorkspaceError::UnknownFile(short_name.to_string()))?;
        self.commit();
        self.selected = idx;
        self.editor_value = self.files[idx].content.clone();
        Ok(())
    }

    /// Restores the selected file and the buffer to the shipped content.
    pub fn reset_selected(&mut self) {
        let file = &mut self.files[self.selected];
        file.content = file.original_content.clone();
        self.editor_value = file.content.clone();
    }

    /// Frozen registry of all files; the selected file contributes the
    /// current editor buffer, committed or not.
    pub fn snapshot(&self) -> FileRegistry {
        let mut registry = FileRegistry::from_files(&self.files);
        registry.insert(self.selected().short_name.clone(), self.editor_value.clone());
        registry
    }

    /// Script for running the selected file with its imports inlined.
    pub fn run_wrapped(&self) -> String {
        let registry = self.snapshot();
        run(
            &self.selected().short_name,
            &self.editor_value,
            &registry,
            &self.config,
        )
    }

    /// Script for running the editor buffer as is.
    pub fn run_raw(&self) -> String {
        self.editor_value.clone()
    }
}
