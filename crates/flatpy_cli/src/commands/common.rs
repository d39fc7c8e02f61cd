use std::fs;
use std::path::{Path, PathBuf};

use flatpy_core::{FileRegistry, ResolverConfig};
use flatpy_syntax::normalize_source;
use tracing::{debug, warn};

use crate::args::CliArgs;

/// Files of one exercise as loaded from disk.
pub(crate) struct Exercise {
    pub entry: String,
    pub registry: FileRegistry,
}

impl Exercise {
    pub fn entry_content(&self) -> &str {
        self.registry.get(&self.entry).unwrap_or_default()
    }
}

pub(crate) fn config_from(args: &CliArgs) -> ResolverConfig {
    match &args.suffix {
        Some(ext) => ResolverConfig::new().with_module_suffix(ext.clone()),
        None => ResolverConfig::default(),
    }
}

pub(crate) fn entry_arg(args: &CliArgs) -> &str {
    let Some(path) = args.positional.first() else {
        eprintln!("Missing <file>");
        std::process::exit(2);
    };
    path
}

/// Loads the entry file, every module file next to it, and any extra files
/// named on the command line. The entry is registered first.
pub(crate) fn load_exercise(args: &CliArgs, config: &ResolverConfig) -> Result<Exercise, String> {
    let entry_path = PathBuf::from(entry_arg(args));
    let entry = short_name_of(&entry_path)?;
    let mut registry = FileRegistry::new();
    registry.insert(entry.clone(), read_source(&entry_path)?);

    let dir = match entry_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    for path in sibling_modules(&dir, config)? {
        let name = short_name_of(&path)?;
        if name != entry {
            registry.insert(name, read_source(&path)?);
        }
    }
    for extra in args.positional.iter().skip(1) {
        let path = PathBuf::from(extra);
        let name = short_name_of(&path)?;
        if name == entry {
            warn!(file = %path.display(), "skipping extra file named like the entry");
            continue;
        }
        registry.insert(name, read_source(&path)?);
    }
    debug!(entry = %entry, files = registry.len(), "loaded exercise");
    Ok(Exercise { entry, registry })
}

fn sibling_modules(dir: &Path, config: &ResolverConfig) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read directory {}: {e}", dir.display()))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| config.is_module_file(n))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn short_name_of(path: &Path) -> Result<String, String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| format!("Not a file name: {}", path.display()))
}

fn read_source(path: &Path) -> Result<String, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file {}: {e}", path.display()))?;
    Ok(normalize_source(&text))
}
