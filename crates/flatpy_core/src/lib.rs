//! flatpy_core: flattens a set of exercise scripts into one runnable script.
//!
//! Relative imports of the two supported shapes (`import .m` and
//! `from .m import a, b`) are resolved against an in-memory [`FileRegistry`]
//! and inlined. Selective imports are wrapped in a synthesized function that
//! returns only the requested names. Entry points: [`resolve`] for the typed
//! result and [`run`] for the never-failing orchestrator.
mod chain;
mod config;
mod entry;
mod error;
mod import;
mod registry;
mod resolver;
mod workspace;

pub use chain::ImportChain;
pub use config::ResolverConfig;
pub use entry::{fallback_script, run, try_run};
pub use error::{ImportSite, ResolveError, ResolveErrorKind};
pub use import::{ImportDescriptor, LineKind, classify, scan_imports};
pub use registry::{ExerciseFile, FileRegistry};
pub use resolver::{Resolver, resolve};
pub use workspace::{Workspace, WorkspaceError};
