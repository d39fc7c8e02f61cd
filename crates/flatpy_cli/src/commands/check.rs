use flatpy_core::Resolver;
use flatpy_syntax::RenderOptions;
use tracing::info;

use crate::args::CliArgs;
use crate::commands::common::{config_from, load_exercise};
use crate::commands::emit_error;

pub(crate) fn run(args: &CliArgs, render_opts: RenderOptions) {
    let config = config_from(args);
    let exercise = match load_exercise(args, &config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let mut resolver = Resolver::new(&exercise.registry, &config);
    match resolver.resolve_file(&exercise.entry) {
        Ok(_) => info!(
            entry = %exercise.entry,
            wrappers = resolver.wrappers_emitted(),
            "imports resolve"
        ),
        Err(e) => {
            emit_error(&exercise.registry, &exercise.entry, &e, render_opts, args.json_out);
            std::process::exit(1);
        }
    }
}
