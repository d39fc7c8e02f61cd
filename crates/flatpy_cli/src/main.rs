mod args;
mod commands;

use flatpy_syntax::RenderOptions;
use tracing_subscriber::EnvFilter;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    let args = match args::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    init_tracing(args.verbose);
    let render_opts = RenderOptions { color: args.color };

    match args.cmd.as_str() {
        "flatten" => commands::flatten::run(&args, render_opts),
        "check" => commands::check::run(&args, render_opts),
        "imports" => commands::imports::run(&args),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!("{}", args::usage());
            std::process::exit(2);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
