use std::io::Write;

use flatpy_core::{fallback_script, try_run};
use flatpy_syntax::RenderOptions;
use serde_json::json;

use crate::args::CliArgs;
use crate::commands::common::{config_from, load_exercise};
use crate::commands::{emit_error, error_json};

pub(crate) fn run(args: &CliArgs, render_opts: RenderOptions) {
    let config = config_from(args);
    let exercise = match load_exercise(args, &config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let result = try_run(
        &exercise.entry,
        exercise.entry_content(),
        &exercise.registry,
        &config,
    );

    if args.json_out {
        let obj = match &result {
            Ok(script) => json!({ "entry": exercise.entry, "ok": true, "script": script, "error": null }),
            Err(e) => json!({
                "entry": exercise.entry,
                "ok": false,
                "script": fallback_script(&e.to_string()),
                "error": error_json(&exercise.registry, &exercise.entry, e),
            }),
        };
        println!("{obj}");
        if result.is_err() {
            std::process::exit(1);
        }
        return;
    }

    let script = match &result {
        Ok(script) => script.clone(),
        Err(e) => fallback_script(&e.to_string()),
    };
    let mut out = std::io::stdout().lock();
    if let Err(e) = writeln!(out, "{script}") {
        if e.kind() == std::io::ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("stdout error: {e}");
        std::process::exit(2);
    }
    if let Err(e) = result {
        emit_error(&exercise.registry, &exercise.entry, &e, render_opts, false);
        std::process::exit(1);
    }
}
