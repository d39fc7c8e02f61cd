use std::io::Write;

use flatpy_core::{ImportDescriptor, scan_imports};
use serde_json::json;

use crate::args::CliArgs;
use crate::commands::common::{config_from, load_exercise};

pub(crate) fn run(args: &CliArgs) {
    let config = config_from(args);
    let exercise = match load_exercise(args, &config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let mut out = std::io::stdout().lock();
    for (line, desc) in scan_imports(exercise.entry_content()) {
        let kind = match desc {
            ImportDescriptor::ImportAll { .. } => "all",
            ImportDescriptor::ImportSome { .. } => "some",
        };
        let module = config.short_name(desc.module_path());
        let found = exercise.registry.contains(&module);
        let written = if args.json_out {
            let obj = json!({
                "file": exercise.entry,
                "line": line + 1,
                "kind": kind,
                "module": module,
                "names": desc.names(),
                "found": found,
            });
            writeln!(out, "{obj}")
        } else {
            let missing = if found { "" } else { "\t(missing)" };
            writeln!(
                out,
                "{}\t{kind}\t{module}\t{}{missing}",
                line + 1,
                desc.names().join(", ")
            )
        };
        if let Err(e) = written {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                return;
            }
            eprintln!("stdout error: {e}");
            std::process::exit(2);
        }
    }
}
