pub(crate) struct CliArgs {
    pub cmd: String,
    pub verbose: bool,
    pub json_out: bool,
    pub color: bool,
    pub suffix: Option<String>,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: flatpy <flatten|check|imports> [verbose] [json] [color] [suffix=<ext>] <entry-file> [files...]"
}

pub(crate) fn parse_args() -> Result<CliArgs, String> {
    parse_from(std::env::args().skip(1).collect())
}

fn parse_from(mut argv: Vec<String>) -> Result<CliArgs, String> {
    if argv.is_empty() {
        return Err(usage().to_string());
    }
    let cmd = argv.remove(0);

    let mut verbose = false;
    let mut json_out = false;
    let mut color = false;
    let mut suffix = None;
    let mut positional: Vec<String> = Vec::new();

    for a in argv {
        if a.starts_with("--") {
            return Err(format!("Unknown option: {a}"));
        }
        if a == "verbose" {
            verbose = true;
        } else if a == "json" {
            json_out = true;
        } else if a == "color" {
            color = true;
        } else if let Some(ext) = a.strip_prefix("suffix=") {
            if ext.is_empty() {
                return Err("suffix= needs a value, e.g. suffix=.py".into());
            }
            suffix = Some(ext.to_string());
        } else {
            positional.push(a);
        }
    }

    Ok(CliArgs {
        cmd,
        verbose,
        json_out,
        color,
        suffix,
        positional,
    })
}
