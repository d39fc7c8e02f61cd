use flatpy_core::{
    ExerciseFile, FileRegistry, ResolverConfig, Workspace, WorkspaceError, fallback_script, run,
    scan_imports, try_run,
};

const CYCLE_MESSAGE: &str =
    "main.py has already been imported. Mutually recursive imports are not allowed.";

#[test]
fn run_returns_flattened_script_on_success() {
    let reg: FileRegistry = [("main.py", "import .a\nprint(A)"), ("a.py", "A = 1")]
        .into_iter()
        .collect();
    let out = run("main.py", "import .a\nprint(A)", &reg, &ResolverConfig::default());
    assert_eq!(out, "\nA = 1\n\nprint(A)");
}

#[test]
fn run_degrades_failure_to_print_script() {
    let reg: FileRegistry = [("main.py", "import .nope\nprint('never')")]
        .into_iter()
        .collect();
    let cfg = ResolverConfig::default();
    let err = try_run("main.py", "import .nope\nprint('never')", &reg, &cfg).unwrap_err();
    let out = run("main.py", "import .nope\nprint('never')", &reg, &cfg);
    assert_eq!(out, fallback_script(&err.to_string()));
    assert!(!out.contains("never"), "no partial output: {out}");
}

#[test]
fn default_exercise_flattens_nested_selective_imports() {
    let mut ws = Workspace::default_exercise();
    assert_eq!(ws.selected().short_name, "main.py");
    ws.select("test.py").unwrap();
    let out = ws.run_wrapped();
    assert!(scan_imports(&out).is_empty(), "{out}");
    assert!(out.contains("greetWorld = __wrap1()"), "{out}");
    assert!(out.contains("\t\treturn greeting, getLocality"), "{out}");
    assert!(out.trim_end().ends_with("greetWorld()"), "{out}");
}

#[test]
fn uncommenting_the_cyclic_import_yields_the_cycle_message() {
    let mut ws = Workspace::default_exercise();
    ws.select("utils.py").unwrap();
    let edited = ws
        .editor_value()
        .replace("#from .main import foo", "from .main import foo");
    ws.set_editor_value(edited);
    ws.select("main.py").unwrap();
    assert!(ws.files()[1].is_modified());
    assert_eq!(ws.run_wrapped(), format!("print(\"{CYCLE_MESSAGE}\")"));
}

#[test]
fn snapshot_includes_uncommitted_buffer() {
    let mut ws = Workspace::new(vec![
        ExerciseFile::new("main.py", "import .lib"),
        ExerciseFile::new("lib.py", "X = 1"),
    ])
    .unwrap();
    ws.set_editor_value("import .lib\nprint(X)");
    assert_eq!(ws.selected().content, "import .lib");
    assert_eq!(ws.snapshot().get("main.py"), Some("import .lib\nprint(X)"));
    assert_eq!(ws.run_wrapped(), "\nX = 1\n\nprint(X)");
    assert_eq!(ws.run_raw(), "import .lib\nprint(X)");

    ws.commit();
    assert_eq!(ws.selected().content, "import .lib\nprint(X)");
    ws.reset_selected();
    assert_eq!(ws.editor_value(), "import .lib");
    assert!(!ws.selected().is_modified());
}

#[test]
fn selecting_unknown_file_fails_and_keeps_state() {
    let mut ws = Workspace::default_exercise();
    ws.set_editor_value("changed");
    let err = ws.select("missing.py").unwrap_err();
    assert_eq!(err, WorkspaceError::UnknownFile("missing.py".into()));
    assert_eq!(ws.selected().short_name, "main.py");
    assert_eq!(ws.editor_value(), "changed");
}

#[test]
fn empty_workspace_is_rejected() {
    assert_eq!(Workspace::new(Vec::new()).unwrap_err(), WorkspaceError::NoFiles);
}

#[test]
fn workspace_honors_custom_config() {
    let ws = Workspace::new(vec![
        ExerciseFile::new("main.py", "from .m import v"),
        ExerciseFile::new("m.py", "v = 1"),
    ])
    .unwrap()
    .with_config(ResolverConfig::new().with_indent("    "));
    assert_eq!(
        ws.run_wrapped(),
        "def __wrap0():\n    v = 1\n    return v\nv = __wrap0()"
    );
}
