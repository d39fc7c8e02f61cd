use flatpy_core::{
    FileRegistry, ImportChain, LineKind, ResolverConfig, classify, resolve, scan_imports,
};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn plain_line() -> impl Strategy<Value = String> {
    "[a-z_ .,=()#:\"'\t]{0,30}".prop_filter("not an import", |l| classify(l) == LineKind::Plain)
}

fn plain_source() -> impl Strategy<Value = String> {
    proptest::collection::vec(plain_line(), 0..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, max_shrink_iters: 200, .. ProptestConfig::default()
    })]

    #[test]
    fn classify_never_panics(s in any::<String>()) {
        let _ = classify(&s);
    }

    #[test]
    fn recognized_imports_reclassify_from_display(
        stem in "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        names in proptest::collection::vec("[a-zA-Z_][a-zA-Z0-9_]{0,8}", 0..4),
    ) {
        let line = if names.is_empty() {
            format!("import .{stem}")
        } else {
            format!("from .{stem} import {}", names.join(" ,"))
        };
        let LineKind::Import(desc) = classify(&line) else {
            return Err(TestCaseError::fail(format!("not recognized: {line:?}")));
        };
        prop_assert_eq!(desc.module_path(), stem.as_str());
        prop_assert_eq!(desc.names(), names.as_slice());
        prop_assert_eq!(classify(&desc.to_string()), LineKind::Import(desc.clone()));
    }

    #[test]
    fn source_without_imports_is_unchanged(src in plain_source()) {
        let reg: FileRegistry = [("main.py", src.as_str())].into_iter().collect();
        let out = resolve(&src, &ImportChain::root("main.py"), &reg, &ResolverConfig::default());
        prop_assert_eq!(out, Ok(src));
    }

    #[test]
    fn inlined_output_has_no_import_lines(body in plain_source(), selective in any::<bool>()) {
        let main = if selective { "from .lib import x\nprint(x)" } else { "import .lib\nprint(1)" };
        let reg: FileRegistry = [("main.py", main), ("lib.py", body.as_str())].into_iter().collect();
        let out = resolve(main, &ImportChain::root("main.py"), &reg, &ResolverConfig::default()).unwrap();
        prop_assert!(scan_imports(&out).is_empty());
        for line in body.split('\n') {
            prop_assert!(out.contains(line));
        }
    }
}
