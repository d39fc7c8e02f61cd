use flatpy_syntax::normalize_source;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_text_has_no_carriage_returns(s in "[a-z \\r\\n\\t]{0,64}") {
        let out = normalize_source(&s);
        prop_assert!(!out.contains('\r'));
    }

    #[test]
    fn lf_only_text_is_unchanged(s in "[a-z .,()\\n]{0,64}") {
        prop_assert_eq!(normalize_source(&s), s);
    }
}
