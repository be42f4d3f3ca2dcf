use super::*;

/// Scalar reference predicates, written directly from the class
/// definitions. The packed table is checked against these over the full
/// byte range and over arbitrary chars.
mod reference {
    pub fn delimiter_start(c: u32) -> bool {
        (u32::from(b'A')..=u32::from(b'Z')).contains(&c)
    }

    pub fn delimiter_continue(c: u32) -> bool {
        delimiter_start(c) || (u32::from(b'0')..=u32::from(b'9')).contains(&c) || c == u32::from(b'_')
    }

    pub fn tag_name_start(c: u32) -> bool {
        delimiter_start(c) || (u32::from(b'a')..=u32::from(b'z')).contains(&c) || c == u32::from(b'_')
    }

    pub fn tag_name_continue(c: u32) -> bool {
        tag_name_start(c)
            || (u32::from(b'0')..=u32::from(b'9')).contains(&c)
            || c == u32::from(b'.')
            || c == u32::from(b'-')
    }

    pub fn lang_hint_start(c: u32) -> bool {
        (u32::from(b'a')..=u32::from(b'z')).contains(&c)
    }

    pub fn lang_hint_continue(c: u32) -> bool {
        lang_hint_start(c)
            || (u32::from(b'0')..=u32::from(b'9')).contains(&c)
            || c == u32::from(b'_')
            || c == u32::from(b'.')
            || c == u32::from(b'-')
    }
}

// === Spot checks ===

#[test]
fn delimiter_start_is_uppercase_only() {
    assert!(is_delimiter_start(u32::from(b'A')));
    assert!(is_delimiter_start(u32::from(b'Z')));

    assert!(!is_delimiter_start(u32::from(b'a')));
    assert!(!is_delimiter_start(u32::from(b'0')));
    assert!(!is_delimiter_start(u32::from(b'_')));
    assert!(!is_delimiter_start(u32::from(b'<')));
}

#[test]
fn delimiter_continue_adds_digits_and_underscore() {
    assert!(is_delimiter_continue(u32::from(b'A')));
    assert!(is_delimiter_continue(u32::from(b'0')));
    assert!(is_delimiter_continue(u32::from(b'9')));
    assert!(is_delimiter_continue(u32::from(b'_')));

    assert!(!is_delimiter_continue(u32::from(b'a')));
    assert!(!is_delimiter_continue(u32::from(b'-')));
    assert!(!is_delimiter_continue(u32::from(b'.')));
}

#[test]
fn tag_name_start_allows_both_cases_and_underscore() {
    assert!(is_tag_name_start(u32::from(b'a')));
    assert!(is_tag_name_start(u32::from(b'Z')));
    assert!(is_tag_name_start(u32::from(b'_')));

    assert!(!is_tag_name_start(u32::from(b'0')));
    assert!(!is_tag_name_start(u32::from(b'-')));
    assert!(!is_tag_name_start(u32::from(b'.')));
    assert!(!is_tag_name_start(u32::from(b'@')));
}

#[test]
fn tag_name_continue_adds_digits_dot_dash() {
    assert!(is_tag_name_continue(u32::from(b'x')));
    assert!(is_tag_name_continue(u32::from(b'7')));
    assert!(is_tag_name_continue(u32::from(b'.')));
    assert!(is_tag_name_continue(u32::from(b'-')));
    assert!(is_tag_name_continue(u32::from(b'_')));

    assert!(!is_tag_name_continue(u32::from(b' ')));
    assert!(!is_tag_name_continue(u32::from(b'@')));
    assert!(!is_tag_name_continue(u32::from(b'/')));
}

#[test]
fn lang_hint_is_lowercase_led() {
    assert!(is_lang_hint_start(u32::from(b's')));
    assert!(!is_lang_hint_start(u32::from(b'S')));
    assert!(!is_lang_hint_start(u32::from(b'1')));

    assert!(is_lang_hint_continue(u32::from(b'1')));
    assert!(is_lang_hint_continue(u32::from(b'.')));
    assert!(is_lang_hint_continue(u32::from(b'-')));
    assert!(is_lang_hint_continue(u32::from(b'_')));
    assert!(!is_lang_hint_continue(u32::from(b'S')));
}

#[test]
fn sentinel_byte_has_no_class() {
    assert!(!is_delimiter_start(0));
    assert!(!is_delimiter_continue(0));
    assert!(!is_tag_name_start(0));
    assert!(!is_tag_name_continue(0));
    assert!(!is_lang_hint_start(0));
    assert!(!is_lang_hint_continue(0));
}

#[test]
fn non_ascii_fails_every_predicate() {
    // Letters with diacritics, Greek, CJK, emoji — none qualify.
    for c in ['\u{00C9}', '\u{03BB}', '\u{4E2D}', '\u{1F600}'] {
        let c = u32::from(c);
        assert!(!is_delimiter_start(c));
        assert!(!is_delimiter_continue(c));
        assert!(!is_tag_name_start(c));
        assert!(!is_tag_name_continue(c));
        assert!(!is_lang_hint_start(c));
        assert!(!is_lang_hint_continue(c));
    }
}

// === Table vs reference ===

#[test]
fn table_matches_reference_over_all_bytes() {
    for c in 0u32..=255 {
        assert_eq!(
            is_delimiter_start(c),
            reference::delimiter_start(c),
            "delimiter_start mismatch at {c:#x}"
        );
        assert_eq!(
            is_delimiter_continue(c),
            reference::delimiter_continue(c),
            "delimiter_continue mismatch at {c:#x}"
        );
        assert_eq!(
            is_tag_name_start(c),
            reference::tag_name_start(c),
            "tag_name_start mismatch at {c:#x}"
        );
        assert_eq!(
            is_tag_name_continue(c),
            reference::tag_name_continue(c),
            "tag_name_continue mismatch at {c:#x}"
        );
        assert_eq!(
            is_lang_hint_start(c),
            reference::lang_hint_start(c),
            "lang_hint_start mismatch at {c:#x}"
        );
        assert_eq!(
            is_lang_hint_continue(c),
            reference::lang_hint_continue(c),
            "lang_hint_continue mismatch at {c:#x}"
        );
    }
}

mod proptest_classes {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn table_matches_reference_for_arbitrary_chars(ch in any::<char>()) {
            let c = u32::from(ch);
            prop_assert_eq!(is_delimiter_start(c), reference::delimiter_start(c));
            prop_assert_eq!(is_delimiter_continue(c), reference::delimiter_continue(c));
            prop_assert_eq!(is_tag_name_start(c), reference::tag_name_start(c));
            prop_assert_eq!(is_tag_name_continue(c), reference::tag_name_continue(c));
            prop_assert_eq!(is_lang_hint_start(c), reference::lang_hint_start(c));
            prop_assert_eq!(is_lang_hint_continue(c), reference::lang_hint_continue(c));
        }
    }
}
