use super::*;

fn delimiter(text: &str) -> Delimiter {
    let mut d = Delimiter::new();
    for b in text.bytes() {
        d.push(u32::from(b));
    }
    d
}

#[test]
fn heredoc_display_names_the_delimiter() {
    let open = OpenLiteral::Heredoc {
        delimiter: delimiter("EOF"),
        opened_at: None,
    };
    assert_eq!(
        open.to_string(),
        "unterminated heredoc: missing closing delimiter `EOF`"
    );
}

#[test]
fn heredoc_display_includes_opener_span_when_known() {
    let open = OpenLiteral::Heredoc {
        delimiter: delimiter("SQL"),
        opened_at: Some(Span::new(4, 9)),
    };
    assert_eq!(
        open.to_string(),
        "unterminated heredoc: missing closing delimiter `SQL` (opened at 4..9)"
    );
}

#[test]
fn raw_string_display_shows_the_required_closer() {
    let open = OpenLiteral::RawString {
        hashes: 2,
        opened_at: None,
    };
    assert_eq!(
        open.to_string(),
        "unterminated raw string: missing closing `\"##`"
    );
}

#[test]
fn zero_hash_raw_string_closer_is_a_bare_quote() {
    let open = OpenLiteral::RawString {
        hashes: 0,
        opened_at: Some(Span::new(0, 2)),
    };
    assert_eq!(
        open.to_string(),
        "unterminated raw string: missing closing `\"` (opened at 0..2)"
    );
}

#[test]
fn opened_at_accessor() {
    let span = Span::new(1, 6);
    let open = OpenLiteral::Heredoc {
        delimiter: delimiter("X"),
        opened_at: Some(span),
    };
    assert_eq!(open.opened_at(), Some(span));

    let open = OpenLiteral::RawString {
        hashes: 1,
        opened_at: None,
    };
    assert_eq!(open.opened_at(), None);
}

#[test]
fn usable_as_a_boxed_error() {
    let open: Box<dyn std::error::Error> = Box::new(OpenLiteral::RawString {
        hashes: 1,
        opened_at: None,
    });
    assert!(open.to_string().contains("unterminated raw string"));
}
