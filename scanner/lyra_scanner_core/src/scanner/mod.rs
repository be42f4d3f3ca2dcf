//! The scanner: dispatch plus the three sub-state-machines.
//!
//! One [`Scanner`] value carries the whole external-scanner contract:
//! *create* is [`Scanner::new`], *destroy* is `Drop` (the state owns
//! nothing), *serialize*/*deserialize* move the persistent record through
//! its fixed wire format, and [`scan`](Scanner::scan) produces at most one
//! external token per call.
//!
//! # Dispatch
//!
//! Each scan call runs an ordered policy: skip horizontal whitespace when
//! no literal is open, then give the pending language hint a chance, then
//! the open literal's body scanner, then the sigil, then the two openers.
//! While a literal is open the grammar only marks its body/close kinds
//! valid, which is what keeps new constructs from starting inside one.
//!
//! # Speculation
//!
//! Sub-scanners may consume input and still decline (the sigil branch does
//! so by design). That is safe because the host restores the cursor
//! whenever `scan` returns `false`; state commits are therefore kept until
//! after the last point of failure in every sub-scanner.

use crate::classify;
use crate::host::Lexer;
use crate::state::{Delimiter, ScanState, MAX_HASH_COUNT};
use crate::token::{TokenKind, TokenSet};

/// An ASCII byte as a code point, for lookahead comparisons.
#[allow(clippy::cast_lossless, reason = "u32::from is not const-callable here")]
const fn ch(b: u8) -> u32 {
    b as u32
}

/// The external scanner.
///
/// Holds nothing but the persistent [`ScanState`]; every instance is
/// independent and single-threaded by contract.
#[derive(Clone, Debug, Default)]
pub struct Scanner {
    state: ScanState,
}

impl Scanner {
    /// A freshly zeroed scanner (the *create* entry point).
    pub fn new() -> Self {
        Self::default()
    }

    /// The persistent state, for drivers that need to derive valid-symbol
    /// sets or report open literals.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Write the persistent state into `out`; returns the byte count.
    ///
    /// `out` must hold at least [`SERIALIZED_CAP`](crate::state::SERIALIZED_CAP)
    /// bytes (the host guarantees ≥ 32).
    pub fn serialize(&self, out: &mut [u8]) -> usize {
        self.state.serialize(out)
    }

    /// Replace the persistent state with the record in `data`.
    ///
    /// Never fails; see [`ScanState::deserialize`] for the short-buffer
    /// semantics.
    pub fn deserialize(&mut self, data: &[u8]) {
        self.state.deserialize(data);
    }

    /// Produce at most one external token.
    ///
    /// Returns `true` after writing the token kind onto `lexer` and
    /// advancing it past the token; returns `false` to decline, in which
    /// case the host rolls the cursor back and tries its internal lexer.
    pub fn scan<L: Lexer>(&mut self, lexer: &mut L, valid: TokenSet) -> bool {
        self.state.debug_assert_invariants();

        // Horizontal whitespace is insignificant outside literals; newlines
        // are structural and stay.
        if self.state.is_idle() {
            loop {
                let c = lexer.lookahead();
                if c != ch(b' ') && c != ch(b'\t') {
                    break;
                }
                lexer.skip();
            }
        }

        // A heredoc opener was just emitted: the optional language hint
        // gets the first look. On decline we fall through to the body
        // scanner, which consumes the opener's newline.
        if self.state.heredoc_needs_lang_check
            && valid.accepts(TokenKind::HeredocLang)
            && self.scan_heredoc_lang(lexer)
        {
            return true;
        }

        if self.state.in_heredoc && valid.intersects(TokenSet::HEREDOC_BODY) {
            return self.scan_heredoc_content_or_end(lexer);
        }

        if self.state.in_raw_string && valid.intersects(TokenSet::RAW_STRING_BODY) {
            return self.scan_raw_string_content_or_end(lexer);
        }

        if lexer.lookahead() == ch(b'@') && valid.intersects(TokenSet::SIGIL) {
            return Self::scan_sigil(lexer, valid);
        }

        if lexer.lookahead() == ch(b'<') && valid.accepts(TokenKind::HeredocStart) {
            return self.scan_heredoc_start(lexer);
        }

        if lexer.lookahead() == ch(b'r') && valid.accepts(TokenKind::RawStringStart) {
            return self.scan_raw_string_start(lexer);
        }

        false
    }

    // ─── Heredoc ────────────────────────────────────────────────────────

    /// `<<DELIM` — the opener.
    ///
    /// Succeeds iff `<<` is followed by a non-empty run of delimiter
    /// characters (capped at the delimiter capacity) and then one of `,`,
    /// `\n`, `\r`. The terminator stays unconsumed. The captured delimiter
    /// is committed to the state only on success, so a failed attempt
    /// leaves the scanner untouched for the host's rollback.
    fn scan_heredoc_start<L: Lexer>(&mut self, lexer: &mut L) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        if lexer.lookahead() != ch(b'<') {
            return false;
        }
        lexer.advance();
        if lexer.lookahead() != ch(b'<') {
            return false;
        }
        lexer.advance();

        if !classify::is_delimiter_start(lexer.lookahead()) {
            return false;
        }
        let mut delimiter = Delimiter::new();
        while classify::is_delimiter_continue(lexer.lookahead()) {
            if !delimiter.push(lexer.lookahead()) {
                // Capacity reached with delimiter characters left over; the
                // terminator check below sees the 17th character and fails.
                break;
            }
            lexer.advance();
        }

        let terminator = lexer.lookahead();
        if terminator != ch(b',') && terminator != ch(b'\n') && terminator != ch(b'\r') {
            return false;
        }

        self.state.heredoc_delimiter = delimiter;
        self.state.in_heredoc = true;
        self.state.heredoc_needs_lang_check = true;
        lexer.set_result(TokenKind::HeredocStart);
        true
    }

    /// `,lang` right after the opener — the optional language hint.
    ///
    /// Only matches when the comma is present; the comma itself is skipped
    /// (not part of the token), and the trailing newline is consumed but
    /// excluded via the end mark. Declining here (no comma, bad hint, or
    /// missing newline) hands control to the body scanner.
    fn scan_heredoc_lang<L: Lexer>(&mut self, lexer: &mut L) -> bool {
        if !self.state.heredoc_needs_lang_check {
            return false;
        }
        if lexer.lookahead() != ch(b',') {
            return false;
        }
        lexer.skip();

        if !classify::is_lang_hint_start(lexer.lookahead()) {
            return false;
        }
        while classify::is_lang_hint_continue(lexer.lookahead()) {
            lexer.advance();
        }

        // The token ends at the hint; the newline below is consumed so the
        // body scanner starts on the first content line.
        lexer.mark_end();
        if lexer.lookahead() != ch(b'\n') && lexer.lookahead() != ch(b'\r') {
            return false;
        }
        if lexer.lookahead() == ch(b'\r') {
            lexer.advance();
        }
        if lexer.lookahead() == ch(b'\n') {
            lexer.advance();
        }

        self.state.heredoc_needs_lang_check = false;
        lexer.set_result(TokenKind::HeredocLang);
        true
    }

    /// Heredoc body and close, line by line.
    ///
    /// At each line start the token end is marked and the delimiter tried.
    /// A line that is exactly the delimiter (followed by a newline or end
    /// of input) closes the literal: content collected on earlier lines is
    /// returned first, and the next call re-matches the delimiter and
    /// emits the end token. Anything else is body content through the end
    /// of its line.
    fn scan_heredoc_content_or_end<L: Lexer>(&mut self, lexer: &mut L) -> bool {
        if !self.state.in_heredoc {
            return false;
        }

        // Move past the newline that ends the opener or language-hint
        // line. Skipped, not advanced, so the content token starts at the
        // first body byte. A newline can only be the tail of those lines:
        // body re-entries always land on a line start, because content
        // tokens end there.
        if lexer.lookahead() == ch(b'\r') {
            lexer.skip();
        }
        if lexer.lookahead() == ch(b'\n') {
            lexer.skip();
        }
        self.state.heredoc_needs_lang_check = false;

        let mut has_content = false;
        lexer.set_result(TokenKind::HeredocContent);

        loop {
            // Potential token end: the start of the current line.
            lexer.mark_end();

            if lexer.is_eof() {
                // Unterminated literal. Hand back the body collected so
                // far, if any; the open state stays set so the surrounding
                // grammar reports the error.
                return has_content;
            }

            let mut at_delimiter = true;
            for &b in self.state.heredoc_delimiter.as_bytes() {
                if lexer.lookahead() != u32::from(b) {
                    at_delimiter = false;
                    break;
                }
                lexer.advance();
            }

            if at_delimiter
                && (lexer.is_eof()
                    || lexer.lookahead() == ch(b'\n')
                    || lexer.lookahead() == ch(b'\r'))
            {
                if has_content {
                    // Content first; the end token comes on the next call.
                    return true;
                }
                self.state.in_heredoc = false;
                lexer.set_result(TokenKind::HeredocEnd);
                lexer.mark_end();
                return true;
            }

            // Not the closing line: the rest of it is content. Partial
            // delimiter matches above were already consumed into the line.
            has_content = true;
            lexer.advance_to_line_end();
            if lexer.lookahead() == ch(b'\r') {
                lexer.advance();
            }
            if lexer.lookahead() == ch(b'\n') {
                lexer.advance();
            }
        }
    }

    // ─── Raw string ─────────────────────────────────────────────────────

    /// `r#*"` — the raw string opener.
    ///
    /// Zero hashes are allowed (`r"…"`). The hash count is committed to
    /// the state only once the opening quote is seen.
    fn scan_raw_string_start<L: Lexer>(&mut self, lexer: &mut L) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        if lexer.lookahead() != ch(b'r') {
            return false;
        }
        lexer.advance();

        let mut hashes: u8 = 0;
        while lexer.lookahead() == ch(b'#') && hashes < MAX_HASH_COUNT {
            hashes += 1;
            lexer.advance();
        }

        if lexer.lookahead() != ch(b'"') {
            return false;
        }
        lexer.advance();

        self.state.raw_string_hash_count = hashes;
        self.state.in_raw_string = true;
        lexer.set_result(TokenKind::RawStringStart);
        true
    }

    /// Raw string body and close.
    ///
    /// Every `"` is a candidate closer: it counts the hashes that follow,
    /// and only a run of exactly the opener's length terminates the
    /// literal. Shorter runs — including none — fold into the content,
    /// which is what lets `"#` appear inside an `r##"…"##` literal.
    fn scan_raw_string_content_or_end<L: Lexer>(&mut self, lexer: &mut L) -> bool {
        if !self.state.in_raw_string {
            return false;
        }

        let mut has_content = false;
        lexer.set_result(TokenKind::RawStringContent);

        loop {
            if lexer.is_eof() {
                // Unterminated literal; same policy as the heredoc body.
                if has_content {
                    lexer.mark_end();
                    return true;
                }
                return false;
            }

            if lexer.lookahead() == ch(b'"') {
                // Candidate closer. Mark the end first: if this is the
                // terminator and content precedes it, the content token
                // ends right here.
                lexer.mark_end();
                lexer.advance();

                let mut seen: u8 = 0;
                while lexer.lookahead() == ch(b'#') && seen < self.state.raw_string_hash_count {
                    seen += 1;
                    lexer.advance();
                }

                if seen == self.state.raw_string_hash_count {
                    if has_content {
                        // Content first; the closer is re-scanned on the
                        // next call.
                        return true;
                    }
                    self.state.in_raw_string = false;
                    lexer.set_result(TokenKind::RawStringEnd);
                    lexer.mark_end();
                    return true;
                }

                // Too few hashes: the quote and the hashes are content.
                has_content = true;
            } else {
                has_content = true;
                lexer.advance();
            }
        }
    }

    // ─── Sigil ──────────────────────────────────────────────────────────

    /// `@` or `@name`, decided by one character of lookahead.
    ///
    /// The `@` is consumed unconditionally; if the chosen reading is not in
    /// the valid set the scan declines with input consumed, relying on the
    /// host's cursor rollback. Touches no persistent state.
    fn scan_sigil<L: Lexer>(lexer: &mut L, valid: TokenSet) -> bool {
        if lexer.lookahead() != ch(b'@') {
            return false;
        }
        lexer.advance();

        if classify::is_tag_name_start(lexer.lookahead()) {
            if !valid.accepts(TokenKind::TagStart) {
                return false;
            }
            while classify::is_tag_name_continue(lexer.lookahead()) {
                lexer.advance();
            }
            lexer.set_result(TokenKind::TagStart);
            true
        } else {
            if !valid.accepts(TokenKind::UnitAt) {
                return false;
            }
            lexer.set_result(TokenKind::UnitAt);
            true
        }
    }
}
