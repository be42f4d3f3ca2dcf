//! Speculative scan driving, the way the incremental parser does it.
//!
//! The host contract has two halves. The scanner's half — produce one
//! token or decline — lives in the core crate. This module implements the
//! host's half: snapshot the cursor before every scan, roll back on
//! decline, offer the valid-symbols set the current grammar state implies,
//! and suspend/resume through the scanner's wire format.
//!
//! [`BufferLexer`] is `Copy`, so a snapshot is a plain copy and rollback is
//! a plain assignment; there is no undo log.

use tracing::{debug, trace};

use lyra_scanner_core::{
    BufferLexer, ScanState, Scanner, SourceBuffer, TokenKind, TokenSet, SERIALIZED_CAP,
};

use crate::diagnostics::OpenLiteral;
use crate::span::Span;

/// One accepted external token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannedToken {
    /// What the scanner produced.
    pub kind: TokenKind,
    /// Where it lies in the source.
    pub span: Span,
}

/// A suspended session: the scanner's serialized record plus the cursor.
///
/// Restoring a checkpoint reinstates both, which is exactly what the host
/// does when a speculative parse is abandoned for an earlier snapshot.
#[derive(Clone, Copy, Debug)]
pub struct Checkpoint<'a> {
    record: [u8; SERIALIZED_CAP],
    record_len: usize,
    lexer: BufferLexer<'a>,
    last_opener: Option<(TokenKind, Span)>,
}

/// Drives one [`Scanner`] over one [`SourceBuffer`].
pub struct ScanSession<'a> {
    buffer: &'a SourceBuffer,
    lexer: BufferLexer<'a>,
    scanner: Scanner,
    /// Span of the most recent literal opener, for open-literal reports.
    last_opener: Option<(TokenKind, Span)>,
}

impl<'a> ScanSession<'a> {
    /// A fresh session at byte 0 with a zeroed scanner.
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            buffer,
            lexer: buffer.lexer(),
            scanner: Scanner::new(),
            last_opener: None,
        }
    }

    /// One speculative scan with the given valid-symbols set.
    ///
    /// On success the cursor rests just past the token (lookahead the
    /// scanner performed beyond the marked end is rewound by the token
    /// boundary itself). On decline the cursor is rolled back to where the
    /// call started and `None` is returned.
    pub fn scan(&mut self, valid: TokenSet) -> Option<ScannedToken> {
        let snapshot = self.lexer;
        self.lexer.begin_token();

        if self.scanner.scan(&mut self.lexer, valid) {
            let Some(kind) = self.lexer.result() else {
                unreachable!("scan reported success without writing a result symbol")
            };
            let span = Span::new(self.lexer.token_start(), self.lexer.token_end());
            // The token ends at the marked position; anything the scanner
            // looked at beyond it is not consumed.
            self.lexer = snapshot;
            self.lexer.seek(span.end);

            if kind.opens_literal() {
                self.last_opener = Some((kind, span));
            }
            trace!(kind = kind.name(), %span, "external token");
            Some(ScannedToken { kind, span })
        } else {
            self.lexer = snapshot;
            trace!(pos = self.lexer.pos(), "scan declined");
            None
        }
    }

    /// Hand one character to the grammar's internal lexer.
    ///
    /// The session does not lex ordinary tokens; when the scanner declines
    /// and input remains, the real host's internal lexer consumes it. This
    /// is the smallest faithful stand-in.
    pub fn advance_internal(&mut self) {
        use lyra_scanner_core::Lexer as _;
        self.lexer.advance();
    }

    /// Returns `true` once the cursor has consumed the whole input.
    pub fn at_eof(&self) -> bool {
        use lyra_scanner_core::Lexer as _;
        self.lexer.is_eof()
    }

    /// The scanner's persistent state.
    pub fn state(&self) -> &ScanState {
        self.scanner.state()
    }

    /// The source text a token covers.
    pub fn text(&self, token: &ScannedToken) -> &'a str {
        self.buffer.slice(token.span.start, token.span.end)
    }

    /// Suspend: serialize the scanner and snapshot the cursor.
    pub fn checkpoint(&self) -> Checkpoint<'a> {
        let mut record = [0u8; SERIALIZED_CAP];
        let record_len = self.scanner.serialize(&mut record);
        Checkpoint {
            record,
            record_len,
            lexer: self.lexer,
            last_opener: self.last_opener,
        }
    }

    /// Resume from a checkpoint taken on this session's buffer.
    ///
    /// Deserializes the scanner record into a fresh scanner, discarding
    /// whatever state accumulated since — the same motion the host makes
    /// when abandoning a speculative parse.
    pub fn restore(&mut self, checkpoint: &Checkpoint<'a>) {
        let mut scanner = Scanner::new();
        scanner.deserialize(&checkpoint.record[..checkpoint.record_len]);
        self.scanner = scanner;
        self.lexer = checkpoint.lexer;
        self.last_opener = checkpoint.last_opener;
        debug!(pos = self.lexer.pos(), "session restored from checkpoint");
    }

    /// The literal still open at this point, if any.
    ///
    /// Meaningful once [`at_eof`](Self::at_eof) is true; the surrounding
    /// grammar turns it into a parse error.
    pub fn open_literal(&self) -> Option<OpenLiteral> {
        let state = self.scanner.state();
        if state.in_heredoc {
            Some(OpenLiteral::Heredoc {
                delimiter: state.heredoc_delimiter,
                opened_at: self.opener_span(TokenKind::HeredocStart),
            })
        } else if state.in_raw_string {
            Some(OpenLiteral::RawString {
                hashes: state.raw_string_hash_count,
                opened_at: self.opener_span(TokenKind::RawStringStart),
            })
        } else {
            None
        }
    }

    fn opener_span(&self, kind: TokenKind) -> Option<Span> {
        match self.last_opener {
            Some((opener, span)) if opener == kind => Some(span),
            _ => None,
        }
    }
}

/// The valid-symbols set a grammar in the given scanner state offers.
///
/// At top level every opener is legal; inside a literal only its body and
/// close kinds are, which is what suppresses nested constructs. Right
/// after a heredoc opener the optional language hint joins the body kinds.
pub fn valid_for_state(state: &ScanState) -> TokenSet {
    if state.in_heredoc {
        if state.heredoc_needs_lang_check {
            TokenSet::HEREDOC_LANG | TokenSet::HEREDOC_BODY
        } else {
            TokenSet::HEREDOC_BODY
        }
    } else if state.in_raw_string {
        TokenSet::RAW_STRING_BODY
    } else {
        TokenSet::OPENERS
    }
}

/// Collect every external token in `buffer`, plus the literal left open at
/// end of input, if any.
///
/// Drives a [`ScanSession`] with [`valid_for_state`]; characters the
/// scanner declines go to the stand-in internal lexer one at a time.
pub fn scan_literals(buffer: &SourceBuffer) -> (Vec<ScannedToken>, Option<OpenLiteral>) {
    let mut session = ScanSession::new(buffer);
    let mut tokens = Vec::new();
    loop {
        let valid = valid_for_state(session.state());
        if let Some(token) = session.scan(valid) {
            tokens.push(token);
        } else if session.at_eof() {
            break;
        } else {
            session.advance_internal();
        }
    }
    let open = session.open_literal();
    debug!(
        tokens = tokens.len(),
        unterminated = open.is_some(),
        "input scanned"
    );
    (tokens, open)
}
