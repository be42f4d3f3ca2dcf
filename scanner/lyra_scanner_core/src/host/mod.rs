//! The host lexer contract.
//!
//! The incremental parser owns the input and the cursor; the scanner only
//! ever sees this trait. Keeping the seam here lets the same scanner run
//! against the parser's own lexer, the in-memory
//! [`BufferLexer`](crate::buffer::BufferLexer), or a test double.

use crate::token::TokenKind;

/// The host's lookahead cursor, as seen by the scanner.
///
/// # Token boundaries
///
/// A token covers the characters consumed with [`advance`](Self::advance)
/// since the last [`skip`](Self::skip) (or since the scan call began), up
/// to the position frozen by [`mark_end`](Self::mark_end) — or up to the
/// current position if `mark_end` was never called. `skip` consumes a
/// character *without* including it in the token, moving the token's start
/// forward; the dispatch layer uses it for leading horizontal whitespace
/// and the heredoc language-hint comma.
///
/// # Rollback
///
/// The scanner may consume input and still decline (most visibly in the
/// sigil branch). The host guarantees that a declined scan restores the
/// cursor; implementations must therefore be cheap to snapshot.
pub trait Lexer {
    /// The code point at the cursor, without consuming it.
    ///
    /// Returns `0` at end of input; use [`is_eof`](Self::is_eof) to
    /// distinguish the end sentinel from a genuine NUL in the input.
    fn lookahead(&self) -> u32;

    /// Returns `true` once the input is exhausted.
    fn is_eof(&self) -> bool;

    /// Consume one character into the current token.
    fn advance(&mut self);

    /// Consume one character, excluding it from the current token.
    fn skip(&mut self);

    /// Freeze the token's right edge at the current position. Later
    /// `advance` calls extend lookahead only, until `mark_end` is called
    /// again.
    fn mark_end(&mut self);

    /// Record the kind of the token being produced. Write-only: the
    /// scanner never reads it back.
    fn set_result(&mut self, kind: TokenKind);

    /// Advance to the next `\n`, `\r`, or end of input, leaving the
    /// terminator unconsumed.
    ///
    /// The heredoc body scanner calls this once per non-closing line.
    /// Implementations over contiguous memory should override it with a
    /// bulk byte search; this default walks a character at a time.
    fn advance_to_line_end(&mut self) {
        while !self.is_eof() {
            let c = self.lookahead();
            if c == u32::from(b'\n') || c == u32::from(b'\r') {
                break;
            }
            self.advance();
        }
    }
}
