//! Open-literal reporting.
//!
//! The scanner deliberately leaves `in_heredoc`/`in_raw_string` set when
//! input ends inside a literal — the host may be mid-edit, and closing the
//! literal silently would hide the error. [`OpenLiteral`] is the channel
//! through which the surrounding grammar reports it.

use crate::span::Span;
use lyra_scanner_core::Delimiter;

/// A literal still open when the input ended.
///
/// Produced by [`ScanSession::open_literal`](crate::ScanSession::open_literal).
/// `opened_at` is the opener token's span when the session saw it; a session
/// resumed from a foreign state record has no opener span to offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenLiteral {
    /// A heredoc whose closing delimiter line never arrived.
    Heredoc {
        /// The delimiter captured at open time.
        delimiter: Delimiter,
        /// Where the heredoc was opened, if this session saw the opener.
        opened_at: Option<Span>,
    },
    /// A raw string whose closing quote-and-hashes run never arrived.
    RawString {
        /// Number of `#` marks required after the closing quote.
        hashes: u8,
        /// Where the raw string was opened, if this session saw the opener.
        opened_at: Option<Span>,
    },
}

impl OpenLiteral {
    /// The opener's span, when known.
    pub fn opened_at(&self) -> Option<Span> {
        match self {
            OpenLiteral::Heredoc { opened_at, .. } | OpenLiteral::RawString { opened_at, .. } => {
                *opened_at
            }
        }
    }
}

impl std::fmt::Display for OpenLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenLiteral::Heredoc {
                delimiter,
                opened_at,
            } => {
                write!(f, "unterminated heredoc: missing closing delimiter `{delimiter}`")?;
                if let Some(span) = opened_at {
                    write!(f, " (opened at {span})")?;
                }
                Ok(())
            }
            OpenLiteral::RawString { hashes, opened_at } => {
                write!(
                    f,
                    "unterminated raw string: missing closing `\"{}`",
                    "#".repeat(usize::from(*hashes))
                )?;
                if let Some(span) = opened_at {
                    write!(f, " (opened at {span})")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for OpenLiteral {}

#[cfg(test)]
mod tests;
