//! Host-side driver for the Lyra external scanner.
//!
//! The core crate ([`lyra_scanner_core`]) is the scanner itself: a state
//! machine behind the five-entry-point external-scanner contract. This
//! crate is the reference embedding — the pieces a host parser (or a test
//! rig standing in for one) needs around that contract:
//!
//! - [`ScanSession`]: speculative scans with cursor rollback, plus
//!   checkpoint/restore through the scanner's wire format, the way the
//!   incremental parser suspends and resumes mid-literal.
//! - [`Span`] and [`ScannedToken`]: byte-offset token reporting.
//! - [`OpenLiteral`]: the "unterminated literal" diagnosis the grammar
//!   turns into a parse error after end of input.
//! - [`scan_literals`]: a convenience driver that walks a whole input and
//!   collects its external tokens using the grammar's valid-set policy
//!   ([`valid_for_state`]).
//!
//! Session activity is reported through `tracing` events; attach a
//! subscriber to see per-scan decisions.

pub mod diagnostics;
pub mod session;
pub mod span;

pub use diagnostics::OpenLiteral;
pub use session::{scan_literals, valid_for_state, Checkpoint, ScanSession, ScannedToken};
pub use span::Span;

// The scanner surface, re-exported so embedders need only one dependency.
pub use lyra_scanner_core::{
    BufferLexer, Delimiter, Lexer, ScanState, Scanner, SourceBuffer, TokenKind, TokenSet,
};
