//! External scanner for Lyra's context-sensitive tokens.
//!
//! A context-free grammar cannot recognize three pieces of Lyra's surface
//! syntax on its own:
//!
//! - **Heredocs** `<<DELIM[,lang]` … `DELIM` — the closing delimiter is
//!   captured at the opening position and matched literally later.
//! - **Raw strings** `r#*"…"#*` — the opening hash count decides exactly
//!   how many hashes close the literal.
//! - **The `@` sigil** — a bare *unit* token or the start of a tag `@name`,
//!   decided by one character of lookahead plus which token kinds the
//!   grammar currently accepts.
//!
//! The host incremental parser calls [`Scanner::scan`] whenever one of the
//! nine external token kinds is legal; the scanner either produces exactly
//! one token (advancing the host's cursor) or declines. Between calls the
//! host may suspend, serialize, or discard the scanner, so everything the
//! scanner needs to resume a half-parsed literal lives in the pocket-sized
//! [`ScanState`] record and its fixed wire format.
//!
//! This crate is standalone (no `lyra_*` dependencies) so hosts and external
//! tools can embed the scanner without pulling in the driver layer. The
//! host's cursor is abstracted behind the [`Lexer`] trait; [`SourceBuffer`]
//! and [`BufferLexer`] provide the in-memory implementation used by the
//! driver crate, the tests, and the benchmarks.

pub mod buffer;
pub mod classify;
pub mod host;
pub mod scanner;
pub mod state;
pub mod token;

pub use buffer::{BufferLexer, SourceBuffer};
pub use host::Lexer;
pub use scanner::Scanner;
pub use state::{Delimiter, ScanState, MAX_DELIMITER_LEN, MAX_HASH_COUNT, SERIALIZED_CAP};
pub use token::{TokenKind, TokenSet};
