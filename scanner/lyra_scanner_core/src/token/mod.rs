//! External token kinds and the valid-symbols set.
//!
//! The grammar tells the scanner which external tokens it would currently
//! accept by passing a [`TokenSet`]; the scanner answers by writing one
//! [`TokenKind`] onto the host lexer.

use bitflags::bitflags;

/// One of the nine external token kinds the scanner can produce.
///
/// Discriminants are stable: they index the valid-symbols bitset and match
/// the order of the host grammar's external token declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// `<<DELIM` — heredoc opener (delimiter included, terminator not).
    HeredocStart = 0,
    /// The language hint after `<<DELIM,` — covers the hint name only.
    HeredocLang = 1,
    /// Heredoc body text; may span multiple physical lines.
    HeredocContent = 2,
    /// The closing delimiter line, spanning exactly the delimiter.
    HeredocEnd = 3,
    /// `r#*"` — raw string opener, hashes and quote included.
    RawStringStart = 4,
    /// Raw string body text; may span multiple physical lines.
    RawStringContent = 5,
    /// `"#*` — raw string closer, quote and matching hashes.
    RawStringEnd = 6,
    /// A bare `@` (the unit value).
    UnitAt = 7,
    /// `@name` — a tag opener, sigil and name included.
    TagStart = 8,
}

/// Size assertion: the kind must stay a single byte.
const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

impl TokenKind {
    /// Human-readable description for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::HeredocStart => "heredoc opener",
            TokenKind::HeredocLang => "heredoc language hint",
            TokenKind::HeredocContent => "heredoc content",
            TokenKind::HeredocEnd => "heredoc closing delimiter",
            TokenKind::RawStringStart => "raw string opener",
            TokenKind::RawStringContent => "raw string content",
            TokenKind::RawStringEnd => "raw string closer",
            TokenKind::UnitAt => "`@`",
            TokenKind::TagStart => "tag",
        }
    }

    /// Returns `true` for the kinds that open a literal spanning further
    /// scan calls (heredoc and raw string openers).
    pub fn opens_literal(self) -> bool {
        matches!(self, TokenKind::HeredocStart | TokenKind::RawStringStart)
    }
}

bitflags! {
    /// The valid-symbols set: which external token kinds the grammar state
    /// would currently accept.
    ///
    /// One bit per [`TokenKind`], positioned by discriminant. The host
    /// builds this per scan call; the grouped constants below exist for the
    /// states a real grammar drives the scanner through.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TokenSet: u16 {
        const HEREDOC_START = 1 << TokenKind::HeredocStart as u16;
        const HEREDOC_LANG = 1 << TokenKind::HeredocLang as u16;
        const HEREDOC_CONTENT = 1 << TokenKind::HeredocContent as u16;
        const HEREDOC_END = 1 << TokenKind::HeredocEnd as u16;
        const RAW_STRING_START = 1 << TokenKind::RawStringStart as u16;
        const RAW_STRING_CONTENT = 1 << TokenKind::RawStringContent as u16;
        const RAW_STRING_END = 1 << TokenKind::RawStringEnd as u16;
        const UNIT_AT = 1 << TokenKind::UnitAt as u16;
        const TAG_START = 1 << TokenKind::TagStart as u16;

        /// Inside a heredoc body: content or the closing delimiter.
        const HEREDOC_BODY = Self::HEREDOC_CONTENT.bits() | Self::HEREDOC_END.bits();
        /// Inside a raw string body: content or the closer.
        const RAW_STRING_BODY = Self::RAW_STRING_CONTENT.bits() | Self::RAW_STRING_END.bits();
        /// Either sigil reading of `@`.
        const SIGIL = Self::UNIT_AT.bits() | Self::TAG_START.bits();
        /// Everything that can start a construct at top level.
        const OPENERS = Self::HEREDOC_START.bits()
            | Self::RAW_STRING_START.bits()
            | Self::SIGIL.bits();
    }
}

impl TokenSet {
    /// The singleton set for one token kind.
    #[inline]
    pub const fn from_kind(kind: TokenKind) -> Self {
        Self::from_bits_truncate(1 << kind as u16)
    }

    /// Returns `true` if `kind` is in the set.
    #[inline]
    pub fn accepts(self, kind: TokenKind) -> bool {
        self.contains(Self::from_kind(kind))
    }
}
