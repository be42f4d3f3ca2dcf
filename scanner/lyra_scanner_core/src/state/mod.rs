//! Persistent scanner state and its wire format.
//!
//! The host may serialize the scanner between any two scan calls — including
//! in the middle of a heredoc or raw string — and deserialize it later,
//! possibly into a different scanner instance. Everything needed to resume
//! therefore lives in [`ScanState`]: a pocket-sized record with no heap
//! handles, laid out on the wire byte for byte.
//!
//! # Wire format
//!
//! ```text
//! byte 0            in_heredoc (0 or 1)
//! byte 1            heredoc_needs_lang_check (0 or 1)
//! byte 2            heredoc delimiter length `n` (0..=16)
//! bytes 3..3+n      delimiter bytes
//! byte 3+n          in_raw_string (0 or 1)
//! byte 4+n          raw_string_hash_count (0..=255)
//! ```
//!
//! Deserializing a short buffer leaves the unread trailing fields at zero;
//! an empty buffer yields the fresh zero state. The format never changes
//! size class: at most [`SERIALIZED_CAP`] bytes, well under the ≥ 32 bytes
//! the host guarantees.

/// Maximum heredoc delimiter length in bytes.
pub const MAX_DELIMITER_LEN: usize = 16;

/// Maximum number of `#` marks in a raw string opener.
pub const MAX_HASH_COUNT: u8 = u8::MAX;

/// Upper bound on the serialized state size: the five fixed bytes plus a
/// full-length delimiter.
pub const SERIALIZED_CAP: usize = MAX_DELIMITER_LEN + 5;

/// A heredoc delimiter captured at open time.
///
/// Inline fixed-capacity byte string — no allocation, `Copy`-cheap, at most
/// [`MAX_DELIMITER_LEN`] bytes. Contents are restricted to the delimiter
/// character classes (`A-Z` first, then `A-Z0-9_`), which keeps
/// [`as_str()`](Self::as_str) trivially valid UTF-8.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Delimiter {
    bytes: [u8; MAX_DELIMITER_LEN],
    len: u8,
}

impl Delimiter {
    /// The empty delimiter.
    pub const fn new() -> Self {
        Self {
            bytes: [0; MAX_DELIMITER_LEN],
            len: 0,
        }
    }

    /// Append one ASCII character. Returns `false` (and stores nothing)
    /// once the capacity is reached.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "caller passes delimiter-class code points, all below 128"
    )]
    pub fn push(&mut self, c: u32) -> bool {
        debug_assert!(c < 128, "delimiter characters are ASCII by construction");
        self.push_byte(c as u8)
    }

    /// Append one raw byte. Used by deserialization, which must accept
    /// whatever the buffer holds without judgement.
    pub(crate) fn push_byte(&mut self, b: u8) -> bool {
        if (self.len as usize) < MAX_DELIMITER_LEN {
            self.bytes[self.len as usize] = b;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if no characters have been captured.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The captured bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// The captured delimiter as text.
    pub fn as_str(&self) -> &str {
        // Contents are ASCII (enforced in push), so this never trips.
        std::str::from_utf8(self.as_bytes()).unwrap_or("")
    }
}

impl std::fmt::Debug for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Delimiter({:?})", self.as_str())
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scanner's persistent state record.
///
/// # Invariants
///
/// Between any two scan calls (checked in debug builds via
/// [`debug_assert_invariants`](Self::debug_assert_invariants)):
///
/// - `in_heredoc` and `in_raw_string` are never both true.
/// - `in_heredoc` implies a non-empty `heredoc_delimiter`.
/// - `heredoc_needs_lang_check` implies `in_heredoc`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScanState {
    /// A heredoc is open: start emitted, end not yet.
    pub in_heredoc: bool,
    /// Start token just emitted; the next scan may still produce the
    /// optional language hint before body scanning begins.
    pub heredoc_needs_lang_check: bool,
    /// The closing delimiter captured at open time.
    pub heredoc_delimiter: Delimiter,
    /// A raw string is open.
    pub in_raw_string: bool,
    /// Number of `#` in the raw string opener; the closer must match.
    pub raw_string_hash_count: u8,
}

/// Size assertion: the whole record stays pocket-sized (fits a cache line
/// with plenty to spare).
const _: () = assert!(std::mem::size_of::<ScanState>() <= 24);

impl ScanState {
    /// The fresh zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no literal is open.
    pub fn is_idle(&self) -> bool {
        !self.in_heredoc && !self.in_raw_string
    }

    /// Check the cross-field invariants in debug builds.
    pub fn debug_assert_invariants(&self) {
        debug_assert!(
            !(self.in_heredoc && self.in_raw_string),
            "heredoc and raw string must never be open at once"
        );
        debug_assert!(
            !self.in_heredoc || !self.heredoc_delimiter.is_empty(),
            "an open heredoc must have captured a delimiter"
        );
        debug_assert!(
            !self.heredoc_needs_lang_check || self.in_heredoc,
            "lang check is only pending while a heredoc is open"
        );
    }

    /// Write the state into `out` using the wire format above.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Contract
    ///
    /// `out` must hold at least [`SERIALIZED_CAP`] bytes; the host
    /// guarantees ≥ 32.
    pub fn serialize(&self, out: &mut [u8]) -> usize {
        debug_assert!(
            out.len() >= SERIALIZED_CAP,
            "serialization buffer below the host-guaranteed minimum"
        );
        self.debug_assert_invariants();

        out[0] = u8::from(self.in_heredoc);
        out[1] = u8::from(self.heredoc_needs_lang_check);

        let delim = self.heredoc_delimiter.as_bytes();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "delimiter length is capped at 16"
        )]
        {
            out[2] = delim.len() as u8;
        }
        let mut i = 3;
        out[i..i + delim.len()].copy_from_slice(delim);
        i += delim.len();

        out[i] = u8::from(self.in_raw_string);
        out[i + 1] = self.raw_string_hash_count;
        i + 2
    }

    /// Reset to zero, then read back the wire format from `data`.
    ///
    /// Never fails: a short buffer leaves the unread trailing fields at
    /// zero, and an empty buffer leaves the whole state at zero. A
    /// delimiter-length byte beyond [`MAX_DELIMITER_LEN`] (possible only in
    /// a corrupt buffer — serialize never writes one) is clamped to the
    /// bytes actually present.
    pub fn deserialize(&mut self, data: &[u8]) {
        *self = Self::default();
        if data.is_empty() {
            return;
        }

        self.in_heredoc = data[0] != 0;
        let mut i = 1;

        if i < data.len() {
            self.heredoc_needs_lang_check = data[i] != 0;
            i += 1;
        }
        if i < data.len() {
            let declared = data[i] as usize;
            i += 1;
            let available = data.len().saturating_sub(i);
            let take = declared.min(MAX_DELIMITER_LEN).min(available);
            for &b in &data[i..i + take] {
                self.heredoc_delimiter.push_byte(b);
            }
            i += take;
            // Skip delimiter bytes the clamp refused, so the trailing
            // fields stay at their declared offsets.
            i += declared.min(available).saturating_sub(take);
        }
        if i < data.len() {
            self.in_raw_string = data[i] != 0;
            i += 1;
        }
        if i < data.len() {
            self.raw_string_hash_count = data[i];
        }
    }
}
