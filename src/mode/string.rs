use std::ffi::CStr;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;

/// The longest mode a [`ModeSet`](super::ModeSet) can produce, e.g. `"ba+"`.
pub(crate) const MAX_LEN: usize = 3;

/// A canonical open-mode string, drawn from the alphabet `b t r w a +`.
///
/// The grammar is `[b|t]? (r | (w|a) +?)`: an optional binary or text prefix followed by the
/// access token. Values can only be produced by [`translate`](super::translate), so every
/// `ModeString` is well-formed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeString {
    // Always ends in at least one nul byte.
    buf: [u8; MAX_LEN + 1],
    len: u8,
}

impl ModeString {
    pub(crate) const fn empty() -> ModeString {
        ModeString {
            buf: [0; MAX_LEN + 1],
            len: 0,
        }
    }

    /// Appends an ASCII byte. Callers never push more than [`MAX_LEN`] bytes.
    pub(crate) const fn push(&mut self, byte: u8) {
        self.buf[self.len as usize] = byte;
        self.len += 1;
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: Only ASCII bytes are ever pushed, so the initialized prefix is valid UTF-8.
        unsafe { std::str::from_utf8_unchecked(&self.buf[..self.len as usize]) }
    }

    /// Returns this mode as a nul-terminated string, for passing to C.
    pub fn as_c_str(&self) -> &CStr {
        // SAFETY: Pushed bytes are non-zero ASCII and the byte after them is always zero.
        unsafe { CStr::from_bytes_with_nul_unchecked(&self.buf[..=self.len as usize]) }
    }

    pub fn is_binary(&self) -> bool {
        self.as_str().starts_with('b')
    }

    pub fn is_text(&self) -> bool {
        self.as_str().starts_with('t')
    }

    fn access(&self) -> &str {
        self.as_str().trim_start_matches(['b', 't'])
    }

    pub fn is_readable(&self) -> bool {
        let access = self.access();
        access == "r" || access.ends_with('+')
    }

    pub fn is_writable(&self) -> bool {
        self.is_append() || self.is_truncating()
    }

    pub fn is_append(&self) -> bool {
        self.access().starts_with('a')
    }

    pub fn is_truncating(&self) -> bool {
        self.access().starts_with('w')
    }

    /// Reorders this mode for C stdio, which expects the access token first.
    ///
    /// `b` moves to the end and `t` is dropped, because POSIX streams make no text/binary
    /// distinction. For example, `"ba+"` becomes `"a+b"` and `"tw"` becomes `"w"`.
    pub fn stdio(&self) -> ModeString {
        let mut out = ModeString::empty();
        for &byte in self.access().as_bytes() {
            out.push(byte);
        }
        if self.is_binary() {
            out.push(b'b');
        }
        out
    }
}

impl Deref for ModeString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for ModeString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ModeString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ModeString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Display for ModeString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for ModeString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
