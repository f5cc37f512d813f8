/// A cursor for byte-by-byte grammar scanning with position tracking.
///
/// Operates over a slice of the source line while tracking the absolute byte
/// position relative to the line start (via `base` offset), so grammar
/// attempts that begin mid-line still produce line-relative spans.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    s: &'a str,
    /// Base offset in the line (added to the local index for absolute positions).
    base: usize,
    /// Current local index into `s`.
    i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of input.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until a byte satisfying `stop` is reached (or EOF), leaving
    /// the cursor on the stop byte. Returns the absolute end position of the
    /// consumed run.
    pub fn bump_until(&mut self, stop: impl Fn(u8) -> bool) -> usize {
        while let Some(b) = self.peek() {
            if stop(b) {
                break;
            }
            self.i += 1;
        }
        self.pos()
    }
}
