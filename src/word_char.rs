// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;

/// Placeholder stored in word lists (and accepted in queries) for "any single letter".
/// Never counted toward letter counts.
pub const WILDCARD: char = '.';

pub(crate) trait WordChar {
    fn is_wildcard(&self) -> bool;
    fn is_literal(&self) -> bool;
    /// 'a' -> 0, 'b' -> 1, ..., 'z' -> 25; `None` for anything else
    fn alphabet_index(&self) -> Option<usize>;
}

impl WordChar for char {
    fn is_wildcard(&self) -> bool {
        *self == WILDCARD
    }
    fn is_literal(&self) -> bool {
        self.is_ascii_lowercase()
    }
    fn alphabet_index(&self) -> Option<usize> {
        if self.is_literal() {
            Some(*self as usize - 'a' as usize)
        } else {
            None
        }
    }
}
