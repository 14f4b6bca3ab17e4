//! Fixed-capacity string that records whether its last assignment was clipped.

use heapless::String;

/// A `heapless::String<N>` plus a truncation flag.
///
/// Assigning a value longer than `N` bytes keeps the longest prefix that fits and ends on a
/// UTF-8 character boundary. For ASCII input that is exactly the first `N` bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Bounded<const N: usize> {
    value: String<N>,
    truncated: bool,
}

impl<const N: usize> Bounded<N> {
    /// An empty value.
    pub(crate) const fn new() -> Self {
        Self {
            value: String::new(),
            truncated: false,
        }
    }

    /// Replace the contents with `src`, clipping to capacity.
    ///
    /// Returns `true` if `src` did not fit.
    pub(crate) fn set(&mut self, src: &str) -> bool {
        let end = floor_char_boundary(src, N);
        self.value.clear();
        // `end <= N` and lies on a char boundary, so this cannot fail.
        let _ = self.value.push_str(&src[..end]);
        self.truncated = end < src.len();
        self.truncated
    }

    /// The stored text.
    pub(crate) fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Whether the last [`set`](Self::set) dropped bytes.
    pub(crate) fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Largest index `<= max` that is a char boundary of `s`.
fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}
