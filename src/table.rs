//! The transition table contract consumed by the automaton.

/// A keyword registered in a transition table.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Keyword {
    text: Box<str>,
    num_chars: usize,
}

impl Keyword {
    /// Creates a keyword from a string.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            num_chars: text.chars().count(),
        }
    }

    /// Keyword as a string slice.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[inline(always)]
    pub const fn num_chars(&self) -> usize {
        self.num_chars
    }

    /// Length in bytes of the UTF-8 encoding.
    #[inline(always)]
    pub fn num_bytes(&self) -> usize {
        self.text.len()
    }
}

/// Immutable trie transitions that an [`Automaton`](crate::Automaton) is built over.
///
/// States are `u32` indices into arrays of length [`num_elements()`](Self::num_elements).
/// Index `0` is never a state, so the automaton can use it as an "unset" marker.
/// The root has no parent, every other state is reachable from the root through
/// [`child()`](Self::child).
///
/// [`DoubleArrayTrie`](crate::DoubleArrayTrie) is the implementation shipped with this crate.
pub trait TransitionTable {
    /// Returns the root state.
    fn root(&self) -> u32;

    /// Returns the length of the state arrays.
    fn num_elements(&self) -> usize;

    /// Returns the number of distinct keywords.
    fn num_keywords(&self) -> usize;

    /// Returns the child of `state` labeled with `c`, if it exists.
    fn child(&self, state: u32, c: char) -> Option<u32>;

    /// Returns the labels of the outgoing edges of `state` in ascending order.
    fn labels(&self, state: u32) -> &[char];

    /// Returns the id of the keyword spelled by the path from the root to `state`.
    fn terminal(&self, state: u32) -> Option<u32>;

    /// Returns the keyword associated with `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by [`terminal()`](Self::terminal).
    fn keyword(&self, id: u32) -> &Keyword;

    /// Returns the heap bytes used by the table.
    fn heap_bytes(&self) -> usize {
        0
    }

    /// Returns the id of the keyword equal to `content`, if it exists.
    fn exact_match<I>(&self, content: I) -> Option<u32>
    where
        I: IntoIterator<Item = char>,
        Self: Sized,
    {
        let mut state = self.root();
        for c in content {
            state = self.child(state, c)?;
        }
        self.terminal(state)
    }
}
