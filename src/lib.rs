//! # acdat: Aho-Corasick over a Double-Array Trie
//!
//! A multi-pattern string matcher. Keywords are packed into a double-array trie, failure
//! links are resolved once in breadth-first order, and every state stores the complete list
//! of keywords ending at it. A search then reads the haystack once and reports every
//! occurrence of every keyword, including overlapping and nested ones.
//!
//! ## Examples
//!
//! ```
//! use acdat::Automaton;
//!
//! let pma = Automaton::new(["he", "she", "his", "hers"]).unwrap();
//!
//! let terms = pma.search("ushers", false);
//! let found: Vec<_> = terms.iter().map(|t| (t.pos(), t.word())).collect();
//! assert_eq!(vec![(1, "she"), (2, "he"), (2, "hers")], found);
//!
//! let first = pma.search("ushers", true);
//! assert_eq!(1, first.len());
//! assert_eq!((1, "she"), (first[0].pos(), first[0].word()));
//!
//! let exact = pma.exact_match("his").unwrap();
//! assert_eq!((0, "his"), (exact.pos(), exact.word()));
//! assert_eq!(None, pma.exact_match("hi"));
//! ```
//!
//! Positions are counted in characters (Unicode scalar values). The byte range of each match
//! inside the haystack is also available through [`Term::byte_range()`].

#![deny(missing_docs)]

pub mod builder;
pub mod darts;
mod dump;
pub mod errors;
pub mod iter;
pub mod table;


use std::ops::Range;

pub use crate::builder::AutomatonBuilder;
pub use crate::darts::{DoubleArrayTrie, DoubleArrayTrieBuilder};
pub use crate::errors::{AcdatError, Result, TrieError};
pub use crate::iter::TermIterator;
pub use crate::table::{Keyword, TransitionTable};

// No state is stored at index 0. A failure pointer that still holds this value was never set.
pub(crate) const UNUSED_STATE_IDX: u32 = 0;

/// A reported occurrence of a keyword.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Term<'a> {
    pos: usize,
    end: usize,
    byte_start: usize,
    byte_end: usize,
    word: &'a str,
}

impl<'a> Term<'a> {
    /// Starting position of the match in characters.
    #[inline(always)]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Ending position of the match in characters (exclusive).
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the match in the haystack.
    #[inline(always)]
    pub const fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_end
    }

    /// The matched keyword.
    #[inline(always)]
    pub const fn word(&self) -> &'a str {
        self.word
    }

    #[inline(always)]
    pub(crate) fn ending_at(keyword: &'a Keyword, end: usize, byte_end: usize) -> Self {
        Self {
            pos: end - keyword.num_chars(),
            end,
            byte_start: byte_end - keyword.num_bytes(),
            byte_end,
            word: keyword.as_str(),
        }
    }
}

/// Pattern match automaton implemented with the Aho-Corasick algorithm.
///
/// The automaton consists of a [`TransitionTable`] (the goto function), a failure pointer
/// for every state, and the output list of every state. All three are fixed once the
/// automaton is built, so a single automaton can be searched from many threads at once.
///
/// The output list of a state is closed over its failure chain: it holds the keyword ending
/// at the state itself first, followed by the list of its failure target.
#[derive(Clone, Debug)]
pub struct Automaton<T = DoubleArrayTrie> {
    table: T,
    fail: Vec<u32>,
    outputs: Vec<Vec<u32>>,
}

impl Automaton<DoubleArrayTrie> {
    /// Creates a new [`Automaton`] from keywords with the default options.
    ///
    /// # Arguments
    ///
    /// * `keywords` - List of keywords. Duplicates are merged.
    ///
    /// # Errors
    ///
    /// [`AcdatError`] is returned when
    ///   - `keywords` is empty, or
    ///   - the double-array trie cannot be built (see [`TrieError`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use acdat::Automaton;
    ///
    /// let pma = Automaton::new(["ab", "b"]).unwrap();
    ///
    /// let terms = pma.search("cab", false);
    /// assert_eq!((1, "ab"), (terms[0].pos(), terms[0].word()));
    /// assert_eq!((2, "b"), (terms[1].pos(), terms[1].word()));
    /// ```
    pub fn new<I, P>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        AutomatonBuilder::new().build(keywords)
    }
}

impl<T> Automaton<T>
where
    T: TransitionTable,
{
    /// Builds the failure function and the output lists over a prebuilt transition table.
    ///
    /// # Errors
    ///
    /// [`AcdatError::EmptyPatternSet`] is returned when `table` contains no keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use acdat::{Automaton, DoubleArrayTrie};
    ///
    /// let trie = DoubleArrayTrie::new(["bcd", "ab", "a"]).unwrap();
    /// let pma = Automaton::from_table(trie).unwrap();
    ///
    /// assert_eq!(3, pma.search("abcd", false).len());
    /// ```
    pub fn from_table(table: T) -> Result<Self> {
        builder::build_automaton(table)
    }

    /// Returns all the occurrences of the keywords in `content`, in the order they end.
    ///
    /// Occurrences ending at the same position are reported in the order of the output list
    /// of the reached state: the longest keyword first.
    ///
    /// # Arguments
    ///
    /// * `content` - String to search for.
    /// * `stop_at_first` - If `true`, the scan stops at the first occurrence and at most one
    ///   term is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use acdat::Automaton;
    ///
    /// let pma = Automaton::new(["ab", "b"]).unwrap();
    ///
    /// let terms = pma.search("cab", true);
    /// assert_eq!(1, terms.len());
    /// assert_eq!((1, "ab"), (terms[0].pos(), terms[0].word()));
    /// ```
    pub fn search<P>(&self, content: P, stop_at_first: bool) -> Vec<Term<'_>>
    where
        P: AsRef<str>,
    {
        let it = self.search_iter(content);
        if stop_at_first {
            it.take(1).collect()
        } else {
            it.collect()
        }
    }

    /// Returns a lazy iterator over the occurrences of the keywords in `content`.
    ///
    /// It yields the same terms as [`Automaton::search()`] and reads the haystack only as far
    /// as the consumed terms require.
    ///
    /// # Arguments
    ///
    /// * `content` - String to search for.
    ///
    /// # Examples
    ///
    /// ```
    /// use acdat::Automaton;
    ///
    /// let pma = Automaton::new(["bcd", "ab", "a"]).unwrap();
    ///
    /// let mut it = pma.search_iter("abcd");
    ///
    /// let t = it.next().unwrap();
    /// assert_eq!((0, 1, "a"), (t.pos(), t.end(), t.word()));
    ///
    /// let t = it.next().unwrap();
    /// assert_eq!((0, 2, "ab"), (t.pos(), t.end(), t.word()));
    ///
    /// let t = it.next().unwrap();
    /// assert_eq!((1, 4, "bcd"), (t.pos(), t.end(), t.word()));
    ///
    /// assert_eq!(None, it.next());
    /// ```
    pub fn search_iter<P>(&self, content: P) -> TermIterator<'_, T, P>
    where
        P: AsRef<str>,
    {
        TermIterator::new(self, content)
    }

    /// Returns the term covering the whole `content` if it equals a keyword.
    ///
    /// The failure function is not used; this is a lookup in the transition table.
    ///
    /// # Examples
    ///
    /// ```
    /// use acdat::Automaton;
    ///
    /// let pma = Automaton::new(["全世界", "世界", "に"]).unwrap();
    ///
    /// let t = pma.exact_match("世界").unwrap();
    /// assert_eq!((0, 2, 0..6), (t.pos(), t.end(), t.byte_range()));
    ///
    /// assert_eq!(None, pma.exact_match("全世"));
    /// ```
    pub fn exact_match<P>(&self, content: P) -> Option<Term<'_>>
    where
        P: AsRef<str>,
    {
        let id = self.table.exact_match(content.as_ref().chars())?;
        let keyword = self.table.keyword(id);
        Some(Term::ending_at(
            keyword,
            keyword.num_chars(),
            keyword.num_bytes(),
        ))
    }

    /// Follows the trie edge from `state` labeled with `c`.
    ///
    /// Returns `None` if there is no such edge, except at the root, which consumes every
    /// character it has no edge for and stays at the root.
    #[inline(always)]
    pub fn goto(&self, state: u32, c: char) -> Option<u32> {
        match self.table.child(state, c) {
            Some(next) => Some(next),
            None if state == self.table.root() => Some(state),
            None => None,
        }
    }

    /// Returns the failure target of `state`, or `None` if `state` is not a state.
    #[inline(always)]
    pub fn failure(&self, state: u32) -> Option<u32> {
        self.fail
            .get(state as usize)
            .copied()
            .filter(|&f| f != UNUSED_STATE_IDX)
    }

    /// Returns the ids of all the keywords ending at `state`.
    #[inline(always)]
    pub fn outputs(&self, state: u32) -> &[u32] {
        self.outputs
            .get(state as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the keyword associated with `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a keyword id of the transition table.
    #[inline(always)]
    pub fn keyword(&self, id: u32) -> &Keyword {
        self.table.keyword(id)
    }

    /// Returns the underlying transition table.
    pub const fn table(&self) -> &T {
        &self.table
    }

    /// Returns the total number of states, including the root.
    pub fn num_states(&self) -> usize {
        self.fail
            .iter()
            .filter(|&&f| f != UNUSED_STATE_IDX)
            .count()
    }

    /// Returns the total number of elements of the state arrays.
    pub fn num_elements(&self) -> usize {
        self.fail.len()
    }

    /// Returns the total amount of heap used by this automaton in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.table.heap_bytes()
            + self.fail.len() * std::mem::size_of::<u32>()
            + self.outputs.len() * std::mem::size_of::<Vec<u32>>()
            + self
                .outputs
                .iter()
                .map(|o| o.capacity() * std::mem::size_of::<u32>())
                .sum::<usize>()
    }

    /// Walks from `state` on `c`, retreating through failure pointers until a transition
    /// exists. Returns `None` if the chain runs into an unset failure pointer.
    #[inline(always)]
    pub(crate) fn next_state(&self, mut state: u32, c: char) -> Option<u32> {
        loop {
            if let Some(next) = self.goto(state, c) {
                return Some(next);
            }
            state = self.fail[state as usize];
            if state == UNUSED_STATE_IDX {
                return None;
            }
        }
    }
}
