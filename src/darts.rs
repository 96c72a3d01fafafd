//! A double-array trie used as the transition table of the automaton.

pub mod builder;
mod mapper;

use crate::errors::TrieError;
use crate::table::{Keyword, TransitionTable};

pub use crate::darts::builder::DoubleArrayTrieBuilder;
pub(crate) use crate::darts::mapper::CodeMapper;

// The root index position.
pub(crate) const ROOT_STATE_IDX: u32 = 1;
// The BASE value of states without children.
pub(crate) const BASE_INVALID: u32 = 0;
// The CHECK value of vacant elements. No state has index 0, so it never matches a parent.
pub(crate) const CHECK_VACANT: u32 = 0;
// The keyword id of states where no keyword ends.
pub(crate) const KEYWORD_INVALID: u32 = u32::MAX;

/// Trie of keywords encoded in a pair of BASE/CHECK arrays.
///
/// The child of state `s` labeled with character `c` is stored at index `base[s] + code(c)`,
/// and the transition is valid only if `check[base[s] + code(c)] == s`. Characters are mapped
/// to dense codes starting from 1 in descending order of their frequency in the keywords.
///
/// Index 0 is never used and index 1 is the root.
///
/// # Examples
///
/// ```
/// use acdat::{DoubleArrayTrie, TransitionTable};
///
/// let trie = DoubleArrayTrie::new(["he", "she", "his", "hers"]).unwrap();
///
/// assert_eq!(Some(1), trie.exact_match("she".chars()));
/// assert_eq!(None, trie.exact_match("sh".chars()));
/// assert_eq!(10, trie.num_states());
/// ```
#[derive(Clone, Debug)]
pub struct DoubleArrayTrie {
    base: Vec<u32>,
    check: Vec<u32>,
    terminals: Vec<u32>,
    label_pos: Vec<u32>,
    labels: Vec<char>,
    keywords: Vec<Keyword>,
    mapper: CodeMapper,
    num_states: usize,
}

impl DoubleArrayTrie {
    /// Creates a new [`DoubleArrayTrie`] with the default options.
    ///
    /// Duplicate keywords share the id of their first occurrence.
    ///
    /// # Errors
    ///
    /// [`TrieError`] is returned when a keyword is empty or the arrays become too large.
    pub fn new<I, P>(keywords: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        DoubleArrayTrieBuilder::new().build(keywords)
    }

    /// Returns the BASE array.
    pub fn base(&self) -> &[u32] {
        &self.base
    }

    /// Returns the CHECK array.
    pub fn check(&self) -> &[u32] {
        &self.check
    }

    /// Returns the distinct keywords in the order of their ids.
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Returns the total number of states including the root.
    pub const fn num_states(&self) -> usize {
        self.num_states
    }

    /// Returns the number of distinct characters in the keywords.
    pub const fn alphabet_size(&self) -> u32 {
        self.mapper.alphabet_size()
    }
}

impl TransitionTable for DoubleArrayTrie {
    #[inline(always)]
    fn root(&self) -> u32 {
        ROOT_STATE_IDX
    }

    #[inline(always)]
    fn num_elements(&self) -> usize {
        self.base.len()
    }

    #[inline(always)]
    fn num_keywords(&self) -> usize {
        self.keywords.len()
    }

    #[inline(always)]
    fn child(&self, state: u32, c: char) -> Option<u32> {
        let code = self.mapper.get(c)?;
        let base = *self.base.get(state as usize)?;
        if base == BASE_INVALID {
            return None;
        }
        let child_idx = base.checked_add(code)?;
        if *self.check.get(child_idx as usize)? == state {
            Some(child_idx)
        } else {
            None
        }
    }

    #[inline(always)]
    fn labels(&self, state: u32) -> &[char] {
        let state = state as usize;
        match (self.label_pos.get(state), self.label_pos.get(state + 1)) {
            (Some(&start), Some(&end)) => &self.labels[start as usize..end as usize],
            _ => &[],
        }
    }

    #[inline(always)]
    fn terminal(&self, state: u32) -> Option<u32> {
        self.terminals
            .get(state as usize)
            .copied()
            .filter(|&id| id != KEYWORD_INVALID)
    }

    #[inline(always)]
    fn keyword(&self, id: u32) -> &Keyword {
        &self.keywords[id as usize]
    }

    fn heap_bytes(&self) -> usize {
        self.base.len() * std::mem::size_of::<u32>()
            + self.check.len() * std::mem::size_of::<u32>()
            + self.terminals.len() * std::mem::size_of::<u32>()
            + self.label_pos.len() * std::mem::size_of::<u32>()
            + self.labels.len() * std::mem::size_of::<char>()
            + self
                .keywords
                .iter()
                .map(|k| std::mem::size_of::<Keyword>() + k.num_bytes())
                .sum::<usize>()
            + self.mapper.heap_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_array() {
        /*
         *          a--> 5
         *         /
         *   a--> 2 --c--> 6
         *  /
         * 1 --b--> 4 --c--> 7
         *  \
         *   c--> 3
         *
         *   code(a) = 1, code(c) = 2, code(b) = 3
         */
        let trie = DoubleArrayTrie::new(["aa", "ac", "bc", "c"]).unwrap();

        assert_eq!(&[0, 1, 4, 0, 5, 0, 0, 0], trie.base());
        assert_eq!(&[0, 0, 1, 1, 1, 2, 2, 4], trie.check());
        assert_eq!(7, trie.num_states());
        assert_eq!(3, trie.alphabet_size());
        assert_eq!(&['a', 'b', 'c'], trie.labels(ROOT_STATE_IDX));
        assert_eq!(&['a', 'c'], trie.labels(2));
        assert_eq!(&['c'], trie.labels(4));
        assert!(trie.labels(3).is_empty());
        assert!(trie.labels(100).is_empty());

        assert_eq!(Some(2), trie.child(ROOT_STATE_IDX, 'a'));
        assert_eq!(Some(5), trie.child(2, 'a'));
        assert_eq!(Some(6), trie.child(2, 'c'));
        assert_eq!(Some(7), trie.child(4, 'c'));
        assert_eq!(None, trie.child(4, 'a'));
        assert_eq!(None, trie.child(5, 'a'));
        assert_eq!(None, trie.child(ROOT_STATE_IDX, 'z'));
        assert_eq!(None, trie.child(0, 'a'));

        assert_eq!(Some(0), trie.terminal(5));
        assert_eq!(Some(1), trie.terminal(6));
        assert_eq!(Some(2), trie.terminal(7));
        assert_eq!(Some(3), trie.terminal(3));
        assert_eq!(None, trie.terminal(2));
        assert_eq!(None, trie.terminal(ROOT_STATE_IDX));
    }

    #[test]
    fn test_exact_match() {
        let trie = DoubleArrayTrie::new(["全世界", "世界", "に"]).unwrap();

        assert_eq!(Some(0), trie.exact_match("全世界".chars()));
        assert_eq!(Some(1), trie.exact_match("世界".chars()));
        assert_eq!(Some(2), trie.exact_match("に".chars()));
        assert_eq!(None, trie.exact_match("全世".chars()));
        assert_eq!(None, trie.exact_match("世界中".chars()));
        assert_eq!(None, trie.exact_match("".chars()));
    }

    #[test]
    fn test_duplicate_keywords() {
        let trie = DoubleArrayTrie::new(["abc", "bc", "abc"]).unwrap();

        assert_eq!(2, trie.num_keywords());
        assert_eq!(Some(0), trie.exact_match("abc".chars()));
        assert_eq!(Some(1), trie.exact_match("bc".chars()));
        assert_eq!("bc", trie.keyword(1).as_str());
    }

    #[test]
    fn test_empty_keyword() {
        let e = DoubleArrayTrie::new(["abc", ""]).unwrap_err();
        match e {
            TrieError::EmptyKeyword(e) => assert_eq!(1, e.index()),
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_no_keywords() {
        let trie = DoubleArrayTrie::new(Vec::<String>::new()).unwrap();

        assert_eq!(0, trie.num_keywords());
        assert_eq!(1, trie.num_states());
        assert!(trie.labels(ROOT_STATE_IDX).is_empty());
    }
}
