//! Construction of the failure function and the output lists.

use std::collections::VecDeque;

use crate::darts::DoubleArrayTrieBuilder;
use crate::errors::{AcdatError, Result};
use crate::table::TransitionTable;
use crate::{Automaton, DoubleArrayTrie, UNUSED_STATE_IDX};

/// Builder of [`Automaton`] over a [`DoubleArrayTrie`].
///
/// # Examples
///
/// ```
/// use acdat::AutomatonBuilder;
///
/// let pma = AutomatonBuilder::new()
///     .init_size(16)
///     .step_size(16)
///     .build(["全世界", "世界", "に"])
///     .unwrap();
///
/// let terms = pma.search("全世界中に", false);
/// let found: Vec<_> = terms.iter().map(|t| (t.pos(), t.word())).collect();
/// assert_eq!(vec![(0, "全世界"), (1, "世界"), (4, "に")], found);
/// ```
#[derive(Default)]
pub struct AutomatonBuilder {
    trie: DoubleArrayTrieBuilder,
}

impl AutomatonBuilder {
    /// Creates a new [`AutomatonBuilder`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trie: DoubleArrayTrieBuilder::new(),
        }
    }

    /// Specifies the initial length of the double array.
    ///
    /// # Arguments
    ///
    /// * `n` - Initial length, which must be >= 1.
    #[must_use]
    pub fn init_size(mut self, n: usize) -> Self {
        self.trie = self.trie.init_size(n);
        self
    }

    /// Specifies the amount by which the double array grows when the capacity is
    /// insufficient.
    ///
    /// # Arguments
    ///
    /// * `n` - Step size, which must be >= 1.
    #[must_use]
    pub fn step_size(mut self, n: usize) -> Self {
        self.trie = self.trie.step_size(n);
        self
    }

    /// Builds and returns a new [`Automaton`] from keywords.
    ///
    /// # Arguments
    ///
    /// * `keywords` - List of keywords. Duplicates are merged.
    ///
    /// # Errors
    ///
    /// [`AcdatError`] is returned when
    ///   - `keywords` is empty,
    ///   - `keywords` contains an empty entry,
    ///   - the options are invalid, or
    ///   - the scale of the double array exceeds the expected one.
    pub fn build<I, P>(self, keywords: I) -> Result<Automaton<DoubleArrayTrie>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut keywords = keywords.into_iter().peekable();
        if keywords.peek().is_none() {
            return Err(AcdatError::empty_pattern_set());
        }
        let trie = self.trie.build(keywords)?;
        build_automaton(trie)
    }
}

/// Resolves failure pointers in breadth-first order and merges output lists along them.
///
/// A failure pointer always targets a shallower state, so when a state is dequeued the
/// failure pointer and the output list of every possible target are final.
pub(crate) fn build_automaton<T>(table: T) -> Result<Automaton<T>>
where
    T: TransitionTable,
{
    if table.num_keywords() == 0 {
        return Err(AcdatError::empty_pattern_set());
    }

    let root = table.root();
    let mut fail = vec![UNUSED_STATE_IDX; table.num_elements()];
    let mut outputs: Vec<Vec<u32>> = vec![vec![]; table.num_elements()];
    let mut queue = VecDeque::new();

    fail[root as usize] = root;
    for &c in table.labels(root) {
        if let Some(child) = table.child(root, c) {
            fail[child as usize] = root;
            outputs[child as usize].extend(table.terminal(child));
            queue.push_back(child);
        }
    }

    while let Some(state) = queue.pop_front() {
        for &c in table.labels(state) {
            let child = match table.child(state, c) {
                Some(child) => child,
                None => continue,
            };
            let mut fail_state = fail[state as usize];
            let child_fail = loop {
                if let Some(next) = table.child(fail_state, c) {
                    break next;
                }
                if fail_state == root || fail_state == UNUSED_STATE_IDX {
                    break root;
                }
                fail_state = fail[fail_state as usize];
            };
            fail[child as usize] = child_fail;

            // The keyword of the child itself comes first, then a copy of the inherited list.
            let mut output: Vec<u32> = table.terminal(child).into_iter().collect();
            output.extend_from_slice(&outputs[child_fail as usize]);
            output.shrink_to_fit();
            outputs[child as usize] = output;

            queue.push_back(child);
        }
    }

    Ok(Automaton {
        table,
        fail,
        outputs,
    })
}
