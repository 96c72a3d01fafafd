//! Builder of [`DoubleArrayTrie`].

use std::collections::BTreeMap;

use crate::darts::{
    CodeMapper, DoubleArrayTrie, BASE_INVALID, CHECK_VACANT, KEYWORD_INVALID, ROOT_STATE_IDX,
};
use crate::errors::TrieError;
use crate::table::Keyword;

const DEFAULT_INIT_SIZE: usize = 1 << 16;
const DEFAULT_STEP_SIZE: usize = 1 << 16;

// The root node id of SparseTrie.
const ROOT_NODE_ID: u32 = 0;

struct SparseNode {
    edges: BTreeMap<char, u32>,
    terminal: u32,
}

impl Default for SparseNode {
    fn default() -> Self {
        Self {
            edges: BTreeMap::new(),
            terminal: KEYWORD_INVALID,
        }
    }
}

/// Pointer-based trie holding keywords before they are packed into the double array.
struct SparseTrie {
    nodes: Vec<SparseNode>,
}

impl SparseTrie {
    fn new() -> Self {
        Self {
            nodes: vec![SparseNode::default()],
        }
    }

    /// Inserts a keyword and returns `false` if it was already registered.
    fn add(&mut self, keyword: &str, id: u32) -> Result<bool, TrieError> {
        let mut node_id = ROOT_NODE_ID;
        for c in keyword.chars() {
            node_id = if let Some(&child_id) = self.nodes[node_id as usize].edges.get(&c) {
                child_id
            } else {
                let child_id = u32::try_from(self.nodes.len())
                    .map_err(|_| TrieError::automaton_scale("num_states", u32::MAX))?;
                self.nodes[node_id as usize].edges.insert(c, child_id);
                self.nodes.push(SparseNode::default());
                child_id
            };
        }
        let terminal = &mut self.nodes[node_id as usize].terminal;
        if *terminal != KEYWORD_INVALID {
            return Ok(false);
        }
        *terminal = id;
        Ok(true)
    }
}

/// Builder of [`DoubleArrayTrie`].
pub struct DoubleArrayTrieBuilder {
    base: Vec<u32>,
    check: Vec<u32>,
    terminals: Vec<u32>,
    init_size: usize,
    step_size: usize,
}

impl Default for DoubleArrayTrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleArrayTrieBuilder {
    /// Creates a new [`DoubleArrayTrieBuilder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use acdat::{DoubleArrayTrieBuilder, TransitionTable};
    ///
    /// let trie = DoubleArrayTrieBuilder::new()
    ///     .init_size(16)
    ///     .step_size(16)
    ///     .build(["bcd", "ab", "a"])
    ///     .unwrap();
    ///
    /// assert_eq!(Some(1), trie.exact_match("ab".chars()));
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base: Vec::new(),
            check: Vec::new(),
            terminals: Vec::new(),
            init_size: DEFAULT_INIT_SIZE,
            step_size: DEFAULT_STEP_SIZE,
        }
    }

    /// Specifies the initial length of the arrays.
    ///
    /// # Arguments
    ///
    /// * `n` - Initial length, which must be >= 1.
    #[must_use]
    pub const fn init_size(mut self, n: usize) -> Self {
        self.init_size = n;
        self
    }

    /// Specifies the amount by which the arrays grow when the capacity is insufficient.
    ///
    /// # Arguments
    ///
    /// * `n` - Step size, which must be >= 1.
    #[must_use]
    pub const fn step_size(mut self, n: usize) -> Self {
        self.step_size = n;
        self
    }

    /// Builds and returns a new [`DoubleArrayTrie`].
    ///
    /// Keywords receive ids `0, 1, 2, ...` in the input order; a duplicate keeps the id of its
    /// first occurrence and does not consume a new one.
    ///
    /// # Arguments
    ///
    /// * `keywords` - List of keywords.
    ///
    /// # Errors
    ///
    /// [`TrieError`] is returned when
    ///   - `init_size` or `step_size` is zero,
    ///   - `keywords` contains an empty entry, or
    ///   - the scale of the resulting arrays exceeds the expected one.
    pub fn build<I, P>(mut self, keywords: I) -> Result<DoubleArrayTrie, TrieError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        if self.init_size == 0 {
            return Err(TrieError::invalid_argument("init_size", "must be >= 1"));
        }
        if self.step_size == 0 {
            return Err(TrieError::invalid_argument("step_size", "must be >= 1"));
        }

        let (trie, keywords, mapper) = Self::build_sparse_trie(keywords)?;
        let node_idx = self.build_double_array(&trie, &mapper)?;
        let (label_pos, labels) = self.build_labels(&trie, &node_idx);

        let DoubleArrayTrieBuilder {
            base,
            check,
            terminals,
            ..
        } = self;
        Ok(DoubleArrayTrie {
            base,
            check,
            terminals,
            label_pos,
            labels,
            keywords,
            mapper,
            num_states: trie.nodes.len(),
        })
    }

    fn build_sparse_trie<I, P>(
        keywords: I,
    ) -> Result<(SparseTrie, Vec<Keyword>, CodeMapper), TrieError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut trie = SparseTrie::new();
        let mut registered = vec![];
        let mut freqs: Vec<u32> = vec![];
        for (i, keyword) in keywords.into_iter().enumerate() {
            let keyword = keyword.as_ref();
            if keyword.is_empty() {
                return Err(TrieError::empty_keyword(i));
            }
            let id = u32::try_from(registered.len())
                .ok()
                .filter(|&id| id != KEYWORD_INVALID)
                .ok_or_else(|| TrieError::automaton_scale("num_keywords", KEYWORD_INVALID - 1))?;
            if trie.add(keyword, id)? {
                registered.push(Keyword::new(keyword));
            }
            for c in keyword.chars() {
                let c = u32::from(c) as usize;
                if freqs.len() <= c {
                    freqs.resize(c + 1, 0);
                }
                freqs[c] = freqs[c].saturating_add(1);
            }
        }
        Ok((trie, registered, CodeMapper::new(&freqs)))
    }

    /// Places the nodes of `trie` in id order, which visits every parent before its children.
    /// Returns the array index assigned to each node.
    fn build_double_array(
        &mut self,
        trie: &SparseTrie,
        mapper: &CodeMapper,
    ) -> Result<Vec<u32>, TrieError> {
        self.extend_arrays(self.init_size.max(ROOT_STATE_IDX as usize + 1));

        let mut node_idx = vec![CHECK_VACANT; trie.nodes.len()];
        node_idx[ROOT_NODE_ID as usize] = ROOT_STATE_IDX;

        let mut act_size = ROOT_STATE_IDX as usize + 1;
        let mut min_idx = act_size;
        let mut mapped = vec![];

        for (i, node) in trie.nodes.iter().enumerate() {
            if node.edges.is_empty() {
                continue;
            }

            mapped.clear();
            for (&c, &child_id) in &node.edges {
                // Every label was counted into the frequencies the mapper was built from.
                mapped.push((mapper.get(c).unwrap() as usize, child_id));
            }
            mapped.sort_unstable_by_key(|&(code, _)| code);
            let min_code = mapped[0].0;

            while min_idx < self.check.len() && self.is_used(min_idx) {
                min_idx += 1;
            }
            let mut base = min_idx.saturating_sub(min_code).max(1);
            'outer: loop {
                for &(code, _) in &mapped {
                    let idx = base + code;
                    if idx > u32::MAX as usize {
                        return Err(TrieError::automaton_scale("num_elements", u32::MAX));
                    }
                    self.extend_arrays(idx + 1);
                    if self.is_used(idx) {
                        base += 1;
                        continue 'outer;
                    }
                }
                break;
            }

            let parent_idx = node_idx[i];
            for &(code, child_id) in &mapped {
                let idx = base + code;
                // `idx <= u32::MAX` was verified in the loop above.
                self.check[idx] = parent_idx;
                self.terminals[idx] = trie.nodes[child_id as usize].terminal;
                node_idx[child_id as usize] = idx as u32;
                act_size = act_size.max(idx + 1);
            }
            self.base[parent_idx as usize] = base as u32;
        }

        self.truncate_arrays(act_size);
        Ok(node_idx)
    }

    /// Lays out the edge labels of each element contiguously, indexed by element positions.
    fn build_labels(&self, trie: &SparseTrie, node_idx: &[u32]) -> (Vec<u32>, Vec<char>) {
        let mut idx_node = vec![None; self.base.len()];
        for (node_id, &idx) in node_idx.iter().enumerate() {
            idx_node[idx as usize] = Some(node_id);
        }

        let mut label_pos = Vec::with_capacity(self.base.len() + 1);
        let mut labels = vec![];
        let mut pos = 0u32;
        for node_id in idx_node {
            label_pos.push(pos);
            if let Some(node_id) = node_id {
                for &c in trie.nodes[node_id].edges.keys() {
                    labels.push(c);
                    pos += 1;
                }
            }
        }
        label_pos.push(pos);
        (label_pos, labels)
    }

    #[inline(always)]
    fn is_used(&self, idx: usize) -> bool {
        idx == ROOT_STATE_IDX as usize || self.check[idx] != CHECK_VACANT
    }

    #[inline(always)]
    fn extend_arrays(&mut self, min_size: usize) {
        if min_size > self.base.len() {
            let new_len = ((min_size - self.base.len() - 1) / self.step_size + 1) * self.step_size
                + self.base.len();
            self.base.resize(new_len, BASE_INVALID);
            self.check.resize(new_len, CHECK_VACANT);
            self.terminals.resize(new_len, KEYWORD_INVALID);
        }
    }

    fn truncate_arrays(&mut self, size: usize) {
        self.base.truncate(size);
        self.check.truncate(size);
        self.terminals.truncate(size);
        self.base.shrink_to_fit();
        self.check.shrink_to_fit();
        self.terminals.shrink_to_fit();
    }
}
