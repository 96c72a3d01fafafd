//! Iterators for [`Automaton`].

use std::slice;

use crate::table::TransitionTable;
use crate::{Automaton, Term};

/// Iterator created by [`Automaton::search_iter()`].
///
/// Every call to [`next()`](Iterator::next) first drains the output list of the current
/// state and then reads further characters of the haystack.
pub struct TermIterator<'a, T, P> {
    pma: &'a Automaton<T>,
    haystack: P,
    state_id: u32,
    // Consumed length of the haystack in bytes and in characters.
    pos: usize,
    char_pos: usize,
    output: slice::Iter<'a, u32>,
}

impl<'a, T, P> TermIterator<'a, T, P>
where
    T: TransitionTable,
    P: AsRef<str>,
{
    pub(crate) fn new(pma: &'a Automaton<T>, haystack: P) -> Self {
        Self {
            pma,
            haystack,
            state_id: pma.table().root(),
            pos: 0,
            char_pos: 0,
            output: [].iter(),
        }
    }

    #[inline(always)]
    fn term(&self, id: u32) -> Term<'a> {
        Term::ending_at(self.pma.keyword(id), self.char_pos, self.pos)
    }
}

impl<'a, T, P> Iterator for TermIterator<'a, T, P>
where
    T: TransitionTable,
    P: AsRef<str>,
{
    type Item = Term<'a>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(&id) = self.output.next() {
            return Some(self.term(id));
        }
        let haystack = self.haystack.as_ref();
        while let Some(c) = haystack[self.pos..].chars().next() {
            self.pos += c.len_utf8();
            self.char_pos += 1;
            if let Some(state_id) = self.pma.next_state(self.state_id, c) {
                self.state_id = state_id;
            } else {
                // The failure chain is broken; nothing after this point is scanned.
                self.pos = haystack.len();
                return None;
            }
            let mut output = self.pma.outputs(self.state_id).iter();
            if let Some(&id) = output.next() {
                self.output = output;
                return Some(self.term(id));
            }
        }
        None
    }
}
