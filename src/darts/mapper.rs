// Code 0 is never assigned, so that `base + code` never points at the base itself.
const INVALID_CODE: u32 = 0;

/// Mapping from characters to dense edge codes.
///
/// Frequent characters get small codes, which keeps children of busy states close together
/// in the double array.
#[derive(Default, Clone, Debug, Eq, Hash, PartialEq)]
pub struct CodeMapper {
    table: Vec<u32>,
    alphabet_size: u32,
}

impl CodeMapper {
    /// Creates a mapper from character frequencies, where `freqs[c]` is the frequency of the
    /// character whose scalar value is `c`.
    pub fn new(freqs: &[u32]) -> Self {
        let sorted = {
            let mut sorted: Vec<_> = freqs
                .iter()
                .enumerate()
                .filter(|(_, &f)| f != 0)
                .collect();
            // Ties are broken by the character to make the order unique.
            sorted.sort_unstable_by(|(c1, f1), (c2, f2)| f2.cmp(f1).then_with(|| c1.cmp(c2)));
            sorted
        };
        let mut table = vec![INVALID_CODE; freqs.len()];
        let mut code = INVALID_CODE;
        for &(c, _) in &sorted {
            code += 1;
            table[c] = code;
        }
        Self {
            table,
            alphabet_size: code,
        }
    }

    /// Returns the code of `c`, or `None` if `c` never appears in the keywords.
    #[inline(always)]
    pub fn get(&self, c: char) -> Option<u32> {
        self.table
            .get(u32::from(c) as usize)
            .copied()
            .filter(|&code| code != INVALID_CODE)
    }

    /// Returns the number of distinct characters that received a code.
    #[inline(always)]
    pub const fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    #[inline]
    pub fn heap_bytes(&self) -> usize {
        self.table.len() * std::mem::size_of::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapper() {
        let freqs = vec![3, 6, 0, 2, 3, 0, 3];
        let mapper = CodeMapper::new(&freqs);

        assert_eq!(mapper.get(0 as char), Some(2));
        assert_eq!(mapper.get(1 as char), Some(1));
        assert_eq!(mapper.get(2 as char), None);
        assert_eq!(mapper.get(3 as char), Some(5));
        assert_eq!(mapper.get(4 as char), Some(3));
        assert_eq!(mapper.get(5 as char), None);
        assert_eq!(mapper.get(6 as char), Some(4));
        assert_eq!(mapper.get(7 as char), None); // out-of-range
        assert_eq!(mapper.alphabet_size(), 5);
    }

    #[test]
    fn test_code_mapper_empty() {
        let mapper = CodeMapper::new(&[]);
        assert_eq!(mapper.get('a'), None);
        assert_eq!(mapper.alphabet_size(), 0);
    }
}
