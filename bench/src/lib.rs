//! Corpora shared by the benchmarks and the memory report.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ASCII_CHARSET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];
const CJK_CHARSET: &[char] = &[
    '吾', '輩', 'は', '猫', 'で', 'あ', 'る', '名', '前', 'ま', 'だ', '無', 'い', 'ど', 'こ', '生',
    'れ', 'た', 'か', 'と', 'ん', '見', '当', 'が', 'つ', 'ぬ',
];

/// Kind of characters used in a generated corpus.
#[derive(Clone, Copy, Debug)]
pub enum Charset {
    /// Lowercase ASCII letters.
    Ascii,
    /// Japanese characters, three bytes each in UTF-8.
    Cjk,
}

impl Charset {
    const fn chars(self) -> &'static [char] {
        match self {
            Self::Ascii => ASCII_CHARSET,
            Self::Cjk => CJK_CHARSET,
        }
    }
}

/// Generates `num` distinct keywords of 1 to `max_len` characters, sorted.
/// The same arguments always produce the same keywords.
pub fn generate_keywords(charset: Charset, num: usize, max_len: usize) -> Vec<String> {
    let chars = charset.chars();
    let mut rng = StdRng::seed_from_u64(0x5eed + num as u64);
    let mut keywords = std::collections::BTreeSet::new();
    while keywords.len() < num {
        let len = rng.gen_range(1..=max_len);
        keywords.insert(
            (0..len)
                .map(|_| chars[rng.gen_range(0..chars.len())])
                .collect::<String>(),
        );
    }
    keywords.into_iter().collect()
}

/// Generates a haystack of `len` characters split into lines of 80 characters.
pub fn generate_haystacks(charset: Charset, len: usize) -> Vec<String> {
    let chars = charset.chars();
    let mut rng = StdRng::seed_from_u64(0xda7a);
    let text: Vec<char> = (0..len)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();
    text.chunks(80).map(|line| line.iter().collect()).collect()
}

/// Loads a line-separated corpus.
pub fn load_file<P>(path: P) -> std::io::Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let buf = BufReader::new(File::open(path)?);
    buf.lines().collect()
}
