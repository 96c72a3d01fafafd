use std::sync::Arc;
use std::thread;

use acdat::{Automaton, Term};

fn pos_words<'a>(terms: &[Term<'a>]) -> Vec<(usize, &'a str)> {
    terms.iter().map(|t| (t.pos(), t.word())).collect()
}

#[test]
fn test_ushers() {
    let pma = Automaton::new(["he", "she", "his", "hers"]).unwrap();

    assert_eq!(
        vec![(1, "she"), (2, "he"), (2, "hers")],
        pos_words(&pma.search("ushers", false))
    );
    assert_eq!(vec![(1, "she")], pos_words(&pma.search("ushers", true)));
}

#[test]
fn test_nested() {
    let pma = Automaton::new(["ab", "b"]).unwrap();

    assert_eq!(
        vec![(1, "ab"), (2, "b")],
        pos_words(&pma.search("cab", false))
    );
    assert_eq!(vec![(1, "ab")], pos_words(&pma.search("cab", true)));
}

#[test]
fn test_no_match() {
    let pma = Automaton::new(["xyz"]).unwrap();

    assert!(pma.search("abcdef", false).is_empty());
    assert!(pma.search("abcdef", true).is_empty());
    assert!(pma.search("", false).is_empty());
}

#[test]
fn test_idempotence() {
    let pma = Automaton::new(["he", "she", "his", "hers"]).unwrap();

    let expected = pma.search("she sells his shells to hers", false);
    assert!(!expected.is_empty());
    for _ in 0..10 {
        assert_eq!(expected, pma.search("she sells his shells to hers", false));
    }
}

#[test]
fn test_exact_match() {
    let pma = Automaton::new(["he", "she", "his", "hers"]).unwrap();

    let t = pma.exact_match("she").unwrap();
    assert_eq!((0, 3, "she"), (t.pos(), t.end(), t.word()));
    assert_eq!(None, pma.exact_match("ushers"));
    assert_eq!(None, pma.exact_match("sh"));
}

#[test]
fn test_lazy_iterator_matches_search() {
    let pma = Automaton::new(["a", "ab", "bcd", "cd"]).unwrap();

    let collected: Vec<_> = pma.search_iter("abcdabcd").collect();
    assert_eq!(pma.search("abcdabcd", false), collected);
    assert_eq!(
        vec![(0, "a"), (0, "ab"), (1, "bcd"), (2, "cd")],
        pos_words(&pma.search_iter("abcdabcd").take(4).collect::<Vec<_>>())
    );
}

#[test]
fn test_concurrent_search() {
    let pma = Arc::new(Automaton::new(["he", "she", "his", "hers"]).unwrap());
    let expected: Vec<_> = pma
        .search("ushers", false)
        .iter()
        .map(|t| (t.pos(), t.word().to_string()))
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pma = Arc::clone(&pma);
            thread::spawn(move || {
                (0..100)
                    .map(|_| {
                        pma.search("ushers", false)
                            .iter()
                            .map(|t| (t.pos(), t.word().to_string()))
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(expected, result);
        }
    }
}

#[test]
fn test_table_dumps() {
    let pma = Automaton::new(["he", "she", "his", "hers"]).unwrap();

    let mut failure = vec![];
    pma.write_failure_table(&mut failure).unwrap();
    let failure = String::from_utf8(failure).unwrap();
    // Header, borders and one row per state.
    assert_eq!(4 + pma.num_states(), failure.lines().count());

    let mut output = vec![];
    pma.write_output_table(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.lines().any(|l| l.ends_with("| she he")));
    assert!(output.lines().any(|l| l.ends_with("| hers")));
}
