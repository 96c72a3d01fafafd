use std::env;

use acdat_bench::{generate_keywords, load_file, Charset};

fn main() -> std::io::Result<()> {
    // Corpora given on the command line are reported in addition to the generated ones.
    for path in env::args().skip(1) {
        println!("== {} ==", path);
        let mut patterns = load_file(&path)?;
        patterns.retain(|p| !p.is_empty());
        patterns.sort_unstable();
        show_memory_stats(&patterns);
    }
    for &num in &[100, 5000, 15000, 100000] {
        println!("== ascii/words_{} ==", num);
        show_memory_stats(&generate_keywords(Charset::Ascii, num, 12));
    }
    for &num in &[100, 5000, 15000] {
        println!("== cjk/words_{} ==", num);
        show_memory_stats(&generate_keywords(Charset::Cjk, num, 6));
    }
    Ok(())
}

fn show_memory_stats(patterns: &[String]) {
    {
        let pma = acdat::Automaton::new(patterns).unwrap();
        format_memory("acdat", pma.heap_bytes());
        println!(
            "  states: {}, elements: {}, alphabet: {}",
            pma.num_states(),
            pma.num_elements(),
            pma.table().alphabet_size()
        );
    }
    {
        let pma = aho_corasick::AhoCorasick::new(patterns).unwrap();
        format_memory("aho_corasick", pma.memory_usage());
    }
}

fn format_memory(title: &str, bytes: usize) {
    println!(
        "{}: {} bytes, {:.3} MiB",
        title,
        bytes,
        bytes as f64 / (1024.0 * 1024.0)
    );
}
