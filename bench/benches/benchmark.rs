use std::time::Duration;

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

use acdat_bench::{generate_haystacks, generate_keywords, Charset};

const BUILD_SAMPLE_SIZE: usize = 10;
const BUILD_WARM_UP_TIME: Duration = Duration::from_millis(500);
const BUILD_MEASURE_TIME: Duration = Duration::from_secs(2);

const SEARCH_SAMPLE_SIZE: usize = 30;
const SEARCH_WARM_UP_TIME: Duration = Duration::from_millis(500);
const SEARCH_MEASURE_TIME: Duration = Duration::from_secs(2);

const HAYSTACK_LEN: usize = 100_000;

macro_rules! define_build_bench {
    ( $func_name:ident, $group:literal, $charset:expr, $num:literal, $max_len:literal ) => {
        fn $func_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group);
            group.sample_size(BUILD_SAMPLE_SIZE);
            group.warm_up_time(BUILD_WARM_UP_TIME);
            group.measurement_time(BUILD_MEASURE_TIME);
            group.sampling_mode(SamplingMode::Flat);
            let patterns = generate_keywords($charset, $num, $max_len);
            add_build_benches(&mut group, &patterns);
        }
    };
}

macro_rules! define_find_bench {
    ( $func_name:ident, $bench:ident, $group:literal, $charset:expr, $num:literal, $max_len:literal ) => {
        fn $func_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group);
            group.sample_size(SEARCH_SAMPLE_SIZE);
            group.warm_up_time(SEARCH_WARM_UP_TIME);
            group.measurement_time(SEARCH_MEASURE_TIME);
            group.sampling_mode(SamplingMode::Flat);
            let patterns = generate_keywords($charset, $num, $max_len);
            let haystacks = generate_haystacks($charset, HAYSTACK_LEN);
            $bench(&mut group, &patterns, &haystacks);
        }
    };
}

define_build_bench!(criterion_words_100_build, "words_100/build", Charset::Ascii, 100, 12);
define_build_bench!(criterion_words_5000_build, "words_5000/build", Charset::Ascii, 5000, 12);
define_build_bench!(criterion_cjk_5000_build, "cjk_5000/build", Charset::Cjk, 5000, 6);

define_find_bench!(
    criterion_words_100_search,
    add_search_benches,
    "words_100/search",
    Charset::Ascii,
    100,
    12
);
define_find_bench!(
    criterion_words_5000_search,
    add_search_benches,
    "words_5000/search",
    Charset::Ascii,
    5000,
    12
);
define_find_bench!(
    criterion_cjk_5000_search,
    add_search_benches,
    "cjk_5000/search",
    Charset::Cjk,
    5000,
    6
);

define_find_bench!(
    criterion_words_5000_search_first,
    add_search_first_benches,
    "words_5000/search_first",
    Charset::Ascii,
    5000,
    12
);
define_find_bench!(
    criterion_words_5000_exact_match,
    add_exact_match_benches,
    "words_5000/exact_match",
    Charset::Ascii,
    5000,
    12
);

fn add_build_benches(group: &mut BenchmarkGroup<WallTime>, patterns: &[String]) {
    group.bench_function("acdat", |b| {
        b.iter(|| acdat::Automaton::new(patterns).unwrap());
    });

    group.bench_function("aho_corasick", |b| {
        b.iter(|| aho_corasick::AhoCorasick::new(patterns).unwrap());
    });
}

fn add_search_benches(
    group: &mut BenchmarkGroup<WallTime>,
    patterns: &[String],
    haystacks: &[String],
) {
    group.bench_function("acdat", |b| {
        let pma = acdat::Automaton::new(patterns).unwrap();
        b.iter(|| {
            let mut sum = 0;
            for haystack in haystacks {
                for t in pma.search_iter(haystack) {
                    sum += t.end() - t.pos();
                }
            }
            if sum == 0 {
                panic!();
            }
        });
    });

    group.bench_function("aho_corasick", |b| {
        let pma = aho_corasick::AhoCorasick::new(patterns).unwrap();
        b.iter(|| {
            let mut sum = 0;
            for haystack in haystacks {
                for m in pma.find_overlapping_iter(haystack) {
                    sum += m.end() - m.start();
                }
            }
            if sum == 0 {
                panic!();
            }
        });
    });
}

fn add_search_first_benches(
    group: &mut BenchmarkGroup<WallTime>,
    patterns: &[String],
    haystacks: &[String],
) {
    group.bench_function("acdat", |b| {
        let pma = acdat::Automaton::new(patterns).unwrap();
        b.iter(|| {
            let mut sum = 0;
            for haystack in haystacks {
                sum += pma.search(haystack, true).len();
            }
            if sum == 0 {
                panic!();
            }
        });
    });
}

fn add_exact_match_benches(
    group: &mut BenchmarkGroup<WallTime>,
    patterns: &[String],
    _haystacks: &[String],
) {
    group.bench_function("acdat", |b| {
        let pma = acdat::Automaton::new(patterns).unwrap();
        b.iter(|| {
            let mut sum = 0;
            for pattern in patterns {
                sum += pma.exact_match(pattern).map_or(0, |t| t.end());
            }
            if sum == 0 {
                panic!();
            }
        });
    });
}

criterion_group!(
    benches,
    criterion_words_100_build,
    criterion_words_5000_build,
    criterion_cjk_5000_build,
    criterion_words_100_search,
    criterion_words_5000_search,
    criterion_cjk_5000_search,
    criterion_words_5000_search_first,
    criterion_words_5000_exact_match,
);
criterion_main!(benches);
