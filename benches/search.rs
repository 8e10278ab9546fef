//! Benchmarks for the case-insensitive buffer search
//!
//! Run with: cargo bench search

use divan::Bencher;
use notepad::model::Document;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn document(line_count: usize) -> Document {
    Document::with_text(&"The quick brown fox jumps over the lazy dog.\n".repeat(line_count))
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn search_found_near_start(bencher: Bencher, line_count: usize) {
    let doc = document(line_count);
    bencher.bench_local(|| divan::black_box(doc.contains_ignore_case("QUICK BROWN")));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn search_not_found(bencher: Bencher, line_count: usize) {
    let doc = document(line_count);
    bencher.bench_local(|| divan::black_box(doc.contains_ignore_case("purple elephant")));
}

#[divan::bench(args = [1_000, 10_000])]
fn search_across_line_break(bencher: Bencher, line_count: usize) {
    let doc = document(line_count);
    bencher.bench_local(|| divan::black_box(doc.contains_ignore_case("dog.\nthe")));
}
