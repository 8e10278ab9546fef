//! Benchmarks for document editing through the update loop
//!
//! Run with: cargo bench editing

use divan::Bencher;
use notepad::messages::{DocumentMsg, EditorMsg, Msg};
use notepad::model::{Cursor, Document};
use notepad::update::update;
use notepad::{AppModel, EditorConfig};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn model(line_count: usize) -> AppModel {
    let mut model = AppModel::new(600, 900, EditorConfig::default());
    model.document = Document::with_text(&"foo bar baz\n".repeat(line_count));
    model.editor.cursor = Cursor::at(line_count / 2, 4);
    model
}

// ============================================================================
// Typing
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn type_char_middle(bencher: Bencher, line_count: usize) {
    bencher
        .with_inputs(|| model(line_count))
        .bench_local_values(|mut model| {
            update(&mut model, Msg::Document(DocumentMsg::InsertChar('x')));
            model
        });
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn backspace_middle(bencher: Bencher, line_count: usize) {
    bencher
        .with_inputs(|| model(line_count))
        .bench_local_values(|mut model| {
            update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));
            model
        });
}

#[divan::bench(args = [10_000])]
fn paste_block(bencher: Bencher, line_count: usize) {
    let block = "pasted line\r\n".repeat(100);
    bencher
        .with_inputs(|| model(line_count))
        .bench_local_values(|mut model| {
            update(
                &mut model,
                Msg::Document(DocumentMsg::InsertText(block.clone())),
            );
            model
        });
}

// ============================================================================
// Navigation
// ============================================================================

#[divan::bench(args = [10_000, 100_000])]
fn page_down(bencher: Bencher, line_count: usize) {
    bencher
        .with_inputs(|| model(line_count))
        .bench_local_values(|mut model| {
            update(&mut model, Msg::Editor(EditorMsg::PageDown));
            model
        });
}
