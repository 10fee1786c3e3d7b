//! Benchmarks for the editor reducer hot path.
//!
//! Run with: cargo bench -p glossa-form --bench update_bench

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use glossa_core::{Iri, LanguageTag};
use glossa_form::{Msg, TermEditor};

fn editor() -> TermEditor {
    TermEditor::new(
        Iri::from("http://example.org/vocabulary"),
        LanguageTag::new("en"),
    )
}

/// A keystroke burst: every update rewrites the label and issues effects.
fn bench_label_edits(c: &mut Criterion) {
    c.bench_function("label_edit_update", |b| {
        b.iter(|| {
            let mut editor = editor();
            for i in 0..100u32 {
                let cmd = editor.update(Msg::LabelEdited {
                    language: LanguageTag::new("en"),
                    value: format!("Cat{i}"),
                });
                black_box(cmd);
            }
            black_box(editor)
        });
    });
}

/// Worst case for the staleness guard: every resolution is stale.
fn bench_stale_resolutions(c: &mut Criterion) {
    c.bench_function("stale_resolution_discard", |b| {
        let mut seeded = editor();
        seeded.update(Msg::LabelEdited {
            language: LanguageTag::new("en"),
            value: "Dog".to_string(),
        });
        b.iter(|| {
            let mut editor = seeded.clone();
            for i in 0..100u32 {
                let cmd = editor.update(Msg::UniquenessResolved {
                    language: LanguageTag::new("en"),
                    label: format!("Cat{i}"),
                    exists: true,
                });
                black_box(cmd);
            }
            black_box(editor)
        });
    });
}

criterion_group!(benches, bench_label_edits, bench_stale_resolutions);
criterion_main!(benches);
