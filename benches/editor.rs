//! Editor performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use caret::input::KeyEvent;
use caret::text::{Command, EditorState, MemoryClipboard, Position, Rect};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn large_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("fn item_{i}(value: u32) -> u32 {{ value * {i} }}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn editor_with(text: &str) -> EditorState {
    let mut editor = EditorState::new();
    editor.set_text(text);
    let _ = editor.update_text_area(Rect::from_origin_size(0.0, 0.0, 800.0, 600.0));
    editor
}

fn typing(c: &mut Criterion) {
    c.bench_function("type_100_chars", |b| {
        b.iter_batched(
            || editor_with(""),
            |mut editor| {
                for c in "the quick brown fox jumps over the lazy dog ".chars().cycle().take(100) {
                    editor.process_key_event(black_box(&KeyEvent::char(c)));
                }
                editor
            },
            BatchSize::SmallInput,
        )
    });

    let text = large_text(10_000);
    c.bench_function("type_mid_document_10k_lines", |b| {
        b.iter_batched(
            || {
                let mut editor = editor_with(&text);
                editor.update_cursor(Position::new(5_000, 10), false);
                editor
            },
            |mut editor| {
                editor.process_key_event(black_box(&KeyEvent::char('x')));
                editor
            },
            BatchSize::LargeInput,
        )
    });
}

fn history(c: &mut Criterion) {
    let mut editor = editor_with("");
    for c in "abcdefghij".chars().cycle().take(500) {
        editor.process_key_event(&KeyEvent::char(c));
    }

    c.bench_function("undo_redo_500", |b| {
        b.iter(|| {
            while editor.undo() {}
            while editor.redo() {}
            black_box(editor.cursor());
        })
    });
}

fn movement(c: &mut Criterion) {
    let text = large_text(1_000);
    let mut editor = editor_with(&text);

    c.bench_function("word_walk_line", |b| {
        b.iter(|| {
            editor.update_cursor(Position::new(500, 0), false);
            for _ in 0..12 {
                editor.process_command(black_box(Command::MoveCursorRightWord));
            }
        })
    });

    c.bench_function("page_down_document", |b| {
        b.iter(|| {
            editor.process_command(Command::MoveCursorHome);
            while editor.cursor().row + 1 < 1_000 {
                editor.process_command(black_box(Command::MoveCursorDownPage));
            }
        })
    });

    c.bench_function("hit_test", |b| {
        b.iter(|| black_box(editor.hit_test(black_box(240.0), black_box(310.0))))
    });
}

fn clipboard(c: &mut Criterion) {
    let block = large_text(200);
    let text = large_text(2_000);

    c.bench_function("paste_200_lines", |b| {
        b.iter_batched(
            || {
                let mut editor = editor_with(&text);
                editor.set_clipboard(MemoryClipboard::with_text(block.clone()));
                editor.update_cursor(Position::new(1_000, 4), false);
                editor
            },
            |mut editor| {
                editor.process_command(black_box(Command::Paste));
                editor
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("select_all_copy", |b| {
        let mut editor = editor_with(&text);
        b.iter(|| {
            editor.process_command(Command::SelectAll);
            editor.process_command(black_box(Command::Copy));
        })
    });
}

criterion_group!(benches, typing, history, movement, clipboard);
criterion_main!(benches);
