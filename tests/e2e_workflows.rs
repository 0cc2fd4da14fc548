//! End-to-end editing workflows.
//!
//! Run with logging:
//!   `RUST_LOG=debug` cargo test --test `e2e_workflows` -- --nocapture

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use caret::input::{KeyCode, KeyEvent, KeyModifiers, PointerButton, PointerEvent};
use caret::text::{Clipboard, Command, EditorState, MemoryClipboard, Position, Rect};
use caret::{EditorConfig, EditorEvent};
use tracing::{Level, info};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

fn editor_with(text: &str) -> EditorState {
    let config = EditorConfig::default().with_scroll_animation(Duration::ZERO);
    let mut editor = EditorState::with_config(config).expect("valid config");
    editor.set_text(text);
    editor
        .update_text_area(Rect::from_origin_size(0.0, 0.0, 212.0, 200.0))
        .expect("valid text area");
    editor
}

fn type_text(editor: &mut EditorState, text: &str) {
    for c in text.chars() {
        assert!(editor.process_key_event(&KeyEvent::char(c)));
    }
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::with_ctrl(KeyCode::Char(c))
}

/// Typing, backspace, then undo restores the deleted character.
#[test]
fn workflow_type_delete_undo() {
    init_logging();
    let mut editor = editor_with("");

    type_text(&mut editor, "hello");
    editor.process_key_event(&KeyEvent::key(KeyCode::Backspace));
    assert_eq!(editor.text(), "hell");

    editor.process_key_event(&ctrl('z'));
    assert_eq!(editor.text(), "hello");
    assert_eq!(editor.cursor(), Position::new(0, 4));

    // Each typed character is its own undo step.
    for _ in 0..5 {
        assert!(editor.undo());
    }
    assert_eq!(editor.text(), "");
    assert!(!editor.undo());

    editor.process_key_event(&KeyEvent::new(
        KeyCode::Char('z'),
        KeyModifiers::CTRL | KeyModifiers::SHIFT,
    ));
    assert_eq!(editor.text(), "h");
    info!(text = %editor.text(), "after redo");
}

/// Cut a line range and paste it elsewhere; undo unwinds both steps.
#[test]
fn workflow_cut_paste_multiline() {
    init_logging();
    let mut editor = editor_with("alpha\nbeta\ngamma");

    editor.update_cursor(Position::new(0, 2), false);
    editor.update_cursor(Position::new(1, 2), true);
    editor.process_key_event(&ctrl('x'));
    assert_eq!(editor.lines(), vec!["alta", "gamma"]);
    assert_eq!(editor.cursor(), Position::new(0, 2));

    editor.process_command(Command::MoveCursorEnd);
    editor.process_key_event(&ctrl('v'));
    assert_eq!(editor.lines(), vec!["alta", "gammapha", "be"]);
    assert_eq!(editor.cursor(), Position::new(2, 2));

    editor.undo();
    assert_eq!(editor.lines(), vec!["alta", "gamma"]);
    editor.undo();
    assert_eq!(editor.lines(), vec!["alpha", "beta", "gamma"]);
    assert_eq!(editor.cursor(), Position::new(0, 2));
}

/// Paste over a selection replaces it in a single undo step.
#[test]
fn workflow_paste_replaces_selection() {
    let mut editor = editor_with("one two three");
    editor.set_clipboard(MemoryClipboard::with_text("2"));

    editor.update_cursor(Position::new(0, 4), false);
    editor.process_command(Command::SelectRightWord);
    editor.process_command(Command::Paste);
    assert_eq!(editor.text(), "one 2three");

    editor.process_command(Command::Undo);
    assert_eq!(editor.text(), "one two three");
    assert!(!editor.can_undo());
}

/// Word deletions in both directions.
#[test]
fn workflow_delete_words() {
    let mut editor = editor_with("let value = compute(x);");
    editor.update_cursor(Position::new(0, 4), false);

    editor.process_key_event(&KeyEvent::with_ctrl(KeyCode::Delete));
    assert_eq!(editor.text(), "let = compute(x);");

    editor.process_key_event(&KeyEvent::with_ctrl(KeyCode::Backspace));
    assert_eq!(editor.text(), "= compute(x);");
    assert_eq!(editor.cursor(), Position::origin());
}

/// Tab and newline keys insert the configured indent and split lines.
#[test]
fn workflow_indent_and_newline() {
    let config = EditorConfig::default().with_tab_width(2);
    let mut editor = EditorState::with_config(config).expect("valid config");

    editor.process_key_event(&KeyEvent::key(KeyCode::Tab));
    type_text(&mut editor, "a");
    editor.process_key_event(&KeyEvent::key(KeyCode::Enter));
    type_text(&mut editor, "b");
    assert_eq!(editor.lines(), vec!["  a", "b"]);
}

/// Drag from the middle of a line into the gutter selects through the line.
#[test]
fn workflow_pointer_drag_into_gutter() {
    init_logging();
    let mut editor = editor_with("first\nsecond\nthird");

    // Text area starts at x = 6; glyphs are 12 wide, rows 20 high.
    editor.process_pointer_event(&PointerEvent::press(6.0 + 24.0, 5.0, PointerButton::Primary));
    assert_eq!(editor.cursor(), Position::new(0, 2));

    editor.process_pointer_event(&PointerEvent::move_to(6.0 + 48.0, 25.0));
    assert_eq!(editor.cursor(), Position::new(1, 4));

    // Left of the border on row 1: the drag is forward of the anchor, so the
    // hit test uses the row below and whole lines are selected.
    editor.process_pointer_event(&PointerEvent::move_to(-10.0, 25.0));
    assert_eq!(editor.cursor(), Position::new(2, 0));

    editor.process_pointer_event(&PointerEvent::release(-10.0, 25.0, PointerButton::Primary));
    let selection = editor.selection().expect("drag selection");
    assert_eq!(selection.min(), Position::new(0, 2));
    assert_eq!(selection.max(), Position::new(2, 0));

    editor.process_command(Command::Copy);
    assert_eq!(
        editor.clipboard_mut().get_text().as_deref(),
        Some("rst\nsecond\n")
    );
}

/// Moving far down scrolls the viewport and emits scroll events.
#[test]
fn workflow_scroll_follows_cursor() {
    init_logging();
    let text: Vec<String> = (0..100).map(|i| format!("line {i}")).collect();
    let mut editor = editor_with(&text.join("\n"));

    let scrolls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&scrolls);
    editor.subscribe(move |event| {
        if let EditorEvent::Scrolled { vertical, .. } = event {
            sink.borrow_mut().push(*vertical);
        }
    });

    editor.process_command(Command::MoveCursorEnd);
    assert_eq!(editor.cursor(), Position::new(99, 7));
    let max = editor.viewport().max_vertical_offset();
    assert_eq!(editor.viewport().vertical_offset(), max);
    assert_eq!(scrolls.borrow().as_slice(), &[max]);

    let first = editor.viewport().first_visible_row();
    assert!(first + editor.viewport().visible_rows() >= 99);

    editor.process_command(Command::MoveCursorHome);
    assert_eq!(editor.viewport().vertical_offset(), 0.0);
}

/// A long line scrolls horizontally once the animation is ticked.
#[test]
fn workflow_horizontal_scroll_animation() {
    let mut editor = EditorState::new();
    editor.set_text(&"x".repeat(200));
    editor
        .update_text_area(Rect::from_origin_size(0.0, 0.0, 212.0, 200.0))
        .expect("valid text area");

    editor.process_command(Command::MoveCursorEndLine);
    assert!(editor.viewport().is_animating());
    assert_eq!(editor.viewport().horizontal_offset(), 0.0);

    let start = Instant::now();
    editor.tick(start);
    editor.tick(start + Duration::from_secs(1));
    assert!(!editor.viewport().is_animating());
    // Padding would ask for 2240; the line's right edge stops it at 2400 - 200.
    assert_eq!(editor.viewport().horizontal_offset(), 2200.0);
    let indicator = editor.cursor_indicator();
    assert_eq!(indicator.x, 206.0);
}

/// Several cursor moves between two ticks still leave the cursor on screen.
#[test]
fn workflow_moves_between_ticks_keep_cursor_visible() {
    init_logging();
    let mut editor = EditorState::new();
    editor.set_text(&"x".repeat(200));
    editor
        .update_text_area(Rect::from_origin_size(0.0, 0.0, 212.0, 200.0))
        .expect("valid text area");

    editor.update_cursor(Position::new(0, 50), false);
    editor.update_cursor(Position::new(0, 51), false);

    let start = Instant::now();
    editor.tick(start);
    editor.tick(start + Duration::from_secs(1));
    assert_eq!(editor.viewport().horizontal_offset(), 452.0);

    let area = editor.viewport().text_area();
    let indicator = editor.cursor_indicator();
    assert!(indicator.x >= area.left && indicator.x <= area.right);
}

/// A custom clipboard collaborator receives copied text.
#[test]
fn workflow_custom_clipboard() {
    #[derive(Default)]
    struct Recorder {
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl Clipboard for Recorder {
        fn set_text(&mut self, text: &str) {
            self.writes.borrow_mut().push(text.to_string());
        }

        fn get_text(&mut self) -> Option<String> {
            self.writes.borrow().last().cloned()
        }
    }

    let writes = Rc::new(RefCell::new(Vec::new()));
    let mut editor = editor_with("copy me");
    editor.set_clipboard(Recorder {
        writes: Rc::clone(&writes),
    });

    editor.process_command(Command::SelectAll);
    editor.process_command(Command::Copy);
    assert_eq!(writes.borrow().as_slice(), &["copy me".to_string()]);
}
