use super::*;

#[test]
fn set_text_resets_cursor_and_modified() {
    let mut buffer = TextBuffer::from_text("abc");
    buffer.set_cursor_position(3);
    buffer.insert_text("d");
    assert!(buffer.is_modified());

    buffer.set_text("hello\nworld");
    assert_eq!(buffer.cursor_position(), 0);
    assert!(!buffer.is_modified());
    assert_eq!(buffer.text(), "hello\nworld");
    assert_eq!(buffer.selection(), None);
}

#[test]
fn insert_text_advances_cursor_by_chars() {
    let mut buffer = TextBuffer::new();
    buffer.insert_text("héllo");
    assert_eq!(buffer.text(), "héllo");
    assert_eq!(buffer.cursor_position(), 5);
}

#[test]
fn insert_text_replaces_selection() {
    let mut buffer = TextBuffer::from_text("forward(10)");
    buffer.set_selection(8, 10);
    buffer.insert_text("25");
    assert_eq!(buffer.text(), "forward(25)");
    assert_eq!(buffer.cursor_position(), 10);
    assert_eq!(buffer.selection(), None);
}

#[test]
fn delete_backward_removes_grapheme() {
    let mut buffer = TextBuffer::from_text("ae\u{301}");
    buffer.set_cursor_position(3);
    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "a");
    assert_eq!(buffer.cursor_position(), 1);
}

#[test]
fn delete_backward_joins_lines() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor_position(3);
    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor_position(), 2);
}

#[test]
fn delete_backward_at_start_is_noop() {
    let mut buffer = TextBuffer::from_text("abc");
    assert!(!buffer.delete_backward());
    assert!(!buffer.is_modified());
}

#[test]
fn set_selection_clamps_to_text() {
    let mut buffer = TextBuffer::from_text("abc");
    buffer.set_selection(1, 99);
    assert_eq!(buffer.selection(), Some((1, 3)));
    assert_eq!(buffer.cursor_position(), 3);
}

#[test]
fn delete_backward_joins_crlf_lines() {
    let mut buffer = TextBuffer::from_text("a\r\nbb");
    buffer.set_cursor_position(3);
    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "abb");
    assert_eq!(buffer.cursor_position(), 1);
}
