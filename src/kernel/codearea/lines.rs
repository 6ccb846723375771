//! Line helpers over plain text, all offsets in chars.

pub fn first_line(text: &str) -> &str {
    let line = text.split('\n').next().unwrap_or("");
    line.strip_suffix('\r').unwrap_or(line)
}

/// Char range of 1-based `line`, line break (`\n` or `\r\n`) excluded. `0`
/// reads as line 1 and lines past the end clamp to the last one.
pub fn line_char_range(text: &str, line: usize) -> (usize, usize) {
    let target = line.max(1) - 1;
    let mut start = 0;
    let mut range = (0, 0);
    for (idx, raw) in text.split('\n').enumerate() {
        let raw_len = raw.chars().count();
        let len = raw_len - usize::from(raw.ends_with('\r'));
        range = (start, start + len);
        if idx == target {
            break;
        }
        start += raw_len + 1;
    }
    range
}

/// Indent width for a line break inserted at char offset `cursor`.
///
/// Nothing at the start of a line. Otherwise the leading whitespace of the
/// cursor's line (none for a blank line), plus `indent_width` right after `:`.
pub fn newline_indent(text: &str, cursor: usize, indent_width: usize) -> usize {
    let byte = text
        .char_indices()
        .nth(cursor)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let before = &text[..byte];
    let line_start = before.rfind('\n').map(|idx| idx + 1).unwrap_or(0);
    if byte == line_start {
        return 0;
    }

    let line_end = text[byte..]
        .find('\n')
        .map(|idx| byte + idx)
        .unwrap_or(text.len());
    let line = &text[line_start..line_end];

    let mut lead = if line.trim().is_empty() {
        0
    } else {
        line.chars().take_while(|c| c.is_whitespace()).count()
    };
    if before.ends_with(':') {
        lead += indent_width;
    }
    lead
}
