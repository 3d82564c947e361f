/// One character placed on the plate grid. Row and column are 0-based grid
/// cells; emission order (top-to-bottom, left-to-right) fixes the
/// `entity_number` order downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedChar {
    pub ch: char,
    pub row: usize,
    pub col: usize,
}

/// Applies the maximum line length to `text` and splits it into lines.
///
/// With `preserve_line_breaks == false` every run of line breaks is first
/// collapsed to a single space, so the wrapper is free to re-flow the whole
/// text (only observable when a limit applies). `max_line_length <= 0`
/// disables wrapping entirely; the text is split on explicit breaks only.
///
/// Wrapping is greedy on single spaces: a word joins the current line while
/// `line_len + word_len + 1 <= max` (the `+1` pays for the joining space);
/// otherwise the line is flushed and the word starts the next one. A single
/// word longer than the limit is never split mid-word; it sits alone on its
/// own overflowing line. The trailing line is always flushed, even when
/// empty.
pub fn wrap(text: &str, max_line_length: i32, preserve_line_breaks: bool) -> Vec<String> {
    let text = if preserve_line_breaks {
        text.to_string()
    } else {
        collapse_line_breaks(text)
    };

    if max_line_length <= 0 {
        return split_lines(&text);
    }
    let max = max_line_length as usize;

    let mut result = String::new();
    let mut line = String::new();
    for word in text.split(' ') {
        if line.chars().count() + word.chars().count() + 1 <= max {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        } else {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str(&line);
            line = word.to_string();
        }
    }
    if !result.is_empty() {
        result.push('\n');
    }
    result.push_str(&line);

    split_lines(&result)
}

/// Emits one `(char, row, col)` per visible character, skipping whitespace
/// cells outright (no zero-filling).
pub fn layout(lines: &[String]) -> Vec<PlacedChar> {
    let mut placed = Vec::new();
    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            placed.push(PlacedChar { ch, row, col });
        }
    }
    placed
}

/// Replaces every run of `\r\n`, `\r`, or `\n` with one space.
fn collapse_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            in_break = true;
        } else {
            if in_break {
                out.push(' ');
                in_break = false;
            }
            out.push(ch);
        }
    }
    if in_break {
        out.push(' ');
    }
    out
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}
