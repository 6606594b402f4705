use super::Line;

const BLOCK_COMMENT_OPEN: &str = "//";
const BLOCK_COMMENT_CLOSE: &str = "\\\\";
const LINE_COMMENT: &str = "#";

/// Strips blank lines and comments from raw source, keeping the physical
/// line number of every surviving statement.
///
/// A line starting with `//` suppresses everything up to and including the
/// next line starting with `\\`. Markers are only recognized at the start
/// of a trimmed line; a stray `\\` is dropped on its own.
pub fn preprocess(source: &str) -> Vec<Line> {
    let mut lines = vec![];
    let mut in_comment = false;
    for (index, raw) in source.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        if text.starts_with(BLOCK_COMMENT_OPEN) {
            in_comment = true;
            continue;
        }
        if text.starts_with(BLOCK_COMMENT_CLOSE) {
            in_comment = false;
            continue;
        }
        if in_comment || text.starts_with(LINE_COMMENT) {
            continue;
        }
        lines.push(Line::new(index + 1, text));
    }
    lines
}
