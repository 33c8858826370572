//! Indentation normalization for `"""` block strings.
//!
//! 1. Split the raw content on `\r\n`, `\n` or a lone `\r`.
//! 2. The common indent is the smallest count of leading spaces/tabs over
//!    every line after the first that is not whitespace-only.
//! 3. Strip that many characters from every line after the first.
//! 4. Drop leading and trailing whitespace-only lines.
//! 5. Join with `\n`.
//!
//! No escape resolution happens here.

/// Dedent the raw content of a block string (between the triple quotes).
pub(crate) fn dedent_block(raw: &str) -> String {
    let lines = split_lines(raw);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min();

    let lines: Vec<&str> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| match common_indent {
            // Lines shorter than the indent are whitespace-only.
            Some(indent) if i > 0 => &line[indent.min(line.len())..],
            _ => line,
        })
        .collect();

    let first = lines.iter().position(|line| !is_blank(line));
    let last = lines.iter().rposition(|line| !is_blank(line));
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

fn split_lines(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&raw[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&raw[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&raw[start..]);
    lines
}

#[inline]
fn is_indent(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|&b| is_indent(b)).count()
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(is_indent)
}
