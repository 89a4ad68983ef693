/// The line separator used whenever lines are joined into text.
///
/// Independent of the host OS.
pub const EOL: &str = "\n";

const BOM: char = '\u{feff}';

/// Characters a blank line may consist of: ASCII whitespace plus NUL.
/// Other Unicode spaces (such as U+00A0) count as content.
const BLANK_CHARS: [char; 7] = ['\0', '\t', '\n', '\u{b}', '\u{c}', '\r', ' '];

/// Splits raw source text into lines without terminators.
///
/// Both `\n` and `\r\n` terminate a line. A final terminator does not produce
/// a trailing empty line, and a leading byte-order mark is dropped.
pub fn normalize_lines_from_string(data: &str) -> Vec<String> {
    let data = data.strip_prefix(BOM).unwrap_or(data);
    data.lines().map(str::to_string).collect()
}

/// Returns true if the line is empty or made only of `BLANK_CHARS`.
pub fn is_blank(line: &str) -> bool {
    line.trim_end_matches(BLANK_CHARS).is_empty()
}

/// Returns the sub-slice of `lines` with leading and trailing blank lines
/// removed. Interior blank lines are kept.
pub fn strip_blank_lines<S: AsRef<str>>(lines: &[S]) -> &[S] {
    let Some(first) = lines.iter().position(|l| !is_blank(l.as_ref())) else {
        return &lines[..0];
    };
    // A non-blank line exists, so rposition is Some
    let last = lines
        .iter()
        .rposition(|l| !is_blank(l.as_ref()))
        .unwrap_or(first);
    &lines[first..=last]
}
