//! Project-style normalization of emitted source text.
//!
//! Mirrors what the consuming project's formatter would do to the file:
//! single-quoted strings, no trailing whitespace, no blank-line runs, and
//! exactly one trailing newline.

/// Reformat emitted module text.
pub fn format_source(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut blank_run = 0usize;

    for line in source.replace("\r\n", "\n").lines() {
        let line = normalize_quotes(line.trim_end());
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 || out.is_empty() {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(&line);
        out.push('\n');
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

/// Convert double-quoted string literals to single quotes where the content
/// allows it; strings containing apostrophes or escapes are left alone.
fn normalize_quotes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find('"') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        match find_closing_quote(tail) {
            Some(end) => {
                let inner = &tail[..end];
                if inner.contains('\'') || inner.contains('\\') {
                    out.push('"');
                    out.push_str(inner);
                    out.push('"');
                } else {
                    out.push('\'');
                    out.push_str(inner);
                    out.push('\'');
                }
                rest = &tail[end + 1..];
            }
            None => {
                // Unterminated; emit verbatim
                out.push('"');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

fn find_closing_quote(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return Some(i),
            _ => {}
        }
    }
    None
}
