//! Code-fence stripping.

/// Return `text` with fenced code blocks removed.
///
/// A line whose trimmed form starts with three backticks toggles an
/// in-fence flag and is itself dropped, as are all lines while the flag is
/// set. An unterminated fence treats the remainder of the document as code;
/// that is a deliberate simplification, not a markdown-correctness claim.
#[must_use]
pub fn extract_prose(text: &str) -> String {
    let mut prose: Vec<&str> = Vec::new();
    let mut in_code = false;

    for line in text.split('\n') {
        if line.trim().starts_with("```") {
            in_code = !in_code;
            continue;
        }
        if !in_code {
            prose.push(line);
        }
    }

    prose.join("\n")
}
