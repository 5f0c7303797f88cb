//! Per-section token breakdown.

use skillmd_types::SectionBreakdown;

use crate::tokens::estimate_tokens;

/// Bucket title for content before the first header.
pub const PREAMBLE_TITLE: &str = "(preamble)";

/// Split a document at header lines and estimate tokens per section body.
///
/// Headers are lines starting with one to three `#` characters followed by
/// whitespace; deeper headers (`####`) are body text. Nesting is not
/// modeled: every header starts a new top-level bucket. A repeated title
/// accumulates into the same bucket, and sections whose body estimates to
/// zero tokens are omitted. Code fences are intentionally NOT stripped
/// here: a section's cost should include its code.
#[must_use]
pub fn section_breakdown(text: &str) -> SectionBreakdown {
    let mut sections = SectionBreakdown::new();
    let mut current = PREAMBLE_TITLE.to_string();
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if let Some(title) = header_title(line) {
            flush(&mut sections, &current, &buffer);
            buffer.clear();
            current = title;
        } else {
            buffer.push(line);
        }
    }
    flush(&mut sections, &current, &buffer);

    sections
}

fn flush(sections: &mut SectionBreakdown, title: &str, buffer: &[&str]) {
    let estimate = estimate_tokens(&buffer.join("\n"));
    if estimate.tokens_estimated > 0 {
        sections.add(title, estimate.tokens_estimated);
    }
}

/// Return the trimmed title if `line` is a level 1-3 header.
fn header_title(line: &str) -> Option<String> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    let mut rest = line[hashes..].chars();
    if !rest.next().is_some_and(char::is_whitespace) {
        return None;
    }
    if rest.as_str().is_empty() {
        return None;
    }
    Some(rest.as_str().trim().to_string())
}
