use once_cell::sync::Lazy;
use regex::Regex;

use super::document::Document;
use super::page_numbers::is_page_number;

static MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)annual report").unwrap());

/// Lines removed by each footer sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FooterCounts {
    pub marker_lines: usize,
    pub bracketed_lines: usize,
}

/// Whether `line` restates the report title ("annual report", any case).
pub fn is_marker_footer(line: &str) -> bool {
    MARKER.is_match(line)
}

/// A digit line for footer purposes: 1 to 3 digits once surrounding
/// whitespace is trimmed. Padded page numbers survive the page-number
/// stage and are caught here.
pub fn is_footer_digits(line: &str) -> bool {
    is_page_number(line.trim())
}

/// Remove running footers.
///
/// Marker lines go first. Then every digit line is removed together with the
/// line above and the line below when both are available; a digit line with
/// a neighbor missing on either side is removed alone.
pub fn remove_footers(text: &str) -> String {
    let mut doc = Document::parse(text);
    strip_footers(&mut doc);
    doc.into_text()
}

pub(crate) fn strip_footers(doc: &mut Document<'_>) -> FooterCounts {
    let marker_lines = doc.remove_where(is_marker_footer);
    let drop = footer_blocks(doc.lines());
    let bracketed_lines = doc.remove_flagged(&drop);
    FooterCounts {
        marker_lines,
        bracketed_lines,
    }
}

/// Flag the lines belonging to digit-bracketed footer blocks.
///
/// Leftmost block wins: `free_from` is the first index not yet consumed, so a
/// line taken as a neighbor (or digit line) by one block is never reused as
/// the preceding neighbor of the next.
fn footer_blocks(lines: &[&str]) -> Vec<bool> {
    let mut drop = vec![false; lines.len()];
    let mut free_from = 0;
    let mut i = 0;

    while i < lines.len() {
        if !is_footer_digits(lines[i]) {
            i += 1;
            continue;
        }

        let before = i.checked_sub(1).filter(|&b| b >= free_from);
        let after = Some(i + 1).filter(|&a| a < lines.len());
        drop[i] = true;

        match (before, after) {
            (Some(b), Some(a)) => {
                drop[b] = true;
                drop[a] = true;
                i = a + 1;
            }
            _ => i += 1,
        }
        free_from = i;
    }

    drop
}
