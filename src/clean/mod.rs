/// Text cleaning pipeline for annual-report extractions.
///
/// Architecture:
/// ```text
///   raw text
///      │
///      ▼
///   ┌──────────────┐
///   │ page_numbers │  blank lines that are only 1-3 digits
///   └──────────────┘
///      │
///      ▼
///   ┌──────────────┐
///   │   footers    │  drop "annual report" lines, then digit-bracketed blocks
///   └──────────────┘
///      │
///      ▼
///   ┌──────────────┐
///   │   headers    │  drop vocabulary-only headings, trim, lowercase
///   └──────────────┘
///      │
///      ▼
///   cleaned text
/// ```
///
/// Every stage is total: any `&str` in, a `String` out, no panics.

pub mod document;
pub mod footers;
pub mod headers;
pub mod page_numbers;
pub mod vocabulary;

use serde::Serialize;

use document::Document;

pub use footers::remove_footers;
pub use headers::remove_headers;
pub use page_numbers::remove_page_numbers;

// ---------------------------------------------------------------------------
// Per-document statistics
// ---------------------------------------------------------------------------

/// What each stage did to one document.
///
/// Page numbers are blanked, not removed; the header stage later drops those
/// blanks along with any others, so [`CleanStats::lines_removed`] is the only
/// total to trust.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    /// Lines in the input document.
    pub input_lines: usize,
    /// Lines left in the cleaned text.
    pub output_lines: usize,
    /// Lines blanked by the page-number stage.
    pub page_numbers_blanked: usize,
    /// Lines removed because they contain "annual report".
    pub marker_footers: usize,
    /// Digit lines and their neighbors removed as footer blocks.
    pub bracketed_footers: usize,
    /// Non-blank heading lines removed by the header stage.
    pub headings: usize,
    /// Blank lines removed by the header stage, blanked page numbers included.
    pub blank_lines: usize,
}

impl CleanStats {
    /// Lines in the input that are gone from the output.
    pub fn lines_removed(&self) -> usize {
        self.input_lines.saturating_sub(self.output_lines)
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Clean one document: page numbers, then footers, then headers, then
/// lowercase.
///
/// Not idempotent in general, since the heading check depends on the original
/// casing that the final step throws away.
pub fn clean(text: &str) -> String {
    clean_with_stats(text).0
}

/// [`clean`], also reporting what each stage removed.
pub fn clean_with_stats(text: &str) -> (String, CleanStats) {
    let mut stats = CleanStats::default();

    let mut doc = Document::parse(text);
    stats.input_lines = doc.len();
    stats.page_numbers_blanked = page_numbers::blank_page_numbers(&mut doc);

    // Re-parse so the footer stage sees exactly what `remove_footers` would.
    let stage = doc.into_text();
    let mut doc = Document::parse(&stage);
    let footers = footers::strip_footers(&mut doc);
    stats.marker_footers = footers.marker_lines;
    stats.bracketed_footers = footers.bracketed_lines;

    let headers = headers::strip_headers(&mut doc);
    stats.headings = headers.headings;
    stats.blank_lines = headers.blank_lines;
    stats.output_lines = doc.len();
    let cleaned = headers::finish(doc);

    log::trace!("cleaned document: {stats:?}");
    (cleaned, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_compose_like_their_standalone_versions() {
        let text = "CONTENTS\n3\nIntro\n 4 \nBody\nAcme Annual Report\nReal text here.\n";
        let staged = remove_headers(&remove_footers(&remove_page_numbers(text)));
        assert_eq!(clean(text), staged);
    }

    #[test]
    fn stats_count_each_stage() {
        let text = "7\nLead in\n 8 \nLead out\nACME ANNUAL REPORT\nOVERVIEW\nActual prose here.";
        let (cleaned, stats) = clean_with_stats(text);

        assert_eq!(cleaned, "actual prose here.");
        assert_eq!(
            stats,
            CleanStats {
                input_lines: 7,
                output_lines: 1,
                page_numbers_blanked: 1,
                marker_footers: 1,
                bracketed_footers: 3,
                headings: 1,
                // the blank left by `7`
                blank_lines: 1,
            }
        );
        assert_eq!(stats.lines_removed(), 6);
    }

    #[test]
    fn blanked_page_number_is_removed_once() {
        let (cleaned, stats) = clean_with_stats("Body one here.\n7\nBody two here.\n");

        assert_eq!(cleaned, "body one here.\nbody two here.");
        assert_eq!(stats.page_numbers_blanked, 1);
        assert_eq!(stats.blank_lines, 1);
        assert_eq!(stats.output_lines, 2);
        assert_eq!(stats.lines_removed(), 1);
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean_with_stats(""), (String::new(), CleanStats::default()));
    }
}
