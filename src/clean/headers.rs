use super::document::Document;
use super::vocabulary::is_report_term;

/// Loose heading shape: starts with an uppercase letter (Title Case), or is
/// made only of uppercase letters and whitespace (ALL CAPS). Blank lines
/// match vacuously.
pub fn is_heading_shaped(line: &str) -> bool {
    let starts_upper = line.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    starts_upper
        || line
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_whitespace())
}

/// Every whitespace-separated word is a report term. True for a line with no
/// words at all.
pub fn all_words_in_vocabulary(line: &str) -> bool {
    line.split_whitespace().all(is_report_term)
}

/// Shape check first, vocabulary check second.
pub fn is_boilerplate_heading(line: &str) -> bool {
    is_heading_shaped(line) && all_words_in_vocabulary(line)
}

/// Drop boilerplate headings (and blank lines), trim and lowercase the result.
///
/// This also drops table-of-contents lines and any line whose words all
/// happen to be report terms.
pub fn remove_headers(text: &str) -> String {
    let mut doc = Document::parse(text);
    strip_headers(&mut doc);
    finish(doc)
}

/// Lines removed by the header stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderCounts {
    pub headings: usize,
    pub blank_lines: usize,
}

/// Blank lines are boilerplate headings too (heading-shaped, zero words);
/// they are taken out first so the two kinds are counted apart.
pub(crate) fn strip_headers(doc: &mut Document<'_>) -> HeaderCounts {
    let blank_lines = doc.remove_where(|line| line.trim().is_empty());
    let headings = doc.remove_where(is_boilerplate_heading);
    HeaderCounts {
        headings,
        blank_lines,
    }
}

pub(crate) fn finish(doc: Document<'_>) -> String {
    doc.into_text().trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_shapes() {
        assert!(is_heading_shaped("Revenue"));
        assert!(is_heading_shaped("Revenue grew by 4%"));
        assert!(is_heading_shaped("REVENUE AND ASSETS"));
        assert!(is_heading_shaped(""));
        assert!(is_heading_shaped("   "));
        assert!(!is_heading_shaped("revenue"));
        assert!(!is_heading_shaped("  Revenue"));
        assert!(!is_heading_shaped("42"));
    }

    #[test]
    fn vocabulary_heading_is_dropped() {
        assert_eq!(remove_headers("REVENUE AND ASSETS\nBody text."), "body text.");
    }

    #[test]
    fn heading_with_unknown_word_is_kept() {
        assert_eq!(remove_headers("REVENUE AND WIDGETS"), "revenue and widgets");
    }

    #[test]
    fn title_case_heading_is_dropped() {
        assert_eq!(
            remove_headers("Chairman's Statement\nWe had a good year."),
            "we had a good year."
        );
    }

    #[test]
    fn lowercase_vocabulary_line_is_kept() {
        // Not heading-shaped, so the vocabulary check never runs.
        assert_eq!(remove_headers("revenue growth"), "revenue growth");
    }

    #[test]
    fn blank_lines_are_dropped_and_output_trimmed() {
        let text = "\n\n  \nFirst line.\n\nsecond line\n\n";
        assert_eq!(remove_headers(text), "first line.\nsecond line");
    }

    #[test]
    fn vocabulary_only_sentence_is_a_false_positive() {
        assert_eq!(remove_headers("Revenue Growth Assets"), "");
    }

    #[test]
    fn counts_headings_and_blanks_apart() {
        let mut doc = Document::parse("OVERVIEW\n\n \nSales rose.\nNotes\n");
        let counts = strip_headers(&mut doc);
        assert_eq!(
            counts,
            HeaderCounts {
                headings: 2,
                blank_lines: 2,
            }
        );
        assert_eq!(doc.lines(), &["Sales rose."]);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(remove_headers(""), "");
        assert_eq!(remove_headers("   \n\t\n"), "");
    }
}
