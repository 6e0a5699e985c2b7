use once_cell::sync::Lazy;
use regex::Regex;

use super::document::Document;

static PAGE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,3}$").unwrap());

/// Whether `line` is exactly 1 to 3 ASCII digits. A trailing `\r` left by
/// CRLF input is ignored; any other padding disqualifies the line.
pub fn is_page_number(line: &str) -> bool {
    PAGE_NUMBER.is_match(line.strip_suffix('\r').unwrap_or(line))
}

/// Blank out every line that is nothing but a page number.
pub fn remove_page_numbers(text: &str) -> String {
    let mut doc = Document::parse(text);
    blank_page_numbers(&mut doc);
    doc.into_text()
}

pub(crate) fn blank_page_numbers(doc: &mut Document<'_>) -> usize {
    doc.blank_where(is_page_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_short_digit_lines() {
        assert_eq!(remove_page_numbers("123\nHello\n45\n"), "\nHello\n\n");
    }

    #[test]
    fn keeps_four_digit_lines() {
        assert_eq!(remove_page_numbers("1234\nHello"), "1234\nHello");
    }

    #[test]
    fn requires_the_whole_line() {
        let text = "Page 12\n12 months\n 7 \n";
        assert_eq!(remove_page_numbers(text), text);
    }

    #[test]
    fn tolerates_crlf() {
        assert_eq!(remove_page_numbers("Intro\r\n9\r\nBody\r\n"), "Intro\r\n\nBody\r\n");
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(remove_page_numbers(""), "");
        assert_eq!(remove_page_numbers("\n\n"), "\n\n");
        assert_eq!(remove_page_numbers("7"), "");
    }
}
