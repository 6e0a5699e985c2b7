// ---------------------------------------------------------------------------
// Document – a text blob viewed as lines
// ---------------------------------------------------------------------------

/// A text blob split on `\n`, borrowing its lines from the source text.
///
/// A final newline does not produce an empty trailing line; it is recorded in
/// `trailing_newline` instead so that [`Document::into_text`] reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
    trailing_newline: bool,
}

impl<'a> Document<'a> {
    /// Split `text` into lines.
    pub fn parse(text: &'a str) -> Self {
        if text.is_empty() {
            return Document {
                lines: Vec::new(),
                trailing_newline: false,
            };
        }
        let (body, trailing_newline) = match text.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (text, false),
        };
        Document {
            lines: body.split('\n').collect(),
            trailing_newline,
        }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Replace every line matching `pred` with an empty line.
    /// Returns how many lines were blanked.
    pub fn blank_where(&mut self, pred: impl Fn(&str) -> bool) -> usize {
        let mut blanked = 0;
        for line in &mut self.lines {
            if !line.is_empty() && pred(line) {
                *line = "";
                blanked += 1;
            }
        }
        blanked
    }

    /// Remove every line matching `pred`. Returns how many lines were removed.
    pub fn remove_where(&mut self, pred: impl Fn(&str) -> bool) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| !pred(line));
        before - self.lines.len()
    }

    /// Remove the lines whose index is flagged in `drop`.
    /// `drop` must have one entry per line.
    pub fn remove_flagged(&mut self, drop: &[bool]) -> usize {
        debug_assert_eq!(drop.len(), self.lines.len());
        let before = self.lines.len();
        let mut flags = drop.iter();
        self.lines.retain(|_| !flags.next().copied().unwrap_or(false));
        before - self.lines.len()
    }

    /// Join the lines back into a blob. A document with no lines left yields
    /// the empty string even if the source ended with a newline.
    pub fn into_text(self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut text = self.lines.join("\n");
        if self.trailing_newline {
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_trailing_newline() {
        let doc = Document::parse("a\nb\n");
        assert_eq!(doc.lines(), &["a", "b"]);
        assert_eq!(doc.into_text(), "a\nb\n");
    }

    #[test]
    fn parse_empty_and_lone_newline() {
        assert!(Document::parse("").is_empty());

        let doc = Document::parse("\n");
        assert_eq!(doc.lines(), &[""]);
        assert_eq!(doc.into_text(), "\n");
    }

    #[test]
    fn remove_flagged_drops_marked_lines() {
        let mut doc = Document::parse("a\nb\nc");
        let removed = doc.remove_flagged(&[true, false, true]);
        assert_eq!(removed, 2);
        assert_eq!(doc.into_text(), "b");
    }

    #[test]
    fn removing_everything_yields_empty_text() {
        let mut doc = Document::parse("a\nb\n");
        doc.remove_where(|_| true);
        assert_eq!(doc.into_text(), "");
    }
}
