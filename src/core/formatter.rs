//! Formats raw section-delimited text into an API documentation page.
//!
//! The input convention is loose: sections are introduced by the literal
//! marker `"## "`, titles are the first non-blank line after a marker, and
//! everything else in the fragment is body text. Malformed input degrades to
//! fewer (or zero) sections rather than an error.

/// Marker that introduces a section in the raw input.
const SECTION_MARKER: &str = "## ";

/// A titled chunk of text pulled out of the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    /// Parse one marker-delimited fragment. Returns `None` for fragments that
    /// are empty or all whitespace.
    pub fn parse(fragment: &str) -> Option<Self> {
        if fragment.trim().is_empty() {
            return None;
        }

        let mut lines = fragment.lines().filter(|line| !line.trim().is_empty());

        let title = lines.next().unwrap_or("").trim().to_string();
        // Blank lines inside the body are dropped, so multi-paragraph bodies
        // collapse into a single block.
        let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

        Some(Self { title, body })
    }

    /// Render the section as a Markdown heading block.
    pub fn render(&self) -> String {
        format!("## {}\n\n{}\n", self.title, self.body)
    }
}

/// Format a raw text blob into a Markdown document with one heading per
/// detected section, sections separated by a blank line.
///
/// Text before the first marker is discarded. Input without any marker yields
/// an empty string. This function is pure and never fails.
pub fn format(raw: &str) -> String {
    raw.split(SECTION_MARKER)
        .filter_map(Section::parse)
        .map(|section| section.render())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers_yields_empty_output() {
        assert_eq!(format(""), "");
        assert_eq!(format("just some prose\nwith lines\n"), "");
        assert_eq!(format("   \n\t\n"), "");
    }

    #[test]
    fn test_two_sections() {
        let raw = "## A\ncontent A\n## B\ncontent B";
        assert_eq!(format(raw), "## A\n\ncontent A\n\n## B\n\ncontent B\n");
    }

    #[test]
    fn test_title_only_section_renders_empty_body() {
        let raw = "## Empty\n\n## Next\ntext";
        assert_eq!(format(raw), "## Empty\n\n\n\n## Next\n\ntext\n");
    }

    #[test]
    fn test_leading_text_before_first_marker_is_dropped() {
        assert_eq!(format("intro\n## A\nbody"), format("## A\nbody"));
    }

    #[test]
    fn test_blank_lines_within_body_are_removed() {
        let raw = "## A\nfirst paragraph\n\n   \nsecond paragraph";
        assert_eq!(format(raw), "## A\n\nfirst paragraph\nsecond paragraph\n");
    }

    #[test]
    fn test_reformatting_own_output_is_structurally_stable() {
        let raw = "## A\ncontent A\n## B\ncontent B";
        let once = format(raw);
        let twice = format(&once);

        let parse_all = |doc: &str| {
            doc.split(SECTION_MARKER)
                .filter_map(Section::parse)
                .collect::<Vec<_>>()
        };
        assert_eq!(parse_all(&once), parse_all(&twice));
    }

    #[test]
    fn test_multiline_body_is_trimmed_as_a_whole() {
        let raw = "## A\n  alpha  \n  beta  ";
        // Interior line whitespace survives; only the joined body is trimmed.
        assert_eq!(format(raw), "## A\n\nalpha  \n  beta\n");
    }
}
