//! Active-section computation for scroll-position navigation highlighting.

/// A page section eligible for navigation highlighting.
///
/// `top` and `height` describe the section's vertical span in document space.
/// The caller measures them at refresh time so layout changes (responsive
/// breakpoints, late-loading images) are always reflected.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether the probe point for `scroll_y` falls inside this span.
    ///
    /// The span is shifted up by `probe_offset` so a section counts as
    /// current while its heading sits just below the fixed navbar. The start
    /// edge is inclusive, the end edge exclusive.
    fn contains(&self, scroll_y: f64, probe_offset: f64) -> bool {
        let start = self.top - probe_offset;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Returns the id of the section owning the current scroll position, if any.
///
/// Linear scan with unconditional overwrite: when spans overlap, the last
/// match in slice order wins. Callers pass sections in document order, so
/// this favors the section that starts later.
pub fn active_section<'a>(
    spans: &'a [SectionSpan],
    scroll_y: f64,
    probe_offset: f64,
) -> Option<&'a str> {
    let mut current = None;
    for span in spans {
        if span.contains(scroll_y, probe_offset) {
            current = Some(span.id.as_str());
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("home", 0.0, 600.0),
            SectionSpan::new("services", 600.0, 400.0),
            SectionSpan::new("contact", 1000.0, 800.0),
        ]
    }

    #[test]
    fn test_no_sections_yields_none() {
        assert_eq!(active_section(&[], 250.0, 100.0), None);
    }

    #[test]
    fn test_scroll_inside_span_matches() {
        assert_eq!(active_section(&page(), 0.0, 100.0), Some("home"));
        assert_eq!(active_section(&page(), 550.0, 100.0), Some("services"));
        assert_eq!(active_section(&page(), 1200.0, 100.0), Some("contact"));
    }

    #[test]
    fn test_probe_offset_shifts_spans_up() {
        // With a 100px offset, "services" (top 600) becomes current at y=500.
        assert_eq!(active_section(&page(), 500.0, 100.0), Some("services"));
        assert_eq!(active_section(&page(), 499.0, 100.0), Some("home"));
    }

    #[test]
    fn test_start_edge_inclusive_end_edge_exclusive() {
        let spans = vec![SectionSpan::new("only", 300.0, 200.0)];
        assert_eq!(active_section(&spans, 200.0, 100.0), Some("only"));
        assert_eq!(active_section(&spans, 399.9, 100.0), Some("only"));
        assert_eq!(active_section(&spans, 400.0, 100.0), None);
    }

    #[test]
    fn test_scroll_past_all_sections_yields_none() {
        assert_eq!(active_section(&page(), 5000.0, 100.0), None);
    }

    #[test]
    fn test_scroll_above_first_section_yields_none() {
        let spans = vec![SectionSpan::new("low", 500.0, 200.0)];
        assert_eq!(active_section(&spans, 0.0, 100.0), None);
    }

    #[test]
    fn test_overlapping_spans_last_match_wins() {
        let spans = vec![
            SectionSpan::new("first", 0.0, 1000.0),
            SectionSpan::new("second", 400.0, 300.0),
        ];
        // Both contain y=450; the later span in slice order takes precedence.
        assert_eq!(active_section(&spans, 450.0, 100.0), Some("second"));
        // Only the first contains y=900.
        assert_eq!(active_section(&spans, 900.0, 100.0), Some("first"));
    }

    #[test]
    fn test_zero_height_span_never_matches() {
        let spans = vec![SectionSpan::new("empty", 200.0, 0.0)];
        assert_eq!(active_section(&spans, 100.0, 100.0), None);
    }
}
