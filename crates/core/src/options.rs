//! Tunable knobs shared by every mounted behavior.

use serde::Deserialize;

/// Numeric configuration for the enhancement layer.
///
/// Every field has a production default, and deserialization accepts a
/// partial object, so a caller can override a single knob:
///
/// ```
/// use veneer_core::EnhanceOptions;
///
/// let options: EnhanceOptions =
///     serde_json::from_str(r#"{ "headerOffsetPx": 80 }"#).unwrap();
/// assert_eq!(options.header_offset_px, 80.0);
/// assert_eq!(options.notice_timeout_ms, 5000);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhanceOptions {
    /// Clearance in px under the fixed navbar; the scrollspy probe point is
    /// the scroll position plus this offset.
    pub header_offset_px: f64,
    /// Clearance in px subtracted from an anchor target's position before
    /// smooth-scrolling to it.
    pub anchor_offset_px: f64,
    /// Margin in px around the viewport inside which deferred images start
    /// loading ahead of visibility.
    pub lazy_margin_px: u32,
    /// Delay in ms before an undismissed notification starts its exit
    /// animation.
    pub notice_timeout_ms: u32,
    /// Duration in ms of the notification exit animation, after which the
    /// element is removed.
    pub notice_exit_ms: u32,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            header_offset_px: 100.0,
            anchor_offset_px: 70.0,
            lazy_margin_px: 50,
            notice_timeout_ms: 5000,
            notice_exit_ms: 500,
        }
    }
}

impl EnhanceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_offset_px(mut self, px: f64) -> Self {
        self.header_offset_px = px;
        self
    }

    pub fn with_anchor_offset_px(mut self, px: f64) -> Self {
        self.anchor_offset_px = px;
        self
    }

    pub fn with_lazy_margin_px(mut self, px: u32) -> Self {
        self.lazy_margin_px = px;
        self
    }

    pub fn with_notice_timeout_ms(mut self, ms: u32) -> Self {
        self.notice_timeout_ms = ms;
        self
    }

    pub fn with_notice_exit_ms(mut self, ms: u32) -> Self {
        self.notice_exit_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let options = EnhanceOptions::default();
        assert_eq!(options.header_offset_px, 100.0);
        assert_eq!(options.anchor_offset_px, 70.0);
        assert_eq!(options.lazy_margin_px, 50);
        assert_eq!(options.notice_timeout_ms, 5000);
        assert_eq!(options.notice_exit_ms, 500);
    }

    #[test]
    fn test_builders_override_single_fields() {
        let options = EnhanceOptions::new()
            .with_header_offset_px(80.0)
            .with_notice_timeout_ms(2500);
        assert_eq!(options.header_offset_px, 80.0);
        assert_eq!(options.notice_timeout_ms, 2500);
        // Untouched fields keep their defaults.
        assert_eq!(options.anchor_offset_px, 70.0);
        assert_eq!(options.notice_exit_ms, 500);
    }

    #[test]
    fn test_deserialize_partial_object() {
        let options: EnhanceOptions =
            serde_json::from_str(r#"{ "anchorOffsetPx": 64, "lazyMarginPx": 200 }"#).unwrap();
        assert_eq!(options.anchor_offset_px, 64.0);
        assert_eq!(options.lazy_margin_px, 200);
        assert_eq!(options.header_offset_px, 100.0);
    }

    #[test]
    fn test_deserialize_empty_object_is_default() {
        let options: EnhanceOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, EnhanceOptions::default());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let options: EnhanceOptions =
            serde_json::from_str(r#"{ "noticeExitMs": 120, "debug": true }"#).unwrap();
        assert_eq!(options.notice_exit_ms, 120);
    }
}
