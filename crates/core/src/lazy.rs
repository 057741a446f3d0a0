//! Support values for deferred image loading.

/// Inline SVG substituted for a deferred image whose real source fails to
/// load: a 400×300 gray card with a centered "Image Not Found" label.
pub const PLACEHOLDER_IMAGE: &str = r#"data:image/svg+xml,%3Csvg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300"%3E%3Crect fill="%23ddd" width="400" height="300"/%3E%3Ctext x="50%25" y="50%25" text-anchor="middle" fill="%23999"%3EImage Not Found%3C/text%3E%3C/svg%3E"#;

/// Formats the expanded-viewport margin handed to the intersection observer,
/// so images start loading `px` before they scroll into view.
pub fn root_margin(px: u32) -> String {
    format!("{px}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_an_inline_svg() {
        assert!(PLACEHOLDER_IMAGE.starts_with("data:image/svg+xml,"));
        assert!(PLACEHOLDER_IMAGE.contains("Image Not Found"));
        // URL-encoded markup only; a raw '<' would break out of the attribute.
        assert!(!PLACEHOLDER_IMAGE.contains('<'));
    }

    #[test]
    fn test_root_margin_formatting() {
        assert_eq!(root_margin(50), "50px");
        assert_eq!(root_margin(0), "0px");
    }
}
