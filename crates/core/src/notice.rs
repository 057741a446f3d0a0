//! Notification categories and their style hooks.

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier class applied to the notification element.
    pub fn as_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }

    /// Parses a caller-supplied kind string. Anything unrecognized, including
    /// an omitted value, falls back to `Success`.
    pub fn parse(kind: Option<&str>) -> Self {
        match kind {
            Some("error") => NoticeKind::Error,
            _ => NoticeKind::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(NoticeKind::Success.as_class(), "success");
        assert_eq!(NoticeKind::Error.as_class(), "error");
    }

    #[test]
    fn test_parse_error_kind() {
        assert_eq!(NoticeKind::parse(Some("error")), NoticeKind::Error);
    }

    #[test]
    fn test_parse_defaults_to_success() {
        assert_eq!(NoticeKind::parse(None), NoticeKind::Success);
        assert_eq!(NoticeKind::parse(Some("success")), NoticeKind::Success);
        assert_eq!(NoticeKind::parse(Some("warning")), NoticeKind::Success);
    }
}
