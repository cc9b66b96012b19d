/// How long a notice stays in the status bar, in seconds
pub const NOTICE_DURATION: f64 = 3.0;

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    shown_at: f64,
}

/// Short-lived informational messages ("Canvas cleared!", "Nothing to
/// undo"). A new notice replaces the previous one.
#[derive(Debug, Default)]
pub struct Notices {
    current: Option<Notice>,
}

impl Notices {
    pub fn show(&mut self, text: impl Into<String>, now: f64) {
        let text = text.into();
        log::debug!("Notice: {}", text);
        self.current = Some(Notice {
            text,
            shown_at: now,
        });
    }

    /// The notice to display at time `now`, if it has not expired
    pub fn current(&self, now: f64) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|notice| now - notice.shown_at < NOTICE_DURATION)
            .map(|notice| notice.text.as_str())
    }

    /// Seconds until the current notice expires
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.current
            .as_ref()
            .map(|notice| NOTICE_DURATION - (now - notice.shown_at))
            .filter(|left| *left > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires() {
        let mut notices = Notices::default();
        notices.show("Canvas cleared!", 10.0);
        assert_eq!(notices.current(11.0), Some("Canvas cleared!"));
        assert!(notices.remaining(11.0).is_some());
        assert_eq!(notices.current(10.0 + NOTICE_DURATION), None);
        assert!(notices.remaining(10.0 + NOTICE_DURATION).is_none());
    }

    #[test]
    fn test_newer_notice_replaces_older() {
        let mut notices = Notices::default();
        notices.show("first", 0.0);
        notices.show("second", 1.0);
        assert_eq!(notices.current(1.5), Some("second"));
    }
}
