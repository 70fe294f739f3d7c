//! User-facing notifications.
//!
//! Components report `(message, severity)` pairs to a [`NotificationSink`];
//! how they are rendered is up to the front end. A [`Banner`] models the
//! single on-screen slot: posting replaces whatever was showing, along with
//! its auto-dismiss deadline.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

/// How long a banner stays visible by default.
pub const DEFAULT_BANNER_TTL: SignedDuration = SignedDuration::from_secs(3);

/// Type-safe enumeration of notification severities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Reminder,
    Info,
    Error,
    #[default]
    Default,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Reminder => "reminder",
            Severity::Info => "info",
            Severity::Error => "error",
            Severity::Default => "default",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Receiver of notifications.
pub trait NotificationSink {
    fn notify(&self, message: &str, severity: Severity);
}

impl NotificationSink for UnboundedSender<Notification> {
    fn notify(&self, message: &str, severity: Severity) {
        if self.send(Notification::new(message, severity)).is_err() {
            debug!("notification dropped, receiver closed: {message}");
        }
    }
}

/// The single visible notification slot.
#[derive(Debug, Clone)]
pub struct Banner {
    current: Option<(Notification, Timestamp)>,
    ttl: SignedDuration,
}

impl Banner {
    /// Creates an empty banner whose notifications stay up for `ttl`.
    pub fn new(ttl: SignedDuration) -> Self {
        Self { current: None, ttl }
    }

    /// Shows `notification` from `now` on, replacing the previous one and
    /// its dismissal deadline.
    pub fn post(&mut self, notification: Notification, now: Timestamp) {
        let dismiss_at = now.checked_add(self.ttl).unwrap_or(Timestamp::MAX);
        self.current = Some((notification, dismiss_at));
    }

    /// The notification still visible at `now`, if any.
    pub fn visible(&self, now: Timestamp) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|(_, dismiss_at)| now < *dismiss_at)
            .map(|(notification, _)| notification)
    }

    /// When the visible notification will be dismissed.
    pub fn dismiss_at(&self) -> Option<Timestamp> {
        self.current.as_ref().map(|(_, at)| *at)
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(DEFAULT_BANNER_TTL)
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    fn at(secs: i64) -> Timestamp {
        Timestamp::from_second(1_700_000_000 + secs).unwrap()
    }

    #[test]
    fn test_severity_serde() {
        let json = serde_json::to_string(&Severity::Reminder).unwrap();
        assert_eq!(json, "\"reminder\"");
        assert_eq!(Severity::default(), Severity::Default);
    }

    #[test]
    fn test_channel_sink_delivers() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
        tx.notify("Goal updated!", Severity::Success);
        let received = rx.try_recv().unwrap();
        assert_eq!(received, Notification::new("Goal updated!", Severity::Success));
    }

    #[test]
    fn test_channel_sink_ignores_closed_receiver() {
        let (tx, rx) = mpsc::unbounded_channel::<Notification>();
        drop(rx);
        tx.notify("nobody listening", Severity::Info);
    }

    #[test]
    fn test_banner_auto_dismisses() {
        let mut banner = Banner::default();
        banner.post(Notification::new("Saved", Severity::Success), at(0));
        assert!(banner.visible(at(2)).is_some());
        assert!(banner.visible(at(3)).is_none());
    }

    #[test]
    fn test_banner_replacement_resets_deadline() {
        let mut banner = Banner::default();
        banner.post(Notification::new("first", Severity::Info), at(0));
        banner.post(Notification::new("second", Severity::Error), at(2));

        let visible = banner.visible(at(4)).unwrap();
        assert_eq!(visible.message, "second");
        assert_eq!(banner.dismiss_at(), Some(at(5)));
        assert!(banner.visible(at(5)).is_none());
    }
}
