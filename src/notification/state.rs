use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Severity of a notification, which decides its color and lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn duration(self) -> Duration {
        match self {
            NotificationLevel::Info => Duration::from_millis(1500),
            NotificationLevel::Warning => Duration::from_secs(3),
            NotificationLevel::Error => Duration::from_secs(5),
        }
    }

    pub fn color(self) -> Color {
        match self {
            NotificationLevel::Info => Color::Green,
            NotificationLevel::Warning => Color::Yellow,
            NotificationLevel::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub shown_at: Instant,
}

impl Notification {
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.level.duration()
    }
}

/// At most one notification is visible; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_with_level(message, NotificationLevel::Info);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with_level(message, NotificationLevel::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_level(message, NotificationLevel::Error);
    }

    pub fn show_with_level(&mut self, message: &str, level: NotificationLevel) {
        self.current = Some(Notification {
            message: message.to_string(),
            level,
            shown_at: Instant::now(),
        });
    }

    /// Drop the notification once its time is up; returns the live one
    pub fn current(&mut self) -> Option<&Notification> {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn peek(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
