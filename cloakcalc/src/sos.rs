// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State behind the emergency screen.
//!
//! Nothing here talks to the outside world. The alert and the messages are simulated and
//! only surface as notices on screen.

use std::time::{Duration, Instant};

use thiserror::Error;

/// How long a notice stays on screen.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

/// Longest alert the screen will hold. Longer configured durations are clamped to it.
pub const MAX_ALERT_DURATION: Duration = Duration::from_secs(60 * 60);

pub const SAFETY_TIPS: [&str; 4] = [
    "Stay calm and assess your surroundings",
    "Move to a safe location if possible",
    "Keep your phone charged and accessible",
    "Share your location with trusted contacts",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SosError {
    #[error("both a contact and a message are required")]
    MissingInformation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct EmergencyScreen {
    pub contact: String,
    pub message: String,
    alert_duration: Duration,
    alert_until: Option<Instant>,
    notices: Vec<Notice>,
}

impl EmergencyScreen {
    #[must_use]
    pub const fn new(alert_duration: Duration) -> Self {
        let alert_duration = if alert_duration.as_secs() < MAX_ALERT_DURATION.as_secs() {
            alert_duration
        } else {
            MAX_ALERT_DURATION
        };

        Self {
            contact: String::new(),
            message: String::new(),
            alert_duration,
            alert_until: None,
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub const fn alert_duration(&self) -> Duration {
        self.alert_duration
    }

    /// Raise the alert until `now + alert_duration`. Ignored while an alert is active.
    pub fn trigger_alert(&mut self, now: Instant) {
        if self.is_alert_active(now) {
            return;
        }

        info!("Emergency alert raised");
        self.alert_until = now.checked_add(self.alert_duration);
        if self.alert_until.is_none() {
            warn!("Emergency alert deadline is out of range, the banner will not show");
        }
        self.push_notice(
            now,
            "Emergency Alert Sent",
            "Your emergency contacts have been notified with your location.",
            NoticeKind::Destructive,
        );
    }

    #[must_use]
    pub fn is_alert_active(&self, now: Instant) -> bool {
        self.alert_until.is_some_and(|until| now < until)
    }

    /// Time left on the active alert, if any.
    #[must_use]
    pub fn alert_remaining(&self, now: Instant) -> Option<Duration> {
        self.alert_until
            .and_then(|until| until.checked_duration_since(now))
            .filter(|remaining| !remaining.is_zero())
    }

    /// Drop expired state. Called once per frame; the alert is never waited on.
    pub fn tick(&mut self, now: Instant) {
        if self.alert_until.is_some() && !self.is_alert_active(now) {
            debug!("Emergency alert reset");
            self.alert_until = None;
        }

        self.notices.retain(|notice| now < notice.expires_at);
    }

    /// Send the custom message to the contact.
    ///
    /// # Errors
    /// Will return an error if the contact or the message is blank. Nothing is cleared in
    /// that case.
    pub fn send_message(&mut self, now: Instant) -> Result<(), SosError> {
        if self.contact.trim().is_empty() || self.message.trim().is_empty() {
            self.push_notice(
                now,
                "Missing Information",
                "Please enter both contact and message.",
                NoticeKind::Destructive,
            );
            return Err(SosError::MissingInformation);
        }

        let description = format!("Emergency message sent to {}", self.contact.trim());
        self.push_notice(now, "Message Sent", &description, NoticeKind::Info);
        self.message.clear();

        Ok(())
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Earliest moment something on screen changes on its own.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.notices
            .iter()
            .map(|notice| notice.expires_at)
            .chain(self.alert_until)
            .min()
    }

    fn push_notice(&mut self, now: Instant, title: &str, description: &str, kind: NoticeKind) {
        self.notices.push(Notice {
            title: title.to_string(),
            description: description.to_string(),
            kind,
            expires_at: now + NOTICE_LIFETIME,
        });
    }
}
