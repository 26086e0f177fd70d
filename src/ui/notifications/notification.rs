// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum and the
//! `WidgetId` attached to every rendered toast.

use crate::error::Error;
use crate::ui::design_tokens::{background, icon};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Characters of the random widget id suffix.
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random widget id suffix.
const ID_SUFFIX_LEN: usize = 9;

/// DOM identifier of a rendered toast.
///
/// Ids combine the creation time with a random suffix so toasts created in
/// the same millisecond do not collide. They are never looked up afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(String);

impl WidgetId {
    /// Generates `toast-<epoch millis>-<9 base36 chars>`.
    #[must_use]
    pub fn generate(now_millis: u64) -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
            .collect();
        Self(format!("toast-{now_millis}-{suffix}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Severity level determines the toast's colors, icon and default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Failure requiring attention (red). Sent as `danger` by the server.
    Error,
    /// Warning that doesn't block the user (yellow).
    Warning,
    /// Informational message (blue).
    #[default]
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Name used by the server payload and the page API.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Parses a wire name, falling back to [`Severity::Info`] for unknown
    /// names. The fallback is logged so template typos stay visible.
    #[must_use]
    pub fn from_wire_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            log::warn!("{err}, showing as info");
            Severity::Info
        })
    }

    /// Background class of the toast.
    #[must_use]
    pub fn background_class(self) -> &'static str {
        match self {
            Severity::Success => background::SUCCESS,
            Severity::Error => background::DANGER,
            Severity::Warning => background::WARNING,
            Severity::Info => background::INFO,
        }
    }

    /// Bootstrap Icons class shown before the message.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Severity::Success => icon::CHECK_CIRCLE,
            Severity::Error => icon::X_CIRCLE,
            Severity::Warning => icon::EXCLAMATION_TRIANGLE,
            Severity::Info => icon::INFO_CIRCLE,
        }
    }

    /// Title announced to screen readers before the message.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Severity::Success => "Sucesso",
            Severity::Error => "Erro",
            Severity::Warning => "Aviso",
            Severity::Info => "Informação",
        }
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.wire_name() == name)
            .ok_or_else(|| Error::UnknownSeverity(name.to_string()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    /// Plain text; never interpreted as markup.
    text: String,
    /// Auto-dismiss delay. `None` uses the center's default, zero disables it.
    duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given severity and text.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            duration: None,
        }
    }

    /// Creates a success notification.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }

    /// Creates an error notification.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Creates a warning notification.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Creates an info notification.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Sets the auto-dismiss delay. `Duration::ZERO` keeps the toast until
    /// the user closes it.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}
