// SPDX-License-Identifier: MPL-2.0
//! Flash messages rendered by the server into the page.
//!
//! The server serializes pending messages as a JSON array in a script
//! element:
//!
//! ```html
//! <script type="application/json" id="mensagens-data">
//!   [{"text": "Cadastro realizado", "type": "success"}]
//! </script>
//! ```
//!
//! The queue is read once at startup and replayed in order. A missing element
//! means no messages; a malformed payload is logged and ignored so the page
//! still renders.

use super::center::Notifier;
use super::notification::{Notification, Severity};
use crate::application::port::RenderPort;
use crate::config::defaults::FLASH_DATA_ID;
use crate::error::Result;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One serialized flash message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlashEntry {
    pub text: String,
    /// Wire severity name (`success`, `danger`, `warning`, `info`). Absent,
    /// `null` or non-string types read as `info`.
    #[serde(
        rename = "type",
        default = "default_kind",
        deserialize_with = "lenient_kind"
    )]
    pub kind: String,
}

fn default_kind() -> String {
    Severity::Info.wire_name().to_string()
}

fn lenient_kind<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(kind) => Ok(kind),
        Value::Null => Ok(default_kind()),
        other => {
            log::warn!("Flash message type {other} is not a name, showing as info");
            Ok(default_kind())
        }
    }
}

impl FlashEntry {
    /// Severity of the entry; unknown names fall back to info.
    #[must_use]
    pub fn severity(&self) -> Severity {
        Severity::from_wire_lenient(&self.kind)
    }
}

/// Ordered flash messages, consumed by [`FlashQueue::replay`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashQueue {
    entries: Vec<FlashEntry>,
}

impl FlashQueue {
    /// Parses a JSON array of `{text, type}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlashPayload`](crate::error::Error::FlashPayload) when
    /// the payload is not JSON, not an array, or an entry has no `text`.
    pub fn parse(payload: &str) -> Result<Self> {
        let entries: Vec<FlashEntry> = serde_json::from_str(payload)?;
        Ok(Self { entries })
    }

    /// Reads the queue embedded in the page.
    ///
    /// Returns `None` when the element is absent or its payload is malformed;
    /// the latter is logged.
    pub fn from_page<P: RenderPort>(port: &P) -> Option<Self> {
        let element = port.element_by_id(FLASH_DATA_ID)?;
        match Self::parse(&port.text_content(&element)) {
            Ok(queue) => Some(queue),
            Err(err) => {
                log::warn!("Ignoring flash messages: {err}");
                None
            }
        }
    }

    /// Shows every entry in order with the notifier's default duration.
    ///
    /// Returns how many toasts were actually displayed.
    pub fn replay<N: Notifier>(self, notifier: &N) -> usize {
        let mut shown = 0;
        for entry in self.entries {
            let severity = entry.severity();
            if notifier.push(Notification::new(severity, entry.text)).is_some() {
                shown += 1;
            }
        }
        log::debug!("Replayed {shown} flash message(s)");
        shown
    }
}
