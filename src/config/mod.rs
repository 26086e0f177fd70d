// SPDX-License-Identifier: MPL-2.0
//! This module handles the page configuration for the notification system.
//!
//! Every field has a default, so pages work without any configuration. A page
//! may override values by embedding a TOML document in a script element with
//! the id [`defaults::CONFIG_DATA_ID`]:
//!
//! ```html
//! <script type="application/toml" id="toast-config">
//! [notifications]
//! error_duration_ms = 10000
//! placement = "top-end"
//! </script>
//! ```
//!
//! # Examples
//!
//! ```
//! use vetconecta_ui::config::{self, Placement};
//!
//! let config = config::from_toml_str("[notifications]\nplacement = \"top-start\"").unwrap();
//! assert_eq!(config.notifications.placement, Placement::TopStart);
//! assert_eq!(config.notifications.z_index, 9999);
//! ```

pub mod defaults;

use crate::application::port::RenderPort;
use crate::error::Result;
use crate::ui::notifications::Severity;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notifications: NotificationConfig,
}

/// Toast timing and placement settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Delay used by `show` when the caller gives none. Zero disables auto-dismiss.
    pub default_duration_ms: u64,
    pub success_duration_ms: u64,
    pub error_duration_ms: u64,
    pub warning_duration_ms: u64,
    pub info_duration_ms: u64,
    pub placement: Placement,
    pub z_index: u32,
    pub close_label: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: defaults::DEFAULT_DURATION_MS,
            success_duration_ms: defaults::SUCCESS_DURATION_MS,
            error_duration_ms: defaults::ERROR_DURATION_MS,
            warning_duration_ms: defaults::WARNING_DURATION_MS,
            info_duration_ms: defaults::INFO_DURATION_MS,
            placement: Placement::default(),
            z_index: defaults::CONTAINER_Z_INDEX,
            close_label: defaults::CLOSE_LABEL.to_string(),
        }
    }
}

impl NotificationConfig {
    /// Delay applied by `show` when no duration is given.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }

    /// Delay applied by the severity shortcuts (`success`, `error`, ...).
    #[must_use]
    pub fn duration_for(&self, severity: Severity) -> Duration {
        let millis = match severity {
            Severity::Success => self.success_duration_ms,
            Severity::Error => self.error_duration_ms,
            Severity::Warning => self.warning_duration_ms,
            Severity::Info => self.info_duration_ms,
        };
        Duration::from_millis(millis)
    }
}

/// Viewport corner the toast overlay is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    TopStart,
    TopEnd,
    BottomStart,
    #[default]
    BottomEnd,
}

impl Placement {
    /// Bootstrap position utilities for this corner.
    #[must_use]
    pub fn position_classes(self) -> &'static str {
        match self {
            Placement::TopStart => "top-0 start-0",
            Placement::TopEnd => "top-0 end-0",
            Placement::BottomStart => "bottom-0 start-0",
            Placement::BottomEnd => "bottom-0 end-0",
        }
    }
}

/// Parses a TOML configuration document.
///
/// # Errors
///
/// Returns [`Error::Config`](crate::error::Error::Config) when the document is
/// not valid TOML or a field has the wrong type.
pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Loads the configuration embedded in the page, falling back to defaults.
///
/// An absent element yields the defaults silently; an invalid document is
/// logged and also yields the defaults.
pub fn load_from_page<P: RenderPort>(port: &P) -> Config {
    let Some(element) = port.element_by_id(defaults::CONFIG_DATA_ID) else {
        return Config::default();
    };
    match from_toml_str(&port.text_content(&element)) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring page configuration: {err}");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryDocument;

    #[test]
    fn default_config_matches_documented_durations() {
        let config = NotificationConfig::default();
        assert_eq!(config.default_duration(), Duration::from_millis(5000));
        assert_eq!(config.duration_for(Severity::Success), Duration::from_millis(5000));
        assert_eq!(config.duration_for(Severity::Error), Duration::from_millis(7000));
        assert_eq!(config.duration_for(Severity::Warning), Duration::from_millis(6000));
        assert_eq!(config.duration_for(Severity::Info), Duration::from_millis(5000));
        assert_eq!(config.placement, Placement::BottomEnd);
        assert_eq!(config.close_label, "Fechar");
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = from_toml_str("[notifications]\nerror_duration_ms = 0\n").unwrap();
        assert_eq!(config.notifications.error_duration_ms, 0);
        assert_eq!(config.notifications.warning_duration_ms, defaults::WARNING_DURATION_MS);
        assert_eq!(config.notifications.z_index, defaults::CONTAINER_Z_INDEX);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = from_toml_str("not = valid = toml").unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
    }

    #[test]
    fn unknown_placement_is_rejected() {
        assert!(from_toml_str("[notifications]\nplacement = \"middle\"").is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = Config::default();
        config.notifications.placement = Placement::TopEnd;
        let content = toml::to_string(&config).unwrap();
        assert!(content.contains("placement = \"top-end\""));
        assert_eq!(from_toml_str(&content).unwrap(), config);
    }

    #[test]
    fn load_from_page_reads_embedded_document() {
        let doc = MemoryDocument::new();
        let script = doc.append_new(&doc.body_id(), "script", &[("id", defaults::CONFIG_DATA_ID)]);
        doc.write_text(&script, "[notifications]\nz_index = 1080\n");

        let config = load_from_page(&doc);
        assert_eq!(config.notifications.z_index, 1080);
    }

    #[test]
    fn load_from_page_falls_back_on_invalid_document() {
        let doc = MemoryDocument::new();
        let script = doc.append_new(&doc.body_id(), "script", &[("id", defaults::CONFIG_DATA_ID)]);
        doc.write_text(&script, "z_index = = 3");

        assert_eq!(load_from_page(&doc), Config::default());
    }

    #[test]
    fn load_from_page_without_element_is_default() {
        assert_eq!(load_from_page(&MemoryDocument::new()), Config::default());
    }
}
