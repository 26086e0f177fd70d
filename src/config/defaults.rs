// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! and for the element identifiers the server-rendered pages provide.
//!
//! # Categories
//!
//! - **Durations**: Toast auto-dismiss delays per severity
//! - **Container**: Toast overlay stacking and labels
//! - **DOM Contract**: Element ids shared with the page templates

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Auto-dismiss delay used by `show` when no duration is given (in ms).
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Auto-dismiss delay for success toasts (in ms).
pub const SUCCESS_DURATION_MS: u64 = 5000;

/// Auto-dismiss delay for error toasts (in ms).
pub const ERROR_DURATION_MS: u64 = 7000;

/// Auto-dismiss delay for warning toasts (in ms).
pub const WARNING_DURATION_MS: u64 = 6000;

/// Auto-dismiss delay for info toasts (in ms).
pub const INFO_DURATION_MS: u64 = 5000;

// ==========================================================================
// Container Defaults
// ==========================================================================

/// Stacking order of the toast overlay, above modals and navbars.
pub const CONTAINER_Z_INDEX: u32 = 9999;

/// Accessible label of each toast's close button.
pub const CLOSE_LABEL: &str = "Fechar";

// ==========================================================================
// DOM Contract
// ==========================================================================

/// Toast overlay container, reused when the template already renders it.
pub const TOAST_CONTAINER_ID: &str = "toast-container";

/// Script element holding the JSON flash messages.
pub const FLASH_DATA_ID: &str = "mensagens-data";

/// Script element holding the optional TOML configuration.
pub const CONFIG_DATA_ID: &str = "toast-config";

/// Radio input selecting the tutor role.
pub const TUTOR_RADIO_ID: &str = "tutor";

/// Radio input selecting the veterinarian role.
pub const VETERINARIAN_RADIO_ID: &str = "veterinario";

/// Wrapper around the license input, toggled through its inline display.
pub const LICENSE_FIELD_ID: &str = "crmv-field";

/// License number (CRMV) input whose `required` attribute is toggled.
pub const LICENSE_INPUT_ID: &str = "crmv";
