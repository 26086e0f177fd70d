// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in a corner overlay to report the outcome
//! of an action (saved profile, invalid CRMV, ...) without blocking the page.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`center`] - `NotificationCenter` owning the overlay and toast lifecycle
//! - [`toast`] - Toast widget markup and show/hide state machine
//! - [`flash`] - Server-rendered flash messages replayed at startup
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use vetconecta_ui::config::NotificationConfig;
//! use vetconecta_ui::infrastructure::MemoryDocument;
//! use vetconecta_ui::ui::notifications::{NotificationCenter, Notifier, Severity};
//!
//! let doc = MemoryDocument::new();
//! let center = NotificationCenter::new(doc.clone(), NotificationConfig::default());
//! center.initialize();
//!
//! let toast = center.success("Cadastro realizado", None).unwrap();
//! doc.advance(Duration::from_secs(5));
//! assert!(!doc.is_attached(toast.element()));
//! ```
//!
//! # Design Considerations
//!
//! - Durations: 5s for success/info, 6s for warnings, 7s for errors; zero
//!   keeps the toast until the user closes it
//! - Position: bottom-right corner by default, above every other layer
//! - Accessibility: `role="alert"`, assertive live region, labelled close button

pub mod center;
pub mod flash;
pub mod notification;
pub mod toast;

pub use center::{NotificationCenter, Notifier};
pub use flash::{FlashEntry, FlashQueue};
pub use notification::{Notification, Severity, WidgetId};
pub use toast::{Toast, ToastState};
