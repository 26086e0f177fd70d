// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components render through the [`RenderPort`](crate::application::port::RenderPort)
//! and never touch a browser API directly.
//!
//! # Components
//!
//! - [`registration`] - Role-dependent license field on the sign-up form
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Stylesheet class names (Bootstrap, Bootstrap Icons)

pub mod design_tokens;
pub mod notifications;
pub mod registration;
