// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! UI components only talk to these traits, so their logic runs the same in a
//! browser and in the in-memory document used by tests.
//!
//! # Available Ports
//!
//! - [`render`]: Document manipulation, event listeners and timers
//!
//! # Design Notes
//!
//! - Traits are not `Send`: the page runs on a single UI thread
//! - Fallible methods return the crate [`Result`](crate::error::Result)
//! - Callbacks are deferred by the host, never run re-entrantly

pub mod render;

pub use render::{Listener, RenderPort, TimerCallback};
