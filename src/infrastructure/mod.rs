// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the
//! [`RenderPort`](crate::application::port::RenderPort) trait.
//!
//! # Available Adapters
//!
//! - [`memory_dom`]: Headless document with a virtual clock (tests, benches)
//! - `web`: Browser document via `web-sys` (requires the `web` feature)

#[cfg(any(feature = "web", test))]
mod listeners;
pub mod memory_dom;
#[cfg(feature = "web")]
pub mod web;

// Re-export main types for convenience
pub use memory_dom::{MemoryDocument, NodeId};
#[cfg(feature = "web")]
pub use web::WebDocument;
