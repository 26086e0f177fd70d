// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the UI components and their hosts.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - UI components use application layer ports only
//!
//! # Example
//!
//! ```ignore
//! use vetconecta_ui::application::port::RenderPort;
//!
//! // Infrastructure implements the port trait
//! struct CanvasDocument { /* ... */ }
//! impl RenderPort for CanvasDocument { /* ... */ }
//! ```

pub mod port;
