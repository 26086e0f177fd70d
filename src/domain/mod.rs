// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no dependency on a rendering host.
//!
//! # Modules
//!
//! - [`registration`]: Registration form types ([`RoleSelection`](registration::RoleSelection))

pub mod registration;
