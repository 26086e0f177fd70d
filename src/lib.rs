// SPDX-License-Identifier: MPL-2.0
//! `vetconecta_ui` drives the interactive parts of the VetConecta pages.
//!
//! It provides the toast notification system (including replay of the
//! server's flash messages) and the role-dependent license field of the
//! sign-up form. Components talk to the document through a small rendering
//! port, so they run in the browser (`web` feature) and headlessly in tests.

#![doc(html_root_url = "https://docs.rs/vetconecta_ui/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
#[cfg(feature = "web")]
pub mod web_api;

pub use app::Page;
