// SPDX-License-Identifier: MPL-2.0
//! Page bootstrap.
//!
//! A [`Page`] is constructed once when the document is ready. It owns the
//! notification center (replaying the server's flash messages) and, when the
//! sign-up form is on the page, the role/license toggler. Page scripts reach
//! the center through [`Page::notifications`] instead of a global singleton.

use crate::application::port::RenderPort;
use crate::config::defaults::{
    LICENSE_FIELD_ID, LICENSE_INPUT_ID, TUTOR_RADIO_ID, VETERINARIAN_RADIO_ID,
};
use crate::config::{self, Config};
use crate::error::Result;
use crate::ui::notifications::NotificationCenter;
use crate::ui::registration::RoleFieldToggler;

/// Components running on the current page.
pub struct Page<P: RenderPort> {
    port: P,
    notifications: NotificationCenter<P>,
    registration: Option<RoleFieldToggler<P>>,
}

impl<P: RenderPort> Page<P> {
    /// Bootstraps the page with the configuration embedded in it, if any.
    pub fn bootstrap(port: P) -> Self {
        let config = config::load_from_page(&port);
        Self::with_config(port, config)
    }

    /// Bootstraps the page with an explicit configuration.
    ///
    /// Never fails: notification problems are logged and the page keeps
    /// working without toasts. The sign-up form is enabled when present.
    pub fn with_config(port: P, config: Config) -> Self {
        let notifications = NotificationCenter::new(port.clone(), config.notifications);
        let shown = notifications.initialize();
        let mut page = Self {
            port,
            notifications,
            registration: None,
        };
        page.detect_registration_form();
        log::debug!("Page ready, {shown} flash message(s) shown");
        page
    }

    /// Enables the sign-up form if the page carries any of its elements.
    ///
    /// A form missing some of its elements is logged and left untouched.
    pub fn detect_registration_form(&mut self) {
        let present = [
            TUTOR_RADIO_ID,
            VETERINARIAN_RADIO_ID,
            LICENSE_FIELD_ID,
            LICENSE_INPUT_ID,
        ]
        .iter()
        .any(|id| self.port.element_by_id(id).is_some());
        if !present {
            return;
        }
        if let Err(err) = self.attach_registration_form() {
            log::error!("Registration form not enabled: {err}");
        }
    }

    /// Enables the role-dependent license field of the sign-up form.
    ///
    /// Calling it again keeps the existing toggler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`](crate::error::Error::MissingElement)
    /// when the page lacks the form markup.
    pub fn attach_registration_form(&mut self) -> Result<&RoleFieldToggler<P>> {
        let toggler = match self.registration.take() {
            Some(existing) => existing,
            None => RoleFieldToggler::install(self.port.clone())?,
        };
        Ok(self.registration.insert(toggler))
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter<P> {
        &self.notifications
    }

    #[must_use]
    pub fn registration(&self) -> Option<&RoleFieldToggler<P>> {
        self.registration.as_ref()
    }
}
