// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`NotificationCenter`] owns the toast overlay container, mounts one
//! [`Toast`] per notification and removes it when the toast is hidden. The
//! operation set is also exposed through the [`Notifier`] trait so callers
//! such as the flash replay can be tested against a recording double.

use super::flash::FlashQueue;
use super::notification::{Notification, Severity};
use super::toast::Toast;
use crate::application::port::RenderPort;
use crate::config::defaults::TOAST_CONTAINER_ID;
use crate::config::NotificationConfig;
use crate::error::{Error, Result};
use crate::ui::design_tokens::container;
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Operations for showing notifications.
pub trait Notifier {
    /// Controller returned for a displayed notification.
    type Handle;

    /// Displays a notification. A notification without a duration uses the
    /// notifier's default delay.
    ///
    /// Returns `None` when nothing could be displayed; the failure is logged.
    fn push(&self, notification: Notification) -> Option<Self::Handle>;

    /// Delay used by the severity shortcuts when the caller gives none.
    fn duration_for(&self, severity: Severity) -> Duration;

    /// Displays `message`. `None` uses the default delay, `Some(Duration::ZERO)`
    /// keeps the toast until the user closes it.
    fn show(
        &self,
        message: &str,
        severity: Severity,
        duration: Option<Duration>,
    ) -> Option<Self::Handle> {
        let notification = Notification::new(severity, message);
        match duration {
            Some(duration) => self.push(notification.with_duration(duration)),
            None => self.push(notification),
        }
    }

    fn success(&self, message: &str, duration: Option<Duration>) -> Option<Self::Handle> {
        shortcut(self, Notification::success(message), duration)
    }

    fn error(&self, message: &str, duration: Option<Duration>) -> Option<Self::Handle> {
        shortcut(self, Notification::error(message), duration)
    }

    fn warning(&self, message: &str, duration: Option<Duration>) -> Option<Self::Handle> {
        shortcut(self, Notification::warning(message), duration)
    }

    fn info(&self, message: &str, duration: Option<Duration>) -> Option<Self::Handle> {
        shortcut(self, Notification::info(message), duration)
    }
}

fn shortcut<N: Notifier + ?Sized>(
    notifier: &N,
    notification: Notification,
    duration: Option<Duration>,
) -> Option<N::Handle> {
    let duration = duration.unwrap_or_else(|| notifier.duration_for(notification.severity()));
    notifier.push(notification.with_duration(duration))
}

/// Owns the toast overlay and every toast shown in it.
pub struct NotificationCenter<P: RenderPort> {
    port: P,
    config: NotificationConfig,
    /// Overlay element, resolved on first use.
    container: RefCell<Option<P::Element>>,
    flash_drained: Cell<bool>,
}

impl<P: RenderPort> NotificationCenter<P> {
    /// Creates a center. Nothing touches the document until first use.
    pub fn new(port: P, config: NotificationConfig) -> Self {
        Self {
            port,
            config,
            container: RefCell::new(None),
            flash_drained: Cell::new(false),
        }
    }

    /// Resolves the container and replays the page's flash messages.
    ///
    /// Returns the number of flash toasts displayed. Failures are logged,
    /// never propagated: the page must render without notifications.
    pub fn initialize(&self) -> usize {
        if let Err(err) = self.container() {
            log::error!("Toast container not initialized: {err}");
        }
        self.drain_flash_queue()
    }

    /// Replays the page's flash messages. Only the first call reads them.
    pub fn drain_flash_queue(&self) -> usize {
        if self.flash_drained.replace(true) {
            return 0;
        }
        FlashQueue::from_page(&self.port).map_or(0, |queue| queue.replay(self))
    }

    /// Returns the overlay, reusing the page's `#toast-container` when present
    /// and creating it otherwise. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingContainer`] when the document has no body yet,
    /// or a render error if the host rejects the new element.
    pub fn container(&self) -> Result<P::Element> {
        if let Some(existing) = self.container.borrow().as_ref() {
            return Ok(existing.clone());
        }
        let element = match self.port.element_by_id(TOAST_CONTAINER_ID) {
            Some(existing) => existing,
            None => self.create_container()?,
        };
        *self.container.borrow_mut() = Some(element.clone());
        Ok(element)
    }

    fn create_container(&self) -> Result<P::Element> {
        let body = self.port.body().ok_or(Error::MissingContainer)?;
        let element = self.port.create_element("div")?;
        let class = format!(
            "{} {} {}",
            container::BASE,
            self.config.placement.position_classes(),
            container::PADDING
        );
        self.port.set_attribute(&element, "id", TOAST_CONTAINER_ID)?;
        self.port.set_attribute(&element, "class", &class)?;
        self.port
            .set_style(&element, "z-index", &self.config.z_index.to_string())?;
        self.port.append_child(&body, &element)?;
        log::debug!("Created #{TOAST_CONTAINER_ID}");
        Ok(element)
    }

    fn mount(
        &self,
        container: &P::Element,
        notification: &Notification,
        duration: Duration,
    ) -> Result<Toast<P>> {
        let toast = Toast::build(
            &self.port,
            notification.text(),
            notification.severity(),
            duration,
            &self.config.close_label,
        )?;
        self.port.append_child(container, toast.element())?;

        let port = self.port.clone();
        let element = toast.element().clone();
        let id = toast.id().clone();
        toast.on_hidden(move || {
            port.remove(&element);
            log::debug!("Removed toast {id}");
        });

        if let Err(err) = toast.show() {
            toast.hide();
            return Err(err);
        }
        Ok(toast)
    }

    #[must_use]
    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Whether the page's flash messages have been consumed.
    #[must_use]
    pub fn flash_drained(&self) -> bool {
        self.flash_drained.get()
    }
}

impl<P: RenderPort> Notifier for NotificationCenter<P> {
    type Handle = Toast<P>;

    fn push(&self, notification: Notification) -> Option<Toast<P>> {
        let container = match self.container() {
            Ok(container) => container,
            Err(err) => {
                log::error!("Toast container not initialized: {err}");
                return None;
            }
        };
        let duration = notification
            .duration()
            .unwrap_or_else(|| self.config.default_duration());
        match self.mount(&container, &notification, duration) {
            Ok(toast) => Some(toast),
            Err(err) => {
                log::error!("Failed to show toast: {err}");
                None
            }
        }
    }

    fn duration_for(&self, severity: Severity) -> Duration {
        self.config.duration_for(severity)
    }
}
