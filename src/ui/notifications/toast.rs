// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! A [`Toast`] owns one element subtree built through the
//! [`RenderPort`] and drives its lifecycle:
//!
//! ```text
//! Created --show()--> Shown --close click / auto-hide timer--> Hidden
//! ```
//!
//! `Hidden` is terminal. Hidden listeners fire exactly once, on the first
//! transition into it; later clicks or a late timer are no-ops.

use super::notification::{Severity, WidgetId};
use crate::application::port::RenderPort;
use crate::error::Result;
use crate::ui::design_tokens::{icon, toast};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Lifecycle state of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    /// Built and attached, not yet visible.
    Created,
    /// Visible; may be waiting on its auto-hide timer.
    Shown,
    /// Closed by the user or expired. Terminal.
    Hidden,
}

type HiddenListener = Box<dyn FnOnce()>;

struct ToastInner<P: RenderPort> {
    port: P,
    id: WidgetId,
    element: P::Element,
    severity: Severity,
    /// Root classes without the visibility class.
    class: String,
    auto_hide: Option<Duration>,
    state: Cell<ToastState>,
    hidden_listeners: RefCell<Vec<HiddenListener>>,
}

/// Controller of one rendered toast. Clones share the same widget.
pub struct Toast<P: RenderPort> {
    inner: Rc<ToastInner<P>>,
}

impl<P: RenderPort> Clone for Toast<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: RenderPort> std::fmt::Debug for Toast<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.inner.id)
            .field("severity", &self.inner.severity)
            .field("state", &self.inner.state.get())
            .finish()
    }
}

impl<P: RenderPort> Toast<P> {
    /// Builds the toast markup as a detached subtree.
    ///
    /// The message is written as a text node, so markup in it is displayed
    /// literally. A zero `duration` disables auto-hide.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) if the host
    /// rejects any element or attribute.
    pub fn build(
        port: &P,
        message: &str,
        severity: Severity,
        duration: Duration,
        close_label: &str,
    ) -> Result<Self> {
        let id = WidgetId::generate(port.now_millis());
        let class = format!("{} {}", toast::BASE, severity.background_class());

        let root = port.create_element("div")?;
        port.set_attribute(&root, "class", &class)?;
        port.set_attribute(&root, "role", "alert")?;
        port.set_attribute(&root, "aria-live", "assertive")?;
        port.set_attribute(&root, "aria-atomic", "true")?;
        port.set_attribute(&root, "id", id.as_str())?;

        let layout = port.create_element("div")?;
        port.set_attribute(&layout, "class", toast::LAYOUT)?;

        let body = port.create_element("div")?;
        port.set_attribute(&body, "class", toast::BODY)?;

        let glyph = port.create_element("i")?;
        let glyph_class = format!("{} {} {}", icon::BASE, severity.icon_class(), icon::SPACING);
        port.set_attribute(&glyph, "class", &glyph_class)?;

        let title = port.create_element("span")?;
        port.set_attribute(&title, "class", toast::VISUALLY_HIDDEN)?;
        port.set_text(&title, &format!("{}: ", severity.title()))?;

        let text = port.create_element("span")?;
        port.set_attribute(&text, "class", toast::MESSAGE)?;
        port.set_text(&text, message)?;

        let close = port.create_element("button")?;
        port.set_attribute(&close, "type", "button")?;
        port.set_attribute(&close, "class", toast::CLOSE_BUTTON)?;
        port.set_attribute(&close, "aria-label", close_label)?;

        port.append_child(&body, &glyph)?;
        port.append_child(&body, &title)?;
        port.append_child(&body, &text)?;
        port.append_child(&layout, &body)?;
        port.append_child(&layout, &close)?;
        port.append_child(&root, &layout)?;

        let toast = Self {
            inner: Rc::new(ToastInner {
                port: port.clone(),
                id,
                element: root,
                severity,
                class,
                auto_hide: (!duration.is_zero()).then_some(duration),
                state: Cell::new(ToastState::Created),
                hidden_listeners: RefCell::new(Vec::new()),
            }),
        };

        let on_close = toast.clone();
        port.add_event_listener(&close, "click", Rc::new(move || on_close.hide()))?;

        Ok(toast)
    }

    /// Makes the toast visible and arms its auto-hide timer.
    ///
    /// Only the first call on a `Created` toast has an effect.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) if the host
    /// cannot update the element or schedule the timer.
    pub fn show(&self) -> Result<()> {
        if self.inner.state.get() != ToastState::Created {
            return Ok(());
        }
        let visible = format!("{} {}", self.inner.class, toast::SHOW);
        self.inner
            .port
            .set_attribute(&self.inner.element, "class", &visible)?;
        self.inner.state.set(ToastState::Shown);

        if let Some(delay) = self.inner.auto_hide {
            let expired = self.clone();
            self.inner
                .port
                .schedule_timer(delay, Box::new(move || expired.hide()))?;
        }
        Ok(())
    }

    /// Hides the toast and fires its hidden listeners. No-op once hidden.
    pub fn hide(&self) {
        if self.inner.state.replace(ToastState::Hidden) == ToastState::Hidden {
            return;
        }
        if let Err(err) = self
            .inner
            .port
            .set_attribute(&self.inner.element, "class", &self.inner.class)
        {
            log::error!("Failed to hide toast {}: {err}", self.inner.id);
        }
        let listeners = std::mem::take(&mut *self.inner.hidden_listeners.borrow_mut());
        for listener in listeners {
            listener();
        }
    }

    /// Registers a one-time listener for the transition to `Hidden`.
    ///
    /// Registering on an already hidden toast runs the listener immediately.
    pub fn on_hidden(&self, listener: impl FnOnce() + 'static) {
        if self.inner.state.get() == ToastState::Hidden {
            listener();
        } else {
            self.inner
                .hidden_listeners
                .borrow_mut()
                .push(Box::new(listener));
        }
    }

    #[must_use]
    pub fn id(&self) -> &WidgetId {
        &self.inner.id
    }

    /// Root element of the widget.
    #[must_use]
    pub fn element(&self) -> &P::Element {
        &self.inner.element
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.inner.severity
    }

    #[must_use]
    pub fn state(&self) -> ToastState {
        self.inner.state.get()
    }

    /// Auto-hide delay, or `None` when only the user can close the toast.
    #[must_use]
    pub fn auto_hide(&self) -> Option<Duration> {
        self.inner.auto_hide
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryDocument;

    fn build(
        doc: &MemoryDocument,
        message: &str,
        severity: Severity,
        millis: u64,
    ) -> Toast<MemoryDocument> {
        Toast::build(doc, message, severity, Duration::from_millis(millis), "Fechar").unwrap()
    }

    #[test]
    fn markup_has_bootstrap_structure() {
        let doc = MemoryDocument::new();
        let toast = build(&doc, "Salvo", Severity::Success, 5000);
        let root = *toast.element();

        assert_eq!(doc.attribute(&root, "class").as_deref(), Some("toast text-bg-success"));
        assert_eq!(doc.attribute(&root, "role").as_deref(), Some("alert"));
        assert_eq!(doc.attribute(&root, "aria-live").as_deref(), Some("assertive"));
        assert_eq!(doc.attribute(&root, "id").as_deref(), Some(toast.id().as_str()));

        let icons = doc.find_by_class(&root, "bi");
        assert_eq!(icons.len(), 1);
        assert!(doc.has_class(&icons[0], "bi-check-circle-fill"));

        let close = doc.find_by_class(&root, "btn-close");
        assert_eq!(close.len(), 1);
        assert_eq!(doc.attribute(&close[0], "aria-label").as_deref(), Some("Fechar"));
        // Closing is handled here, not by Bootstrap's delegated dismiss.
        assert!(doc.attribute(&close[0], "data-bs-dismiss").is_none());
    }

    #[test]
    fn message_is_rendered_as_text() {
        let doc = MemoryDocument::new();
        let toast = build(&doc, "<img src=x onerror=alert(1)>", Severity::Info, 0);
        let root = *toast.element();
        let message = doc.find_by_class(&root, "toast-message")[0];

        assert_eq!(doc.text_content(&message), "<img src=x onerror=alert(1)>");
        assert!(doc.children(&message).is_empty());
        assert!(doc
            .outer_html(&root)
            .contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn severity_title_is_announced_before_the_message() {
        let doc = MemoryDocument::new();
        let toast = build(&doc, "CRMV inválido", Severity::Error, 0);
        assert_eq!(doc.text_content(toast.element()), "Erro: CRMV inválido");
    }

    #[test]
    fn show_adds_visibility_class_once() {
        let doc = MemoryDocument::new();
        let toast = build(&doc, "x", Severity::Warning, 100);
        assert_eq!(toast.state(), ToastState::Created);

        toast.show().unwrap();
        toast.show().unwrap();

        assert_eq!(toast.state(), ToastState::Shown);
        assert!(doc.has_class(toast.element(), "show"));
        assert_eq!(doc.pending_timers(), 1);
    }

    #[test]
    fn zero_duration_disables_auto_hide() {
        let doc = MemoryDocument::new();
        let toast = build(&doc, "x", Severity::Error, 0);
        toast.show().unwrap();

        assert_eq!(toast.auto_hide(), None);
        assert_eq!(doc.pending_timers(), 0);
        doc.advance(Duration::from_secs(3600));
        assert_eq!(toast.state(), ToastState::Shown);
    }

    #[test]
    fn timer_hides_toast() {
        let doc = MemoryDocument::new();
        let toast = build(&doc, "x", Severity::Success, 100);
        toast.show().unwrap();

        doc.advance(Duration::from_millis(99));
        assert_eq!(toast.state(), ToastState::Shown);
        doc.advance(Duration::from_millis(1));
        assert_eq!(toast.state(), ToastState::Hidden);
        assert!(!doc.has_class(toast.element(), "show"));
    }

    #[test]
    fn close_click_hides_toast() {
        let doc = MemoryDocument::new();
        let toast = build(&doc, "x", Severity::Error, 0);
        toast.show().unwrap();

        let close = doc.find_by_class(toast.element(), "btn-close")[0];
        doc.click(&close);
        assert_eq!(toast.state(), ToastState::Hidden);
    }

    #[test]
    fn hidden_listeners_fire_exactly_once() {
        let doc = MemoryDocument::new();
        let toast = build(&doc, "x", Severity::Info, 100);
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        toast.on_hidden(move || counter.set(counter.get() + 1));
        toast.show().unwrap();

        let close = doc.find_by_class(toast.element(), "btn-close")[0];
        doc.click(&close);
        doc.click(&close);
        doc.advance(Duration::from_millis(500));

        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn hidden_toast_cannot_be_shown_again() {
        let doc = MemoryDocument::new();
        let toast = build(&doc, "x", Severity::Info, 0);
        toast.show().unwrap();
        toast.hide();
        toast.show().unwrap();

        assert_eq!(toast.state(), ToastState::Hidden);
        assert!(!doc.has_class(toast.element(), "show"));
    }

    #[test]
    fn on_hidden_after_hide_runs_immediately() {
        let doc = MemoryDocument::new();
        let toast = build(&doc, "x", Severity::Info, 0);
        toast.hide();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        toast.on_hidden(move || flag.set(true));
        assert!(fired.get());
    }
}
