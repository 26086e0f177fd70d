// SPDX-License-Identifier: MPL-2.0
//! Browser document adapter (requires the `web` feature).
//!
//! Wraps `web-sys` so the UI components run against the live page.
//!
//! # Design Notes
//!
//! - Event listener closures are owned by the document and released, with
//!   the browser listener, when their element or an ancestor is removed
//! - Timers use `setTimeout` with one-shot closures freed after they run

use super::listeners::ListenerRegistry;
use crate::application::port::{Listener, RenderPort, TimerCallback};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, Node, Window,
};

type Listeners = ListenerRegistry<Element, Closure<dyn Fn()>>;

fn js_error(context: &str, err: &JsValue) -> Error {
    Error::Render(format!("{context}: {err:?}"))
}

/// The page's `window.document`.
#[derive(Clone)]
pub struct WebDocument {
    window: Window,
    document: Document,
    listeners: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for WebDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDocument")
            .field("url", &self.document.url().ok())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl WebDocument {
    /// Binds to the global window and its document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] outside a browser window context (e.g. in a
    /// worker).
    pub fn from_window() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| Error::Render("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Render("window has no document".to_string()))?;
        Ok(Self {
            window,
            document,
            listeners: Rc::default(),
        })
    }

    /// Whether the parser is still building the document.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    /// Runs `callback` now if the document is parsed, or on `DOMContentLoaded`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the listener cannot be registered.
    pub fn when_ready(&self, callback: TimerCallback) -> Result<()> {
        if !self.is_loading() {
            callback();
            return Ok(());
        }
        let on_ready = Closure::once_into_js(move || callback());
        self.document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .map_err(|err| js_error("DOMContentLoaded", &err))
    }
}

impl RenderPort for WebDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn create_element(&self, tag: &str) -> Result<Element> {
        self.document
            .create_element(tag)
            .map_err(|err| js_error("createElement", &err))
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<()> {
        element
            .set_attribute(name, value)
            .map_err(|err| js_error("setAttribute", &err))
    }

    fn remove_attribute(&self, element: &Element, name: &str) -> Result<()> {
        element
            .remove_attribute(name)
            .map_err(|err| js_error("removeAttribute", &err))
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) -> Result<()> {
        let html = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| Error::Render(format!("<{}> has no inline style", element.tag_name())))?;
        html.style()
            .set_property(property, value)
            .map_err(|err| js_error("style.setProperty", &err))
    }

    fn style(&self, element: &Element, property: &str) -> Option<String> {
        element
            .dyn_ref::<HtmlElement>()
            .and_then(|html| html.style().get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn set_text(&self, element: &Element, text: &str) -> Result<()> {
        element.set_text_content(Some(text));
        Ok(())
    }

    fn text_content(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn is_checked(&self, element: &Element) -> bool {
        element
            .dyn_ref::<HtmlInputElement>()
            .is_some_and(HtmlInputElement::checked)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|err| js_error("appendChild", &err))
    }

    fn remove(&self, element: &Element) {
        element.remove();
        let released = self.listeners.borrow_mut().release(|target| {
            let target: &Node = target;
            element.contains(Some(target))
        });
        // A closure released from inside its own call is freed when it returns.
        for entry in released {
            let callback = entry.handle.as_ref().unchecked_ref();
            let _ = entry
                .element
                .remove_event_listener_with_callback(&entry.event, callback);
        }
    }

    fn add_event_listener(&self, element: &Element, event: &str, listener: Listener) -> Result<()> {
        let closure = Closure::<dyn Fn()>::new(move || listener());
        element
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| js_error("addEventListener", &err))?;
        self.listeners
            .borrow_mut()
            .register(element.clone(), event, closure);
        Ok(())
    }

    fn schedule_timer(&self, delay: Duration, callback: TimerCallback) -> Result<()> {
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let on_timeout = Closure::once_into_js(move || callback());
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.unchecked_ref(),
                millis,
            )
            .map(|_| ())
            .map_err(|err| js_error("setTimeout", &err))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
