// SPDX-License-Identifier: MPL-2.0
//! Rendering port definition.
//!
//! This module defines the [`RenderPort`] trait, the small set of document
//! capabilities the form toggler and the notification center need. The
//! browser adapter wraps `web-sys`; the in-memory adapter backs tests and
//! headless rendering.
//!
//! # Design Notes
//!
//! - Handles are cheap clones (`Copy` ids in memory, JS references in the browser)
//! - Methods take `&self`: hosts use interior mutability, mirroring the DOM
//! - Callbacks are `'static` and run later, on the same thread, one at a time
//! - Listeners must not be invoked while the host holds internal borrows, so a
//!   listener may freely call back into the port

use crate::error::Result;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Event listener callback. May fire any number of times.
pub type Listener = Rc<dyn Fn()>;

/// Deferred callback run once by [`RenderPort::schedule_timer`].
pub type TimerCallback = Box<dyn FnOnce()>;

// =============================================================================
// RenderPort Trait
// =============================================================================

/// Port for document manipulation.
///
/// # Example
///
/// ```
/// use vetconecta_ui::application::port::RenderPort;
/// use vetconecta_ui::infrastructure::MemoryDocument;
///
/// let doc = MemoryDocument::new();
/// let body = doc.body().unwrap();
/// let note = doc.create_element("p").unwrap();
/// doc.set_text(&note, "<b>not bold</b>").unwrap();
/// doc.append_child(&body, &note).unwrap();
///
/// assert_eq!(doc.text_content(&note), "<b>not bold</b>");
/// ```
pub trait RenderPort: Clone + 'static {
    /// Handle to an element owned by the host document.
    type Element: Clone + PartialEq + fmt::Debug + 'static;

    /// Looks up an element attached to the document by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Returns the document body, or `None` before the body exists.
    fn body(&self) -> Option<Self::Element>;

    /// Creates a detached element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) if the host
    /// rejects the tag name.
    fn create_element(&self, tag: &str) -> Result<Self::Element>;

    /// Sets an attribute, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) if the host
    /// rejects the attribute name.
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> Result<()>;

    /// Removes an attribute. Removing an absent attribute is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) on host failure.
    fn remove_attribute(&self, element: &Self::Element, name: &str) -> Result<()>;

    /// Returns an attribute value.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Sets an inline style property (e.g. `display`, `z-index`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) if the element
    /// has no inline style or the host rejects the value.
    fn set_style(&self, element: &Self::Element, property: &str, value: &str) -> Result<()>;

    /// Returns an inline style property, or `None` when unset.
    fn style(&self, element: &Self::Element, property: &str) -> Option<String>;

    /// Replaces the element's children with a single inert text node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) on host failure.
    fn set_text(&self, element: &Self::Element, text: &str) -> Result<()>;

    /// Returns the concatenated text of the element and its descendants.
    fn text_content(&self, element: &Self::Element) -> String;

    /// Returns whether a checkbox or radio input is checked.
    fn is_checked(&self, element: &Self::Element) -> bool;

    /// Appends `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) on host failure.
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;

    /// Detaches the element from its parent. Detaching twice is a no-op.
    fn remove(&self, element: &Self::Element);

    /// Registers `listener` for `event` (e.g. `change`, `click`) on the element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) on host failure.
    fn add_event_listener(&self, element: &Self::Element, event: &str, listener: Listener)
        -> Result<()>;

    /// Runs `callback` once after `delay`, without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) if the host
    /// cannot schedule timers.
    fn schedule_timer(&self, delay: Duration, callback: TimerCallback) -> Result<()>;

    /// Milliseconds since the Unix epoch, as seen by the host clock.
    fn now_millis(&self) -> u64;
}
