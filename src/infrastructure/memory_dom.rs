// SPDX-License-Identifier: MPL-2.0
//! In-memory document implementing [`RenderPort`].
//!
//! `MemoryDocument` models just enough of a browser document for the form
//! toggler and the notification center: an element tree with ids, attributes,
//! inline styles, text and `checked` state, event listeners, and a virtual
//! clock whose timers fire only when [`MemoryDocument::advance`] is called.
//!
//! It backs the unit and integration tests and can render pages headlessly
//! through [`MemoryDocument::outer_html`].
//!
//! Nodes live in an append-only arena: a [`NodeId`] is never reused, so a
//! handle to a removed element keeps answering as detached. Removal drops the
//! subtree's listeners but not its node slots, so long-running users should
//! start a fresh document per page.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use vetconecta_ui::infrastructure::MemoryDocument;
//! use vetconecta_ui::application::port::RenderPort;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let doc = MemoryDocument::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&fired);
//! doc.schedule_timer(Duration::from_millis(100), Box::new(move || flag.set(true))).unwrap();
//!
//! doc.advance(Duration::from_millis(99));
//! assert!(!fired.get());
//! doc.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

use crate::application::port::{Listener, RenderPort, TimerCallback};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    checked: bool,
    listeners: Vec<(String, Listener)>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            styles: Vec::new(),
            text: None,
            children: Vec::new(),
            parent: None,
            checked: false,
            listeners: Vec::new(),
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

struct PendingTimer {
    due: Duration,
    seq: u64,
    callback: TimerCallback,
}

struct DocumentState {
    /// Append-only; indexed by `NodeId`.
    nodes: Vec<Node>,
    root: NodeId,
    body: Option<NodeId>,
    epoch_millis: u64,
    elapsed: Duration,
    timers: Vec<PendingTimer>,
    next_seq: u64,
}

impl DocumentState {
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn is_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.node(node).parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|child| *child != id);
        }
    }

    fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id).children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            found.push(next);
            stack.extend(self.node(next).children.iter().rev().copied());
        }
        found
    }

    fn text_of(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        if let Some(text) = &node.text {
            out.push_str(text);
        }
        for child in &node.children {
            self.text_of(*child, out);
        }
    }

    fn html_of(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        out.push('<');
        out.push_str(&node.tag);
        for (name, value) in &node.attributes {
            out.push_str(&format!(
                " {}=\"{}\"",
                name,
                html_escape::encode_double_quoted_attribute(value)
            ));
        }
        if !node.styles.is_empty() {
            let style: Vec<String> = node
                .styles
                .iter()
                .map(|(property, value)| format!("{property}: {value};"))
                .collect();
            let style = style.join(" ");
            out.push_str(&format!(
                " style=\"{}\"",
                html_escape::encode_double_quoted_attribute(&style)
            ));
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&node.tag.as_str()) {
            return;
        }
        if let Some(text) = &node.text {
            out.push_str(&html_escape::encode_text(text));
        }
        for child in &node.children {
            self.html_of(*child, out);
        }
        out.push_str(&format!("</{}>", node.tag));
    }
}

/// Headless document with a virtual clock.
///
/// Clones share the same document, like references to a browser page.
#[derive(Clone)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryDocument")
            .field("nodes", &state.nodes.len())
            .field("elapsed", &state.elapsed)
            .field("pending_timers", &state.timers.len())
            .finish()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates an empty `<html><body></body></html>` document.
    ///
    /// The clock starts at the current wall-clock time and only moves when
    /// [`advance`](Self::advance) is called.
    #[must_use]
    pub fn new() -> Self {
        let document = Self::without_body();
        {
            let mut state = document.state.borrow_mut();
            let root = state.root;
            let body = state.insert(Node::new("body"));
            state.append(root, body);
            state.body = Some(body);
        }
        document
    }

    /// Creates a document whose body has not been parsed yet.
    #[must_use]
    pub fn without_body() -> Self {
        let nodes = vec![Node::new("html")];
        let epoch_millis = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        Self {
            state: Rc::new(RefCell::new(DocumentState {
                nodes,
                root: NodeId(0),
                body: None,
                epoch_millis,
                elapsed: Duration::ZERO,
                timers: Vec::new(),
                next_seq: 0,
            })),
        }
    }

    /// Returns the `<html>` element.
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.state.borrow().root
    }

    /// Returns the body, or the root element for a document without a body.
    #[must_use]
    pub fn body_id(&self) -> NodeId {
        let state = self.state.borrow();
        state.body.unwrap_or(state.root)
    }

    /// Creates an element with the given attributes and appends it to `parent`.
    ///
    /// A `checked` attribute also sets the element's checked state.
    pub fn append_new(&self, parent: &NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let mut state = self.state.borrow_mut();
        let mut node = Node::new(tag);
        for (name, value) in attributes {
            if *name == "checked" {
                node.checked = true;
            }
            node.attributes.push(((*name).to_string(), (*value).to_string()));
        }
        let id = state.insert(node);
        state.append(*parent, id);
        id
    }

    /// Replaces the element's content with `text`.
    pub fn write_text(&self, node: &NodeId, text: &str) {
        let mut state = self.state.borrow_mut();
        let children = std::mem::take(&mut state.node_mut(*node).children);
        for child in children {
            state.node_mut(child).parent = None;
        }
        state.node_mut(*node).text = Some(text.to_string());
    }

    /// Sets the checked state without firing events, like a restored form.
    pub fn set_checked(&self, node: &NodeId, checked: bool) {
        self.state.borrow_mut().node_mut(*node).checked = checked;
    }

    /// Checks a radio input the way a user click does: unchecks the other
    /// radios sharing its `name`, then fires `change` on it.
    pub fn select_radio(&self, node: &NodeId) {
        {
            let mut state = self.state.borrow_mut();
            let group = state.node(*node).attribute("name").map(str::to_string);
            if let Some(group) = group {
                let root = state.root;
                for other in state.descendants(root) {
                    let same_group = {
                        let candidate = state.node(other);
                        candidate.attribute("type") == Some("radio")
                            && candidate.attribute("name") == Some(group.as_str())
                    };
                    if same_group {
                        state.node_mut(other).checked = false;
                    }
                }
            }
            state.node_mut(*node).checked = true;
        }
        self.dispatch(node, "change");
    }

    /// Fires `click` on the element.
    pub fn click(&self, node: &NodeId) {
        self.dispatch(node, "click");
    }

    /// Invokes every listener registered for `event` on the element, in
    /// registration order. Listeners run with no internal borrow held.
    pub fn dispatch(&self, node: &NodeId, event: &str) {
        let listeners: Vec<Listener> = self
            .state
            .borrow()
            .node(*node)
            .listeners
            .iter()
            .filter(|(name, _)| name == event)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Moves the virtual clock forward, firing due timers in order.
    ///
    /// Timers scheduled by a firing callback run in the same call when they
    /// fall due before the new time.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().elapsed + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due_index = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| (timer.due, timer.seq))
                    .map(|(index, _)| index);
                due_index.map(|index| {
                    let timer = state.timers.remove(index);
                    state.elapsed = timer.due;
                    timer.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().elapsed = target;
    }

    /// Time elapsed on the virtual clock since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.state.borrow().elapsed
    }

    /// Number of timers that have not fired yet.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    #[must_use]
    pub fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.state.borrow().node(*node).children.clone()
    }

    #[must_use]
    pub fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.state.borrow().node(*node).parent
    }

    #[must_use]
    pub fn tag(&self, node: &NodeId) -> String {
        self.state.borrow().node(*node).tag.clone()
    }

    #[must_use]
    pub fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.state.borrow().node(*node).has_class(class)
    }

    /// Returns the descendants of `node` carrying `class`, in document order.
    #[must_use]
    pub fn find_by_class(&self, node: &NodeId, class: &str) -> Vec<NodeId> {
        let state = self.state.borrow();
        state
            .descendants(*node)
            .into_iter()
            .filter(|id| state.node(*id).has_class(class))
            .collect()
    }

    /// Whether the element is reachable from the document root.
    #[must_use]
    pub fn is_attached(&self, node: &NodeId) -> bool {
        let state = self.state.borrow();
        state.is_ancestor(state.root, *node)
    }

    /// Number of listeners registered on the element.
    #[must_use]
    pub fn listener_count(&self, node: &NodeId) -> usize {
        self.state.borrow().node(*node).listeners.len()
    }

    /// Serializes the element and its subtree. Text and attribute values are
    /// escaped, so message text always appears as inert characters.
    #[must_use]
    pub fn outer_html(&self, node: &NodeId) -> String {
        let mut out = String::new();
        self.state.borrow().html_of(*node, &mut out);
        out
    }
}

fn validate_name(kind: &str, name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'));
    if valid {
        Ok(())
    } else {
        Err(Error::Render(format!("invalid {kind} name: {name:?}")))
    }
}

impl RenderPort for MemoryDocument {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let state = self.state.borrow();
        state
            .descendants(state.root)
            .into_iter()
            .find(|node| state.node(*node).attribute("id") == Some(id))
    }

    fn body(&self) -> Option<NodeId> {
        self.state.borrow().body
    }

    fn create_element(&self, tag: &str) -> Result<NodeId> {
        validate_name("tag", tag)?;
        Ok(self.state.borrow_mut().insert(Node::new(tag)))
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) -> Result<()> {
        validate_name("attribute", name)?;
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(*element);
        match node.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn remove_attribute(&self, element: &NodeId, name: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .node_mut(*element)
            .attributes
            .retain(|(key, _)| key != name);
        Ok(())
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.state
            .borrow()
            .node(*element)
            .attribute(name)
            .map(str::to_string)
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) -> Result<()> {
        validate_name("style property", property)?;
        let mut state = self.state.borrow_mut();
        let node = state.node_mut(*element);
        match node.styles.iter_mut().find(|(key, _)| key == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.styles.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn style(&self, element: &NodeId, property: &str) -> Option<String> {
        self.state
            .borrow()
            .node(*element)
            .styles
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.clone())
    }

    fn set_text(&self, element: &NodeId, text: &str) -> Result<()> {
        self.write_text(element, text);
        Ok(())
    }

    fn text_content(&self, element: &NodeId) -> String {
        let mut out = String::new();
        self.state.borrow().text_of(*element, &mut out);
        out
    }

    fn is_checked(&self, element: &NodeId) -> bool {
        self.state.borrow().node(*element).checked
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.is_ancestor(*child, *parent) {
            return Err(Error::Render(
                "cannot append an element to its own subtree".to_string(),
            ));
        }
        state.append(*parent, *child);
        Ok(())
    }

    fn remove(&self, element: &NodeId) {
        // Dropping listeners releases the handles they capture, as the
        // browser's collector would for a detached subtree.
        let listeners: Vec<(String, Listener)> = {
            let mut state = self.state.borrow_mut();
            state.detach(*element);
            let mut released = std::mem::take(&mut state.node_mut(*element).listeners);
            for node in state.descendants(*element) {
                released.append(&mut state.node_mut(node).listeners);
            }
            released
        };
        drop(listeners);
    }

    fn add_event_listener(&self, element: &NodeId, event: &str, listener: Listener) -> Result<()> {
        self.state
            .borrow_mut()
            .node_mut(*element)
            .listeners
            .push((event.to_string(), listener));
        Ok(())
    }

    fn schedule_timer(&self, delay: Duration, callback: TimerCallback) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let due = state.elapsed + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.timers.push(PendingTimer { due, seq, callback });
        Ok(())
    }

    fn now_millis(&self) -> u64 {
        let state = self.state.borrow();
        let elapsed = u64::try_from(state.elapsed.as_millis()).unwrap_or(u64::MAX);
        state.epoch_millis.saturating_add(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn new_document_has_body() {
        let doc = MemoryDocument::new();
        let body = doc.body().unwrap();
        assert_eq!(doc.tag(&body), "body");
        assert_eq!(doc.parent(&body), Some(doc.root_id()));
    }

    #[test]
    fn without_body_has_no_body() {
        let doc = MemoryDocument::without_body();
        assert!(doc.body().is_none());
        assert_eq!(doc.body_id(), doc.root_id());
    }

    #[test]
    fn removed_node_ids_are_not_reused() {
        let doc = MemoryDocument::new();
        let removed = doc.append_new(&doc.body_id(), "div", &[("id", "old")]);
        doc.remove(&removed);

        let created = doc.create_element("div").unwrap();

        assert_ne!(created, removed);
        assert!(!doc.is_attached(&removed));
        assert_eq!(doc.attribute(&removed, "id").as_deref(), Some("old"));
    }

    #[test]
    fn element_by_id_ignores_detached_elements() {
        let doc = MemoryDocument::new();
        let detached = doc.create_element("div").unwrap();
        doc.set_attribute(&detached, "id", "floating").unwrap();
        assert!(doc.element_by_id("floating").is_none());

        doc.append_child(&doc.body_id(), &detached).unwrap();
        assert_eq!(doc.element_by_id("floating"), Some(detached));

        doc.remove(&detached);
        assert!(doc.element_by_id("floating").is_none());
    }

    #[test]
    fn set_attribute_replaces_existing_value() {
        let doc = MemoryDocument::new();
        let node = doc.append_new(&doc.body_id(), "div", &[("class", "a")]);
        doc.set_attribute(&node, "class", "b").unwrap();
        assert_eq!(doc.attribute(&node, "class").as_deref(), Some("b"));
        assert_eq!(doc.outer_html(&node), r#"<div class="b"></div>"#);
    }

    #[test]
    fn invalid_names_are_render_errors() {
        let doc = MemoryDocument::new();
        assert!(matches!(doc.create_element("not a tag"), Err(Error::Render(_))));
        let node = doc.append_new(&doc.body_id(), "div", &[]);
        assert!(doc.set_attribute(&node, "", "x").is_err());
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let doc = MemoryDocument::new();
        let outer = doc.append_new(&doc.body_id(), "div", &[]);
        let first = doc.append_new(&outer, "span", &[]);
        let second = doc.append_new(&outer, "span", &[]);
        doc.write_text(&first, "Olá, ");
        doc.write_text(&second, "mundo");
        assert_eq!(doc.text_content(&outer), "Olá, mundo");
    }

    #[test]
    fn outer_html_escapes_text() {
        let doc = MemoryDocument::new();
        let node = doc.append_new(&doc.body_id(), "span", &[]);
        doc.set_text(&node, "<script>alert('x')</script>").unwrap();
        assert_eq!(
            doc.outer_html(&node),
            "<span>&lt;script&gt;alert('x')&lt;/script&gt;</span>"
        );
    }

    #[test]
    fn outer_html_escapes_attribute_quotes() {
        let doc = MemoryDocument::new();
        let label = r#"Fechar "já" & sair"#;
        let node = doc.append_new(&doc.body_id(), "button", &[("aria-label", label)]);
        assert_eq!(
            doc.outer_html(&node),
            r#"<button aria-label="Fechar &quot;já&quot; &amp; sair"></button>"#
        );
    }

    #[test]
    fn outer_html_serializes_styles_and_void_elements() {
        let doc = MemoryDocument::new();
        let wrapper = doc.append_new(&doc.body_id(), "div", &[]);
        doc.append_new(&wrapper, "input", &[("id", "crmv")]);
        doc.set_style(&wrapper, "display", "none").unwrap();
        assert_eq!(
            doc.outer_html(&wrapper),
            r#"<div style="display: none;"><input id="crmv"></div>"#
        );
    }

    #[test]
    fn append_child_rejects_cycles() {
        let doc = MemoryDocument::new();
        let outer = doc.append_new(&doc.body_id(), "div", &[]);
        let inner = doc.append_new(&outer, "div", &[]);
        assert!(doc.append_child(&inner, &outer).is_err());
    }

    #[test]
    fn append_child_moves_element() {
        let doc = MemoryDocument::new();
        let a = doc.append_new(&doc.body_id(), "div", &[]);
        let b = doc.append_new(&doc.body_id(), "div", &[]);
        let child = doc.append_new(&a, "span", &[]);
        doc.append_child(&b, &child).unwrap();
        assert!(doc.children(&a).is_empty());
        assert_eq!(doc.children(&b), vec![child]);
    }

    #[test]
    fn select_radio_unchecks_group_and_fires_change() {
        let doc = MemoryDocument::new();
        let body = doc.body_id();
        let first = doc.append_new(
            &body,
            "input",
            &[("type", "radio"), ("name", "perfil"), ("checked", "checked")],
        );
        let second = doc.append_new(&body, "input", &[("type", "radio"), ("name", "perfil")]);
        let changes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&changes);
        doc.add_event_listener(&second, "change", Rc::new(move || counter.set(counter.get() + 1)))
            .unwrap();

        doc.select_radio(&second);

        assert!(!doc.is_checked(&first));
        assert!(doc.is_checked(&second));
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn listeners_may_mutate_the_document() {
        let doc = MemoryDocument::new();
        let button = doc.append_new(&doc.body_id(), "button", &[]);
        let port = doc.clone();
        let target = button;
        doc.add_event_listener(&button, "click", Rc::new(move || port.remove(&target)))
            .unwrap();

        doc.click(&button);
        assert!(!doc.is_attached(&button));
        assert_eq!(doc.listener_count(&button), 0);
    }

    #[test]
    fn timers_fire_in_due_order() {
        let doc = MemoryDocument::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(300, "c"), (100, "a"), (200, "b"), (100, "a2")] {
            let order = Rc::clone(&order);
            doc.schedule_timer(
                Duration::from_millis(delay),
                Box::new(move || order.borrow_mut().push(label)),
            )
            .unwrap();
        }

        doc.advance(Duration::from_millis(250));
        assert_eq!(*order.borrow(), vec!["a", "a2", "b"]);
        assert_eq!(doc.pending_timers(), 1);

        doc.advance(Duration::from_millis(50));
        assert_eq!(*order.borrow(), vec!["a", "a2", "b", "c"]);
        assert_eq!(doc.elapsed(), Duration::from_millis(300));
    }

    #[test]
    fn timers_scheduled_by_callbacks_fire_within_the_same_advance() {
        let doc = MemoryDocument::new();
        let fired = Rc::new(Cell::new(false));
        let port = doc.clone();
        let flag = Rc::clone(&fired);
        doc.schedule_timer(
            Duration::from_millis(10),
            Box::new(move || {
                let flag = Rc::clone(&flag);
                let _ = port
                    .schedule_timer(Duration::from_millis(10), Box::new(move || flag.set(true)));
            }),
        )
        .unwrap();

        doc.advance(Duration::from_millis(20));
        assert!(fired.get());
    }

    #[test]
    fn clock_advances_with_virtual_time() {
        let doc = MemoryDocument::new();
        let start = doc.now_millis();
        doc.advance(Duration::from_millis(1500));
        assert_eq!(doc.now_millis() - start, 1500);
    }
}
