//! In-memory [`Document`] used to drive gallery overlays outside a browser.
//!
//! Markup is parsed with quick-xml, so fragments must be well-formed
//! (self-closed `<img />`, quoted attribute values). Event delivery follows
//! the browser model closely enough for the overlay: pointer events bubble
//! from the hit element up to the body, key events go to window listeners.

use std::collections::BTreeMap;

use log::debug;
use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::reader::Reader;

use crate::gallery::{
    Document, Event, EventKind, GalleryController, Handler, Key, ListenerId, NodeId, Scheduler,
    Subscription, Target,
};

const BODY: NodeId = NodeId(0);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub text: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Debug)]
pub struct MemoryDocument {
    nodes: Vec<Element>,
    listeners: BTreeMap<ListenerId, Subscription>,
    next_listener: u64,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// An empty document holding only a `<body>`.
    pub fn new() -> Self {
        MemoryDocument {
            nodes: vec![Element {
                tag: "body".to_string(),
                ..Element::default()
            }],
            listeners: BTreeMap::new(),
            next_listener: 0,
        }
    }

    /// Parse `markup` and append its top-level elements to the body.
    /// Returns the ids of those top-level elements.
    pub fn mount(&mut self, markup: &str) -> Result<Vec<NodeId>, String> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().trim_text(true);

        let mut stack = vec![BODY];
        let mut roots = Vec::new();

        loop {
            let event = reader
                .read_event()
                .map_err(|e| format!("markup error at byte {}: {}", reader.buffer_position(), e))?;
            match event {
                XmlEvent::Eof => break,
                XmlEvent::Start(ref e) => {
                    let parent = *stack.last().unwrap_or(&BODY);
                    let node = self.append(e, parent);
                    if parent == BODY {
                        roots.push(node);
                    }
                    stack.push(node);
                }
                XmlEvent::Empty(ref e) => {
                    let parent = *stack.last().unwrap_or(&BODY);
                    let node = self.append(e, parent);
                    if parent == BODY {
                        roots.push(node);
                    }
                }
                XmlEvent::End(_) => {
                    if stack.len() <= 1 {
                        return Err("unbalanced closing tag".to_string());
                    }
                    stack.pop();
                }
                XmlEvent::Text(t) => {
                    let text = match t.unescape() {
                        Ok(s) => s.into_owned(),
                        Err(_) => String::from_utf8_lossy(&t).into_owned(),
                    };
                    if let Some(&current) = stack.last() {
                        if current != BODY {
                            self.nodes[current.0].text.push_str(&text);
                        }
                    }
                }
                _ => {}
            }
        }

        if stack.len() > 1 {
            return Err(format!("{} unclosed element(s)", stack.len() - 1));
        }
        debug!("mounted {} element(s)", roots.len());
        Ok(roots)
    }

    fn append(&mut self, start: &BytesStart, parent: NodeId) -> NodeId {
        let mut element = Element {
            tag: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            parent: Some(parent),
            ..Element::default()
        };

        for attr in start.attributes().flatten() {
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = match attr.unescape_value() {
                Ok(v) => v.into_owned(),
                Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
            };
            match key.as_str() {
                "id" => element.id = Some(value),
                "class" => {
                    element.classes = value.split_whitespace().map(str::to_string).collect();
                }
                "style" => element.style = parse_style(&value),
                _ => {
                    element.attributes.insert(key, value);
                }
            }
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(element);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn body(&self) -> NodeId {
        BODY
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|e| e.text.as_str())
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.get(node)
            .and_then(|e| e.style.get(property))
            .map(String::as_str)
    }

    pub fn body_style(&self, property: &str) -> Option<&str> {
        self.style(BODY, property)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    /// Every element carrying attribute `name`, with its value, in document order.
    pub fn elements_with_attribute(&self, name: &str) -> Vec<(NodeId, String)> {
        let mut out = Vec::new();
        for node in self.descendants(BODY) {
            if let Some(value) = self.attribute(node, name) {
                out.push((node, value.to_string()));
            }
        }
        out
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn key_listener_count(&self) -> usize {
        self.listeners
            .values()
            .filter(|s| s.target == Target::Window && s.kind == EventKind::KeyDown)
            .count()
    }

    /// Deliver a click or touch-end on `target`, bubbling towards the body
    /// until a handler consumes it. Returns whether any handler did.
    pub fn fire_pointer<S: Scheduler>(
        &mut self,
        controller: &mut GalleryController,
        scheduler: &mut S,
        target: NodeId,
        kind: EventKind,
    ) -> bool {
        let event = Event::pointer(kind, target);
        let mut current = Some(target);
        while let Some(node) = current {
            for handler in self.handlers_for(Target::Node(node), kind) {
                if controller.handle(self, scheduler, handler, &event) {
                    return true;
                }
            }
            current = self.get(node).and_then(|e| e.parent);
        }
        false
    }

    /// Deliver a key-down to every window listener.
    pub fn fire_key<S: Scheduler>(
        &mut self,
        controller: &mut GalleryController,
        scheduler: &mut S,
        key: Key,
    ) -> bool {
        let event = Event::key(key);
        let mut consumed = false;
        for handler in self.handlers_for(Target::Window, EventKind::KeyDown) {
            consumed |= controller.handle(self, scheduler, handler, &event);
        }
        consumed
    }

    fn handlers_for(&self, target: Target, kind: EventKind) -> Vec<Handler> {
        self.listeners
            .values()
            .filter(|s| s.target == target && s.kind == kind)
            .map(|s| s.handler)
            .collect()
    }

    /// Pre-order walk below `root`, excluding `root`.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.get(root) {
            Some(e) => e.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(e) = self.get(node) {
                stack.extend(e.children.iter().rev().copied());
            }
        }
        out
    }
}

impl Document for MemoryDocument {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn query_all(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node)
            .map(|e| e.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(e) = self.nodes.get_mut(node.0) {
            if !e.classes.iter().any(|c| c == class) {
                e.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(e) = self.nodes.get_mut(node.0) {
            e.classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(e) = self.nodes.get_mut(node.0) {
            if value.is_empty() {
                e.style.remove(property);
            } else {
                e.style.insert(property.to_string(), value.to_string());
            }
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(e) = self.nodes.get_mut(node.0) {
            e.text = text.to_string();
        }
    }

    fn set_body_style(&mut self, property: &str, value: &str) {
        self.set_style(BODY, property, value);
    }

    fn listen(&mut self, subscription: Subscription) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id, subscription);
        id
    }

    fn unlisten(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }
}

/// Parse an inline `style` attribute into property/value pairs.
fn parse_style(raw: &str) -> BTreeMap<String, String> {
    raw.split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim();
            let value = value.trim();
            if prop.is_empty() || value.is_empty() {
                None
            } else {
                Some((prop.to_string(), value.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = r#"
        <div id="outer" class="panel hidden" style="display: none; color: red">
            <span class="label">Hello &amp; welcome</span>
            <img src="a.png" class="pic" />
            <div class="inner"><span class="label">Second</span></div>
        </div>
        <p id="sibling">x</p>
    "#;

    #[test]
    fn mount_returns_top_level_elements() {
        let mut doc = MemoryDocument::new();
        let roots = doc.mount(FRAGMENT).unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(doc.element_by_id("outer"), Some(roots[0]));
        assert_eq!(doc.element_by_id("sibling"), Some(roots[1]));
        assert_eq!(doc.element_by_id("missing"), None);
    }

    #[test]
    fn text_and_style_are_parsed() {
        let mut doc = MemoryDocument::new();
        doc.mount(FRAGMENT).unwrap();
        let outer = doc.element_by_id("outer").unwrap();
        assert_eq!(doc.style(outer, "display"), Some("none"));
        assert_eq!(doc.style(outer, "color"), Some("red"));
        let label = doc.query(outer, "label").unwrap();
        assert_eq!(doc.text(label), Some("Hello & welcome"));
        let pic = doc.query(outer, "pic").unwrap();
        assert_eq!(doc.attribute(pic, "src"), Some("a.png"));
    }

    #[test]
    fn query_all_walks_in_document_order() {
        let mut doc = MemoryDocument::new();
        doc.mount(FRAGMENT).unwrap();
        let outer = doc.element_by_id("outer").unwrap();
        let labels = doc.query_all(outer, "label");
        assert_eq!(labels.len(), 2);
        assert_eq!(doc.text(labels[1]), Some("Second"));
        assert!(doc.query_all(outer, "panel").is_empty()); // root itself excluded
    }

    #[test]
    fn class_and_style_mutation() {
        let mut doc = MemoryDocument::new();
        doc.mount(FRAGMENT).unwrap();
        let outer = doc.element_by_id("outer").unwrap();
        doc.remove_class(outer, "hidden");
        doc.add_class(outer, "shown");
        doc.add_class(outer, "shown");
        assert!(!doc.has_class(outer, "hidden"));
        assert_eq!(doc.get(outer).unwrap().classes, vec!["panel", "shown"]);

        doc.set_style(outer, "display", "");
        assert_eq!(doc.style(outer, "display"), None);
        doc.set_body_style("overflow", "hidden");
        assert_eq!(doc.body_style("overflow"), Some("hidden"));
    }

    #[test]
    fn stale_node_ids_are_ignored() {
        let mut doc = MemoryDocument::new();
        let ghost = NodeId(999);
        doc.add_class(ghost, "x");
        doc.set_text(ghost, "x");
        assert!(!doc.has_class(ghost, "x"));
        assert!(doc.query_all(ghost, "x").is_empty());
    }

    #[test]
    fn malformed_markup_is_rejected() {
        let mut doc = MemoryDocument::new();
        assert!(doc.mount("<div><span></div>").is_err());
        assert!(doc.mount("<div>").is_err());
    }

    #[test]
    fn listeners_register_and_release() {
        let mut doc = MemoryDocument::new();
        let a = doc.listen(Subscription {
            target: Target::Window,
            kind: EventKind::KeyDown,
            handler: Handler::Keyboard,
        });
        let b = doc.listen(Subscription {
            target: Target::Node(BODY),
            kind: EventKind::Click,
            handler: Handler::Close,
        });
        assert_ne!(a, b);
        assert_eq!(doc.listener_count(), 2);
        assert_eq!(doc.key_listener_count(), 1);
        assert!(doc.unlisten(a));
        assert!(!doc.unlisten(a));
        assert_eq!(doc.key_listener_count(), 0);
    }

    #[test]
    fn attribute_scan_finds_trigger_buttons() {
        let mut doc = MemoryDocument::new();
        doc.mount(r#"<div><button data-gallery-id="gallery-0">Open</button><button>Other</button></div>"#)
            .unwrap();
        let found = doc.elements_with_attribute("data-gallery-id");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1, "gallery-0");
    }
}
