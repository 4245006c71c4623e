//! Declarative display tree produced by reps.
//!
//! The tree is what a UI layer paints: nested elements with CSS classes,
//! attributes and interaction listeners. Tests and plain-text consumers only
//! need [`Node::text`], the flattened text content.

use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// User interactions a rep can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    MouseOver,
    MouseOut,
    Click,
}

pub type Listener = Rc<dyn Fn()>;

#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Clone)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
    listeners: Vec<(Event, Listener)>,
}

impl Node {
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// All elements carrying `class`, in document order
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_by_class(class, found);
            }
        }
    }

    /// HTML-like markup of the tree, listeners omitted
    pub fn markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_markup(text)),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                if !element.classes.is_empty() {
                    out.push_str(&format!(" class=\"{}\"", element.classes.join(" ")));
                }
                for (name, value) in &element.attributes {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_markup(value)));
                }
                out.push('>');
                for child in &element.children {
                    child.write_markup(out);
                }
                out.push_str(&format!("</{}>", element.tag));
            }
        }
    }
}

fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    /// Add one or more whitespace-separated classes
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(String::from));
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Set `data-link-actor-id` when the grip has an actor
    pub fn actor(self, actor: Option<&str>) -> Self {
        match actor {
            Some(actor) => self.attr("data-link-actor-id", actor),
            None => self,
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn on(mut self, event: Event, listener: impl Fn() + 'static) -> Self {
        self.listeners.push((event, Rc::new(listener)));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn has_listener(&self, event: Event) -> bool {
        self.listeners.iter().any(|(e, _)| *e == event)
    }

    /// Fire every listener registered for `event`, returning how many ran
    pub fn simulate(&self, event: Event) -> usize {
        let mut fired = 0;
        for (e, listener) in &self.listeners {
            if *e == event {
                listener();
                fired += 1;
            }
        }
        fired
    }

    pub fn text(&self) -> String {
        self.children.iter().map(Node::text).collect()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events: Vec<Event> = self.listeners.iter().map(|(e, _)| *e).collect();
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("classes", &self.classes)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .field("listeners", &events)
            .finish()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}
