use super::dom::node_box;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::{node_type, Grip, Mode, Preview};

/// DOM element.
///
/// Tiny mode gives a selector (`button#btn-1.btn.btn-log`), other modes the
/// opening tag with its attributes, `id` and `class` first.
pub struct ElementNode;

impl Rep for ElementNode {
    fn name(&self) -> &'static str {
        "ElementNode"
    }

    fn supports(&self, grip: &Grip, _kind: &str, no_grip: bool) -> bool {
        !no_grip
            && grip
                .as_object()
                .is_some_and(|object| object.node_type() == Some(node_type::ELEMENT_NODE))
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let preview = grip
            .as_object()
            .and_then(|object| object.preview.as_ref())
            .ok_or(Error::MissingField {
                rep: "ElementNode",
                field: "preview",
            })?;
        let node_name = preview.node_name.as_deref().ok_or(Error::MissingField {
            rep: "ElementNode",
            field: "preview.nodeName",
        })?;

        let content = match cx.mode() {
            Mode::Tiny => selector(node_name, preview),
            _ => opening_tag(node_name, preview),
        };
        Ok(node_box(cx, grip, content))
    }
}

fn selector(node_name: &str, preview: &Preview) -> Vec<Node> {
    let mut nodes = vec![tag_name(node_name)];

    if let Some(id) = preview.attributes.get("id").filter(|id| !id.is_empty()) {
        nodes.push(Element::span().class("attr-value").child(format!("#{}", id)).into());
    }

    if let Some(class) = preview.attributes.get("class") {
        let classes: String = class
            .split_whitespace()
            .map(|name| format!(".{}", name))
            .collect();
        if !classes.is_empty() {
            nodes.push(Element::span().class("attr-value").child(classes).into());
        }
    }

    nodes
}

fn opening_tag(node_name: &str, preview: &Preview) -> Vec<Node> {
    let prioritized = ["id", "class"]
        .into_iter()
        .filter_map(|name| preview.attributes.get_key_value(name));
    let others = preview
        .attributes
        .iter()
        .filter(|(name, _)| !matches!(name.as_str(), "id" | "class"));

    let mut tag = Element::span()
        .class("tag")
        .child("<")
        .child(tag_name(node_name));
    for (name, value) in prioritized.chain(others) {
        tag = tag
            .child(" ")
            .child(Element::span().class("attr-name").child(name.as_str()))
            .child("=\"")
            .child(Element::span().class("attr-value").child(value.as_str()))
            .child("\"");
    }
    vec![tag.child(">").into()]
}

fn tag_name(node_name: &str) -> Node {
    Element::span()
        .class("tag-name")
        .child(node_name.to_lowercase())
        .into()
}
