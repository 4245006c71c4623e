use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::Grip;

/// DOM attribute: `name="value"`
pub struct Attribute;

impl Rep for Attribute {
    fn name(&self) -> &'static str {
        "Attribute"
    }

    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool {
        !no_grip && grip.is_grip() && kind == "Attr"
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let preview = grip
            .as_object()
            .and_then(|object| object.preview.as_ref())
            .ok_or(Error::MissingField {
                rep: "Attribute",
                field: "preview",
            })?;
        let name = preview.node_name.as_deref().ok_or(Error::MissingField {
            rep: "Attribute",
            field: "preview.nodeName",
        })?;
        let value = preview.value.clone().unwrap_or_else(|| Grip::from(""));

        Ok(Element::span()
            .class("objectBox-Attr")
            .actor(grip.actor())
            .child(cx.object_link(
                grip,
                None,
                vec![Element::span().class("attr-name").child(name).into()],
            ))
            .child("=")
            .child(cx.render_child(&value))
            .into())
    }
}
