use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::Result;
use reps_types::Grip;

/// Regular expression shown by its source, e.g. `/ab+c/gi`
pub struct RegExp;

impl Rep for RegExp {
    fn name(&self) -> &'static str {
        "RegExp"
    }

    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool {
        !no_grip && grip.is_grip() && kind == "RegExp"
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let source = grip
            .as_object()
            .and_then(|object| object.display_string.as_deref())
            .unwrap_or("RegExp");

        Ok(Element::span()
            .class("objectBox objectBox-regexp regexpSource")
            .actor(grip.actor())
            .child(cx.object_link(grip, None, vec![source.into()]))
            .into())
    }
}
