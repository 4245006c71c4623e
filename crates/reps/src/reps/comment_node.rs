use crate::formatters::{crop_string, escape_newlines};
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::Result;
use reps_types::{node_type, Grip};

/// DOM comment: `<!-- text -->`, cropped per mode
pub struct CommentNode;

impl Rep for CommentNode {
    fn name(&self) -> &'static str {
        "CommentNode"
    }

    fn supports(&self, grip: &Grip, _kind: &str, no_grip: bool) -> bool {
        !no_grip
            && grip
                .as_object()
                .is_some_and(|object| object.node_type() == Some(node_type::COMMENT_NODE))
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let text = grip
            .as_object()
            .and_then(|object| object.preview.as_ref())
            .and_then(|preview| preview.text_content.as_deref())
            .unwrap_or_default();
        let limit = cx.limits().comment_chars.for_mode(cx.mode());
        let text = escape_newlines(&crop_string(text, limit));

        Ok(Element::span()
            .class("objectBox theme-comment")
            .actor(grip.actor())
            .child(format!("<!-- {} -->", text))
            .into())
    }
}
