use super::dom::node_box;
use crate::formatters::{crop_string, quote};
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::Result;
use reps_types::{node_type, Grip, Mode};

/// DOM text node: `#text "content"`, just `#text` in tiny mode
pub struct TextNode;

impl Rep for TextNode {
    fn name(&self) -> &'static str {
        "TextNode"
    }

    fn supports(&self, grip: &Grip, _kind: &str, no_grip: bool) -> bool {
        !no_grip
            && grip
                .as_object()
                .is_some_and(|object| object.node_type() == Some(node_type::TEXT_NODE))
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let mut content = vec![Element::span().class("nodeTitle").child("#text").into()];

        if cx.mode() != Mode::Tiny {
            let text = grip
                .as_object()
                .and_then(|object| object.preview.as_ref())
                .and_then(|preview| preview.text_content.as_deref())
                .unwrap_or_default();
            let text = crop_string(text, cx.limits().text_chars);
            content.push(" ".into());
            content.push(
                Element::span()
                    .class("nodeValue objectBox-string")
                    .child(quote(&text))
                    .into(),
            );
        }

        Ok(node_box(cx, grip, content))
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::render;
    use crate::RenderOptions;
    use reps_types::{Grip, Mode};

    fn text_node(content: &str) -> Grip {
        Grip::from_value(serde_json::json!({
            "type": "object",
            "class": "Text",
            "actor": "server1.conn1.child1/obj50",
            "preview": {
                "kind": "DOMNode",
                "nodeType": 3,
                "nodeName": "#text",
                "textContent": content,
                "isConnected": true
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_text_node() {
        let grip = text_node("hello\nworld");
        assert_eq!(render(&grip, &RenderOptions::default()).text(), r#"#text "hello\nworld""#);
        assert_eq!(
            render(&grip, &RenderOptions::default().with_mode(Mode::Tiny)).text(),
            "#text"
        );
    }

    #[test]
    fn test_long_text_is_cropped() {
        let grip = text_node(&"a".repeat(80));
        let text = render(&grip, &RenderOptions::default()).text();
        assert_eq!(text.chars().count(), "#text ".len() + 50 + 2);
        assert!(text.contains('…'));
    }
}
