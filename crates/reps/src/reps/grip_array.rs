use super::prop::{caption, title};
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::{Grip, Mode};

/// Array-like objects: `Array [ 1, 2, 3 ]`, `[3]` in tiny mode
pub struct GripArray;

impl Rep for GripArray {
    fn name(&self) -> &'static str {
        "GripArray"
    }

    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool {
        !no_grip
            && grip
                .as_object()
                .is_some_and(|object| object.preview_kind() == Some("ArrayLike") || kind == "Array")
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let object = grip.as_object().ok_or_else(|| Error::Malformed {
            rep: "GripArray",
            reason: format!("expected an object grip, got {}", grip.kind()),
        })?;
        let preview = object.preview.as_ref();
        let items: &[Grip] = preview
            .and_then(|preview| preview.items.as_deref())
            .unwrap_or_default();
        let length = preview
            .and_then(|preview| preview.length)
            .unwrap_or(items.len());

        let element = Element::span()
            .class("objectBox objectBox-array")
            .actor(grip.actor());

        let mode = cx.mode();
        if mode == Mode::Tiny {
            let mut element = element.child(cx.object_link(grip, Some("arrayLeftBracket"), vec!["[".into()]));
            if length > 0 {
                element = element.child(Element::span().class("length").child(length.to_string()));
            }
            return Ok(element
                .child(cx.object_link(grip, Some("arrayRightBracket"), vec!["]".into()]))
                .into());
        }

        let max = cx.limits().array_items.for_mode(mode);
        let shown = items.len().min(max);
        let hidden = length.max(items.len()) - shown;

        let mut children: Vec<Node> = items[..shown]
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let mut entry = Element::span().child(cx.render_child(item));
                if i + 1 < shown || hidden > 0 {
                    entry = entry.child(Element::span().class("arrayComma").child(", "));
                }
                entry.into()
            })
            .collect();
        if hidden > 0 {
            children.push(caption(cx, grip, format!("{} more…", hidden)));
        }

        let (open, close) = if children.is_empty() { ("[", "]") } else { ("[ ", " ]") };
        let title_text = cx
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} ", object.class_name()));

        Ok(element
            .child(title(cx, grip, &title_text))
            .child(cx.object_link(grip, Some("arrayLeftBracket"), vec![open.into()]))
            .children(children)
            .child(cx.object_link(grip, Some("arrayRightBracket"), vec![close.into()]))
            .into())
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::render;
    use crate::RenderOptions;
    use reps_types::{Grip, Mode};

    fn array(items: serde_json::Value, length: usize) -> Grip {
        Grip::from_value(serde_json::json!({
            "type": "object",
            "class": "Array",
            "actor": "server1.conn0.obj35",
            "ownPropertyLength": length + 1,
            "preview": {"kind": "ArrayLike", "length": length, "items": items}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_array() {
        let grip = array(serde_json::json!([]), 0);
        assert_eq!(render(&grip, &RenderOptions::default()).text(), "Array []");
        assert_eq!(render(&grip, &RenderOptions::default().with_mode(Mode::Tiny)).text(), "[]");
    }

    #[test]
    fn test_array_items() {
        let grip = array(serde_json::json!([1, "a", null]), 3);
        assert_eq!(
            render(&grip, &RenderOptions::default()).text(),
            r#"Array [ 1, "a", null ]"#
        );
        assert_eq!(render(&grip, &RenderOptions::default().with_mode(Mode::Tiny)).text(), "[3]");
    }

    #[test]
    fn test_more_items() {
        let items: Vec<usize> = (0..10).collect();
        let grip = array(serde_json::json!(items), 302);
        assert_eq!(
            render(&grip, &RenderOptions::default()).text(),
            "Array [ 0, 1, 2, 299 more… ]"
        );
        assert_eq!(
            render(&grip, &RenderOptions::default().with_mode(Mode::Long)).text(),
            "Array [ 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 292 more… ]"
        );
    }

    #[test]
    fn test_array_like_class() {
        let grip = Grip::from_json(
            r#"{
                "type": "object",
                "class": "DOMStringList",
                "preview": {"kind": "ArrayLike", "length": 1, "items": ["x"]}
            }"#,
        )
        .unwrap();
        assert_eq!(
            render(&grip, &RenderOptions::default()).text(),
            r#"DOMStringList [ "x" ]"#
        );
    }
}
