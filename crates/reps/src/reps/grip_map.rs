use super::prop::{caption, prop, title};
use crate::formatters::select_indexes;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::{Grip, Mode};

/// Map-like objects: `Map { "a": 1, "b": 2, 8 more… }`
pub struct GripMap;

impl Rep for GripMap {
    fn name(&self) -> &'static str {
        "GripMap"
    }

    fn supports(&self, grip: &Grip, _kind: &str, no_grip: bool) -> bool {
        !no_grip
            && grip
                .as_object()
                .is_some_and(|object| object.preview_kind() == Some("MapLike"))
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let object = grip.as_object().ok_or_else(|| Error::Malformed {
            rep: "GripMap",
            reason: format!("expected an object grip, got {}", grip.kind()),
        })?;
        let title_text = cx.title().unwrap_or_else(|| object.class_name());
        let element = Element::span()
            .class("objectBox objectBox-object")
            .actor(grip.actor())
            .child(title(cx, grip, title_text));

        let mode = cx.mode();
        if mode == Mode::Tiny {
            return Ok(element.into());
        }

        let preview = object.preview.as_ref();
        let entries: &[(Grip, Grip)] = preview
            .and_then(|preview| preview.entries.as_deref())
            .unwrap_or_default();
        let size = preview
            .and_then(|preview| preview.size)
            .unwrap_or(entries.len())
            .max(entries.len());

        let max = cx.limits().map_entries.for_mode(mode);
        let values: Vec<Option<&Grip>> = entries.iter().map(|(_, value)| Some(value)).collect();
        let indexes = select_indexes(&values, max);
        let hidden = size - indexes.len();

        let mut children: Vec<Node> = indexes
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let (key, value) = &entries[index];
                let delim = position + 1 < indexes.len() || hidden > 0;
                prop(cx.render_child(key), cx.render_child(value), delim)
            })
            .collect();
        if hidden > 0 {
            children.push(caption(cx, grip, format!("{} more…", hidden)));
        }

        Ok(element
            .child(cx.object_link(grip, Some("objectLeftBrace"), vec![" { ".into()]))
            .children(children)
            .child(cx.object_link(grip, Some("objectRightBrace"), vec![" }".into()]))
            .into())
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::render;
    use crate::RenderOptions;
    use reps_types::{Grip, Mode};

    fn map(entries: serde_json::Value, size: usize) -> Grip {
        Grip::from_value(serde_json::json!({
            "type": "object",
            "class": "Map",
            "actor": "server1.conn1.child1/obj87",
            "preview": {"kind": "MapLike", "size": size, "entries": entries}
        }))
        .unwrap()
    }

    #[test]
    fn test_map_entries() {
        let grip = map(serde_json::json!([["key-a", "value-a"], ["key-b", "value-b"]]), 2);
        assert_eq!(
            render(&grip, &RenderOptions::default()).text(),
            r#"Map { "key-a": "value-a", "key-b": "value-b" }"#
        );
        assert_eq!(render(&grip, &RenderOptions::default().with_mode(Mode::Tiny)).text(), "Map");
    }

    #[test]
    fn test_interesting_values_first() {
        let grip = map(
            serde_json::json!([
                ["a", {"type": "undefined"}],
                ["b", 1],
                ["c", 2],
                ["d", 3]
            ]),
            4,
        );
        assert_eq!(
            render(&grip, &RenderOptions::default()).text(),
            r#"Map { "b": 1, "c": 2, "d": 3, 1 more… }"#
        );
    }

    #[test]
    fn test_empty_map() {
        let grip = map(serde_json::json!([]), 0);
        assert_eq!(render(&grip, &RenderOptions::default()).text(), "Map {  }");
    }
}
