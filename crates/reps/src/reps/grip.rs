use super::prop::{caption, descriptor_value, prop, prop_name, title, MORE};
use crate::formatters::select_indexes;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::{Grip, Mode, ObjectGrip, PropertyDescriptor};

/// Generic object rep: `Title { prop: value, …, more… }`.
///
/// Fallback for every object grip no kind-specific rep claimed.
pub struct GripRep;

impl Rep for GripRep {
    fn name(&self) -> &'static str {
        "Grip"
    }

    fn supports(&self, grip: &Grip, _kind: &str, no_grip: bool) -> bool {
        !no_grip && grip.as_object().is_some()
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let object = grip.as_object().ok_or_else(|| Error::Malformed {
            rep: "Grip",
            reason: format!("expected an object grip, got {}", grip.kind()),
        })?;

        let title_text = cx.title().unwrap_or_else(|| object.class_name());
        let title = title(cx, grip, title_text);

        let mode = cx.mode();
        if mode == Mode::Tiny {
            return Ok(Element::span()
                .class("objectBox objectBox-object")
                .child(title)
                .into());
        }

        let max = cx.limits().object_props.for_mode(mode);
        let props = props(cx, grip, object, max);

        Ok(Element::span()
            .class("objectBox objectBox-object")
            .actor(grip.actor())
            .child(title)
            .child(cx.object_link(grip, Some("objectLeftBrace"), vec![" { ".into()]))
            .children(props)
            .child(cx.object_link(grip, Some("objectRightBrace"), vec![" }".into()]))
            .into())
    }
}

fn props(cx: &RenderContext<'_>, grip: &Grip, object: &ObjectGrip, max: usize) -> Vec<Node> {
    // Primitive wrappers (`new Number(42)`) show the wrapped value alone
    if let Some(wrapped) = object.preview.as_ref().and_then(|p| p.wrapped_value.as_ref()) {
        return vec![cx.render_child(wrapped)];
    }

    let entries = entries(object);
    let values: Vec<Option<&Grip>> = entries.iter().map(|(_, d)| d.grip()).collect();
    let indexes = select_indexes(&values, max);
    let truncated = total_len(object, entries.len()) > max;

    let mut nodes: Vec<Node> = indexes
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            let (name, descriptor) = &entries[index];
            let delim = position + 1 < indexes.len() || truncated;
            prop(prop_name(name), descriptor_value(cx, descriptor), delim)
        })
        .collect();

    if truncated {
        nodes.push(caption(cx, grip, MORE.to_string()));
    }
    nodes
}

/// Own properties followed by safe getter values, in protocol order
fn entries(object: &ObjectGrip) -> Vec<(String, PropertyDescriptor)> {
    let Some(preview) = &object.preview else {
        return proxy_entries(object);
    };

    if preview.own_properties.is_empty() && preview.safe_getter_values.is_empty() {
        return proxy_entries(object);
    }

    preview
        .own_properties
        .iter()
        .chain(preview.safe_getter_values.iter())
        .map(|(name, descriptor)| (name.clone(), descriptor.clone()))
        .collect()
}

// Proxies sent without a preview carry their target and handler directly
fn proxy_entries(object: &ObjectGrip) -> Vec<(String, PropertyDescriptor)> {
    [
        ("<target>", &object.proxy_target),
        ("<handler>", &object.proxy_handler),
    ]
    .into_iter()
    .filter_map(|(name, value)| {
        value
            .as_ref()
            .map(|grip| (name.to_string(), PropertyDescriptor::with_value(grip.clone())))
    })
    .collect()
}

/// Number of properties the object really has; previews may be partial
fn total_len(object: &ObjectGrip, listed: usize) -> usize {
    let declared = object.preview.as_ref().map(|preview| {
        preview
            .own_properties_length
            .or(object.own_property_length)
            .unwrap_or(0)
            + preview.safe_getter_values.len()
    });
    listed.max(declared.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderOptions;
    use crate::registry::RepRegistry;

    fn render(json: &str, options: &RenderOptions) -> String {
        let grip = Grip::from_json(json).unwrap();
        RepRegistry::standard().render(&grip, options).text()
    }

    #[test]
    fn test_object_without_preview() {
        let json = r#"{"type": "object", "class": "Object", "actor": "o1"}"#;
        assert_eq!(render(json, &RenderOptions::default()), "Object {  }");
    }

    #[test]
    fn test_proxy_without_preview() {
        let json = r#"{
            "type": "object",
            "class": "Proxy",
            "proxyTarget": {"type": "object", "class": "Object"},
            "proxyHandler": {"type": "object", "class": "Object"}
        }"#;
        assert_eq!(
            render(json, &RenderOptions::default()),
            "Proxy { <target>: Object, <handler>: Object }"
        );
    }

    #[test]
    fn test_declared_length_triggers_elision() {
        let json = r#"{
            "type": "object",
            "class": "Object",
            "ownPropertyLength": 12,
            "preview": {
                "kind": "Object",
                "ownProperties": {"a": {"value": 1}},
                "ownPropertiesLength": 12
            }
        }"#;
        let options = RenderOptions::default().with_mode(Mode::Long);
        assert_eq!(render(json, &options), "Object { a: 1, more… }");
    }

    #[test]
    fn test_accessor_property() {
        let json = r#"{
            "type": "object",
            "class": "Object",
            "preview": {
                "kind": "Object",
                "ownProperties": {
                    "x": {"get": {"type": "object", "class": "Function"}, "set": {"type": "undefined"}}
                },
                "ownPropertiesLength": 1
            }
        }"#;
        assert_eq!(render(json, &RenderOptions::default()), "Object { x: Getter }");
    }
}
