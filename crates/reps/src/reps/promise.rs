use super::prop::{prop, prop_name, title};
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::{Grip, Mode};

/// `Promise { <state>: "fulfilled", <value>: 42 }`
pub struct Promise;

impl Rep for Promise {
    fn name(&self) -> &'static str {
        "Promise"
    }

    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool {
        !no_grip && grip.is_grip() && kind == "Promise"
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let object = grip.as_object().ok_or_else(|| Error::Malformed {
            rep: "Promise",
            reason: format!("expected an object grip, got {}", grip.kind()),
        })?;

        let title_text = cx.title().unwrap_or_else(|| object.class_name());
        let mut element = Element::span()
            .class("objectBox objectBox-object")
            .actor(grip.actor())
            .child(title(cx, grip, title_text));

        let state = match (&object.promise_state, cx.mode()) {
            (Some(state), Mode::Short | Mode::Long) => state,
            _ => return Ok(element.into()),
        };

        let mut props = vec![("<state>", Grip::from(state.state.as_str()))];
        match state.state.as_str() {
            "fulfilled" => props.extend(state.value.clone().map(|value| ("<value>", value))),
            "rejected" => props.extend(state.reason.clone().map(|reason| ("<reason>", reason))),
            _ => {}
        }

        let last = props.len() - 1;
        let props = props
            .iter()
            .enumerate()
            .map(|(i, (name, value))| prop(prop_name(name), cx.render_child(value), i < last));

        element = element
            .child(cx.object_link(grip, Some("objectLeftBrace"), vec![" { ".into()]))
            .children(props)
            .child(cx.object_link(grip, Some("objectRightBrace"), vec![" }".into()]));
        Ok(element.into())
    }
}
