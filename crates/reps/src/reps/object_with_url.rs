use super::prop::title;
use crate::formatters::url_display_string;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::{Grip, Mode};

/// Objects summarized by a URL, e.g. `Location https://example.com/`
pub struct ObjectWithUrl;

impl Rep for ObjectWithUrl {
    fn name(&self) -> &'static str {
        "ObjectWithURL"
    }

    fn supports(&self, grip: &Grip, _kind: &str, no_grip: bool) -> bool {
        !no_grip
            && grip
                .as_object()
                .is_some_and(|object| object.preview_kind() == Some("ObjectWithURL"))
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let object = grip.as_object().ok_or_else(|| Error::Malformed {
            rep: "ObjectWithURL",
            reason: format!("expected an object grip, got {}", grip.kind()),
        })?;
        let class = object.class_name();
        let element = Element::span()
            .class(&format!("objectBox objectBox-{}", class))
            .actor(grip.actor());

        if cx.mode() == Mode::Tiny {
            return Ok(element.child(title(cx, grip, class)).into());
        }

        let url = object
            .preview
            .as_ref()
            .and_then(|preview| preview.url.as_deref())
            .unwrap_or_default();
        Ok(element
            .child(title(cx, grip, &format!("{} ", class)))
            .child(
                Element::span()
                    .class("objectPropValue")
                    .child(url_display_string(url, cx.limits().url_chars)),
            )
            .into())
    }
}
