use super::prop::title;
use crate::formatters::url_display_string;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::Result;
use reps_types::{Grip, Mode};

/// `Window https://example.com/`
pub struct Window;

impl Rep for Window {
    fn name(&self) -> &'static str {
        "Window"
    }

    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool {
        !no_grip && grip.is_grip() && kind == "Window"
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let element = Element::span()
            .class("objectBox objectBox-Window")
            .actor(grip.actor());

        if cx.mode() == Mode::Tiny {
            return Ok(element.child(title(cx, grip, "Window")).into());
        }

        let url = grip
            .as_object()
            .and_then(|object| object.preview.as_ref())
            .and_then(|preview| preview.url.as_deref())
            .unwrap_or_default();
        Ok(element
            .child(title(cx, grip, "Window "))
            .child(
                Element::span()
                    .class("objectPropValue")
                    .child(url_display_string(url, cx.limits().url_chars)),
            )
            .into())
    }
}
