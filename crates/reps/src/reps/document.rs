use super::prop::title;
use crate::formatters::url_display_string;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::Result;
use reps_types::{Grip, Mode};

const DOCUMENT_CLASSES: [&str; 4] = ["HTMLDocument", "XULDocument", "Document", "XMLDocument"];

/// `HTMLDocument https://example.com/`
pub struct Document;

impl Rep for Document {
    fn name(&self) -> &'static str {
        "Document"
    }

    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool {
        !no_grip && grip.is_grip() && DOCUMENT_CLASSES.contains(&kind)
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let class = grip.as_object().map(|object| object.class_name()).unwrap_or("Document");
        let mut element = Element::span()
            .class("objectBox objectBox-object")
            .actor(grip.actor());

        if cx.mode() == Mode::Tiny {
            return Ok(element.child(title(cx, grip, class)).into());
        }

        element = element.child(title(cx, grip, &format!("{} ", class)));
        let location = grip
            .as_object()
            .and_then(|object| object.preview.as_ref())
            .and_then(|preview| preview.location.as_deref());
        if let Some(location) = location {
            element = element.child(
                Element::span()
                    .class("location")
                    .child(url_display_string(location, cx.limits().url_chars)),
            );
        }
        Ok(element.into())
    }
}
