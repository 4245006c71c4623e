use crate::formatters::url_display_string;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::Result;
use reps_types::Grip;

/// `StyleSheet https://example.com/styles.css`
///
/// Embedded stylesheets have no URL and therefore no preview; only the
/// title is shown for them.
pub struct StyleSheet;

impl Rep for StyleSheet {
    fn name(&self) -> &'static str {
        "StyleSheet"
    }

    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool {
        !no_grip && grip.is_grip() && kind == "CSSStyleSheet"
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let url = grip
            .as_object()
            .and_then(|object| object.preview.as_ref())
            .and_then(|preview| preview.url.as_deref())
            .filter(|url| !url.is_empty());
        let location = url
            .map(|url| url_display_string(url, cx.limits().url_chars))
            .unwrap_or_default();

        Ok(Element::span()
            .class("objectBox objectBox-object")
            .actor(grip.actor())
            .child(Element::span().class("objectBoxTitle").child("StyleSheet "))
            .child(Element::span().class("objectPropValue").child(location))
            .into())
    }
}
