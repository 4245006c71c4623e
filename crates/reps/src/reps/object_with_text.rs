use super::prop::title;
use crate::formatters::quote;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::{Grip, Mode};

/// Objects summarized by a text, e.g. `CSSStyleRule "div.foo"`
pub struct ObjectWithText;

impl Rep for ObjectWithText {
    fn name(&self) -> &'static str {
        "ObjectWithText"
    }

    fn supports(&self, grip: &Grip, _kind: &str, no_grip: bool) -> bool {
        !no_grip
            && grip
                .as_object()
                .is_some_and(|object| object.preview_kind() == Some("ObjectWithText"))
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let object = grip.as_object().ok_or_else(|| Error::Malformed {
            rep: "ObjectWithText",
            reason: format!("expected an object grip, got {}", grip.kind()),
        })?;
        let class = object.class_name();
        let element = Element::span()
            .class(&format!("objectBox objectBox-{}", class))
            .actor(grip.actor());

        if cx.mode() == Mode::Tiny {
            return Ok(element.child(title(cx, grip, class)).into());
        }

        let text = object
            .preview
            .as_ref()
            .and_then(|preview| preview.text.as_deref())
            .ok_or(Error::MissingField {
                rep: "ObjectWithText",
                field: "preview.text",
            })?;
        Ok(element
            .child(title(cx, grip, &format!("{} ", class)))
            .child(Element::span().class("objectPropValue").child(quote(text)))
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RepRegistry;
    use crate::RenderOptions;

    #[test]
    fn test_style_rule() {
        let grip = Grip::from_json(
            r#"{
                "type": "object",
                "class": "CSSStyleRule",
                "actor": "server1.conn3.obj273",
                "preview": {"kind": "ObjectWithText", "text": ".Shadow"}
            }"#,
        )
        .unwrap();
        let registry = RepRegistry::standard();
        assert_eq!(
            registry.render(&grip, &RenderOptions::default()).text(),
            r#"CSSStyleRule ".Shadow""#
        );
        assert_eq!(
            registry.render(&grip, &RenderOptions::default().with_mode(Mode::Tiny)).text(),
            "CSSStyleRule"
        );
    }

    #[test]
    fn test_missing_text() {
        let grip = Grip::from_json(
            r#"{"type": "object", "class": "CSSStyleRule", "preview": {"kind": "ObjectWithText"}}"#,
        )
        .unwrap();
        assert!(matches!(
            RepRegistry::standard().try_render(&grip, &RenderOptions::default()),
            Err(Error::MissingField { rep: "ObjectWithText", .. })
        ));
    }
}
