use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::{Grip, Mode};

/// Error objects: `TypeError: message`, the stack appended in long mode
pub struct ErrorRep;

impl Rep for ErrorRep {
    fn name(&self) -> &'static str {
        "Error"
    }

    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool {
        !no_grip
            && grip
                .as_object()
                .is_some_and(|object| object.preview_kind() == Some("Error") || kind == "Error")
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let object = grip.as_object().ok_or_else(|| Error::Malformed {
            rep: "Error",
            reason: format!("expected an object grip, got {}", grip.kind()),
        })?;
        let preview = object.preview.as_ref();
        let name = preview
            .and_then(|preview| preview.name.as_deref())
            .unwrap_or_else(|| object.class_name());

        let mut text = match (cx.mode(), preview.and_then(|preview| preview.message.as_deref())) {
            (Mode::Tiny, _) => name.to_string(),
            (_, Some(message)) => format!("{}: {}", name, message),
            (_, None) => name.to_string(),
        };
        if cx.mode() == Mode::Long {
            if let Some(stack) = preview.and_then(|preview| preview.stack.as_deref()) {
                text.push('\n');
                text.push_str(stack);
            }
        }

        Ok(Element::span()
            .class("objectBox-stackTrace")
            .actor(grip.actor())
            .child(cx.object_link(grip, None, vec![text.into()]))
            .into())
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::render;
    use crate::RenderOptions;
    use reps_types::{Grip, Mode};

    fn type_error() -> Grip {
        Grip::from_json(
            r#"{
                "type": "object",
                "class": "Error",
                "actor": "server1.conn1.child1/obj1020",
                "preview": {
                    "kind": "Error",
                    "name": "TypeError",
                    "message": "undefined is not a function",
                    "stack": "@debugger eval code:1:1\n"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_error_per_mode() {
        let grip = type_error();
        assert_eq!(
            render(&grip, &RenderOptions::default()).text(),
            "TypeError: undefined is not a function"
        );
        assert_eq!(
            render(&grip, &RenderOptions::default().with_mode(Mode::Tiny)).text(),
            "TypeError"
        );
        assert_eq!(
            render(&grip, &RenderOptions::default().with_mode(Mode::Long)).text(),
            "TypeError: undefined is not a function\n@debugger eval code:1:1\n"
        );
    }

    #[test]
    fn test_error_without_preview() {
        let grip = Grip::from_json(r#"{"type": "object", "class": "Error"}"#).unwrap();
        assert_eq!(render(&grip, &RenderOptions::default()).text(), "Error");
    }
}
