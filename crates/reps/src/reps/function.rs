use crate::formatters::crop_string;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::{Grip, Mode, ObjectGrip};

/// `function name()`, `async function name()`, `function* name()`.
///
/// Tiny mode drops the keyword: `name()`.
pub struct Function;

impl Rep for Function {
    fn name(&self) -> &'static str {
        "Function"
    }

    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool {
        !no_grip && grip.is_grip() && kind == "Function"
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let object = grip.as_object().ok_or_else(|| Error::Malformed {
            rep: "Function",
            reason: format!("expected an object grip, got {}", grip.kind()),
        })?;

        let name = crop_string(function_name(object), cx.limits().function_chars);
        let mut children: Vec<Node> = Vec::new();
        if cx.mode() != Mode::Tiny {
            children.push(keyword(object).into());
        }
        children.push(format!("{}()", name).into());

        Ok(Element::span()
            .class("objectBox objectBox-function")
            .actor(grip.actor())
            .child(cx.object_link(grip, Some("objectTitle"), children))
            .into())
    }
}

/// Name the user sees, preferring explicit display names
fn function_name(object: &ObjectGrip) -> &str {
    object
        .user_display_name
        .as_deref()
        .or(object.display_name.as_deref())
        .or(object.name.as_deref())
        .unwrap_or_default()
}

fn keyword(object: &ObjectGrip) -> &'static str {
    if object.is_async.unwrap_or(false) {
        "async function "
    } else if object.is_generator.unwrap_or(false) {
        "function* "
    } else {
        "function "
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::render;
    use crate::RenderOptions;
    use reps_types::{Grip, Mode};

    fn function(extra: serde_json::Value) -> Grip {
        let mut value = serde_json::json!({
            "type": "object",
            "class": "Function",
            "actor": "server1.conn6.obj35"
        });
        if let (Some(map), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
            map.extend(extra.clone());
        }
        Grip::from_value(value).unwrap()
    }

    #[test]
    fn test_named_function() {
        let grip = function(serde_json::json!({"name": "testName", "displayName": "testName"}));
        assert_eq!(render(&grip, &RenderOptions::default()).text(), "function testName()");
        assert_eq!(
            render(&grip, &RenderOptions::default().with_mode(Mode::Tiny)).text(),
            "testName()"
        );
    }

    #[test]
    fn test_user_display_name_wins() {
        let grip = function(serde_json::json!({"name": "a", "userDisplayName": "Custom"}));
        assert_eq!(render(&grip, &RenderOptions::default()).text(), "function Custom()");
    }

    #[test]
    fn test_anonymous_async_and_generator() {
        assert_eq!(
            render(&function(serde_json::json!({})), &RenderOptions::default()).text(),
            "function ()"
        );
        assert_eq!(
            render(&function(serde_json::json!({"name": "f", "isAsync": true})), &RenderOptions::default()).text(),
            "async function f()"
        );
        assert_eq!(
            render(&function(serde_json::json!({"name": "g", "isGenerator": true})), &RenderOptions::default()).text(),
            "function* g()"
        );
    }
}
