use crate::formatters::format_number;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::Result;
use reps_types::{Grip, TaggedGrip};

/// Numbers and booleans
pub struct NumberRep;

impl Rep for NumberRep {
    fn name(&self) -> &'static str {
        "Number"
    }

    fn supports(&self, _grip: &Grip, kind: &str, _no_grip: bool) -> bool {
        matches!(kind, "number" | "boolean" | "-0")
    }

    fn render(&self, grip: &Grip, _cx: &RenderContext<'_>) -> Result<Node> {
        let text = match grip {
            Grip::Bool(value) => value.to_string(),
            Grip::Number(value) => format_number(*value),
            Grip::Tagged(TaggedGrip::NegativeZero) => "-0".to_string(),
            other => other.raw(),
        };

        Ok(Element::span()
            .class("objectBox objectBox-number")
            .child(text)
            .into())
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::render;
    use crate::RenderOptions;
    use reps_types::Grip;

    fn text(json: &str) -> String {
        render(&Grip::from_json(json).unwrap(), &RenderOptions::default()).text()
    }

    #[test]
    fn test_numbers_and_booleans() {
        assert_eq!(text("42"), "42");
        assert_eq!(text("1.5"), "1.5");
        assert_eq!(text(r#"{"type": "-0"}"#), "-0");
        assert_eq!(text("true"), "true");
        assert_eq!(text("false"), "false");
    }
}
