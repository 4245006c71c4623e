use crate::formatters::{crop_string, escape_newlines, quote};
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::Result;
use reps_types::Grip;

/// Plain strings, quoted unless `use_quotes` is off
pub struct StringRep;

impl Rep for StringRep {
    fn name(&self) -> &'static str {
        "String"
    }

    fn supports(&self, grip: &Grip, _kind: &str, _no_grip: bool) -> bool {
        matches!(grip, Grip::String(_))
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let text = match grip {
            Grip::String(text) => text.as_str(),
            _ => "",
        };
        let options = cx.options();
        let text = crop_string(text, options.crop_limit.unwrap_or(0));
        let text = if options.use_quotes {
            quote(&text)
        } else {
            escape_newlines(&text)
        };

        Ok(Element::span()
            .class("objectBox objectBox-string")
            .child(text)
            .into())
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::render;
    use crate::RenderOptions;
    use reps_types::Grip;

    #[test]
    fn test_quoted_and_escaped() {
        let grip = Grip::from("a\nb");
        assert_eq!(render(&grip, &RenderOptions::default()).text(), r#""a\nb""#);

        let mut options = RenderOptions::default();
        options.use_quotes = false;
        assert_eq!(render(&grip, &options).text(), r"a\nb");
    }

    #[test]
    fn test_embedded_quotes_are_escaped() {
        let grip = Grip::from(r#"x", b: "y"#);
        assert_eq!(render(&grip, &RenderOptions::default()).text(), r#""x\", b: \"y""#);
    }

    #[test]
    fn test_newline_differs_from_escaped_newline() {
        let newline = render(&Grip::from("a\nb"), &RenderOptions::default()).text();
        let backslash_n = render(&Grip::from("a\\nb"), &RenderOptions::default()).text();
        assert_eq!(newline, r#""a\nb""#);
        assert_eq!(backslash_n, r#""a\\nb""#);
        assert_ne!(newline, backslash_n);
    }

    #[test]
    fn test_crop_limit() {
        let mut options = RenderOptions::default();
        options.crop_limit = Some(5);
        assert_eq!(render(&Grip::from("abcdefghij"), &options).text(), r#""ab…ij""#);
    }
}
