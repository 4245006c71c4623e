use crate::formatters::{crop_string, escape_newlines, quote, sanitize, ELLIPSIS};
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::Grip;

/// String only partially sent by the server.
///
/// The initial substring is shown followed by `…` when it does not cover
/// the full length.
pub struct LongString;

impl Rep for LongString {
    fn name(&self) -> &'static str {
        "LongString"
    }

    fn supports(&self, grip: &Grip, _kind: &str, no_grip: bool) -> bool {
        !no_grip && grip.as_long_string().is_some()
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let long_string = grip.as_long_string().ok_or_else(|| Error::Malformed {
            rep: "LongString",
            reason: format!("expected a long string grip, got {}", grip.kind()),
        })?;
        let options = cx.options();

        let mut text = match options.crop_limit {
            Some(limit) => crop_string(&long_string.initial, limit),
            None => sanitize(&long_string.initial),
        };
        // `length` counts UTF-16 code units
        if long_string.initial.encode_utf16().count() < long_string.length {
            text.push_str(ELLIPSIS);
        }
        let text = if options.use_quotes {
            quote(&text)
        } else {
            escape_newlines(&text)
        };

        Ok(Element::span()
            .class("objectBox objectBox-string")
            .actor(grip.actor())
            .child(text)
            .into())
    }
}
