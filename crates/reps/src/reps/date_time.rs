use super::prop::title;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::{Grip, TaggedGrip};

const INVALID_DATE: &str = "Invalid Date";

/// `Date 2016-03-30T21:17:24.859Z`
pub struct DateTime;

impl Rep for DateTime {
    fn name(&self) -> &'static str {
        "DateTime"
    }

    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool {
        !no_grip
            && kind == "Date"
            && grip.as_object().is_some_and(|object| object.preview.is_some())
    }

    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node> {
        let timestamp = grip
            .as_object()
            .and_then(|object| object.preview.as_ref())
            .and_then(|preview| preview.timestamp.as_ref())
            .ok_or(Error::MissingField {
                rep: "DateTime",
                field: "preview.timestamp",
            })?;

        Ok(Element::span()
            .class("objectBox")
            .actor(grip.actor())
            .child(title(cx, grip, "Date "))
            .child(Element::span().child(format_timestamp(timestamp)))
            .into())
    }
}

/// ISO 8601 form of a millisecond timestamp grip, UTC
fn format_timestamp(timestamp: &Grip) -> String {
    let millis = match timestamp {
        Grip::Number(millis) if millis.is_finite() => *millis,
        Grip::Tagged(TaggedGrip::NegativeZero) => 0.0,
        _ => return INVALID_DATE.to_string(),
    };

    chrono::DateTime::from_timestamp_millis(millis.trunc() as i64)
        .map(|date| date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
