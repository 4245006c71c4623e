//! Reps for primitives with a fixed textual form.

use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::Result;
use reps_types::{Grip, TaggedGrip};

fn literal(class: &str, text: impl Into<String>) -> Node {
    Element::span().class(class).child(text.into()).into()
}

pub struct Undefined;

impl Rep for Undefined {
    fn name(&self) -> &'static str {
        "Undefined"
    }

    fn supports(&self, _grip: &Grip, kind: &str, _no_grip: bool) -> bool {
        kind == "undefined"
    }

    fn render(&self, _grip: &Grip, _cx: &RenderContext<'_>) -> Result<Node> {
        Ok(literal("objectBox objectBox-undefined", "undefined"))
    }
}

/// Both the plain JSON `null` and the tagged `{"type": "null"}`
pub struct Null;

impl Rep for Null {
    fn name(&self) -> &'static str {
        "Null"
    }

    fn supports(&self, _grip: &Grip, kind: &str, _no_grip: bool) -> bool {
        kind == "null"
    }

    fn render(&self, _grip: &Grip, _cx: &RenderContext<'_>) -> Result<Node> {
        Ok(literal("objectBox objectBox-null", "null"))
    }
}

/// `Symbol(description)`
pub struct Symbol;

impl Rep for Symbol {
    fn name(&self) -> &'static str {
        "Symbol"
    }

    fn supports(&self, _grip: &Grip, kind: &str, _no_grip: bool) -> bool {
        kind == "symbol"
    }

    fn render(&self, grip: &Grip, _cx: &RenderContext<'_>) -> Result<Node> {
        let name = match grip {
            Grip::Tagged(TaggedGrip::Symbol { name }) => name.as_deref().unwrap_or_default(),
            _ => "",
        };
        Ok(literal("objectBox objectBox-symbol", format!("Symbol({})", name)))
    }
}

pub struct InfinityRep;

impl Rep for InfinityRep {
    fn name(&self) -> &'static str {
        "Infinity"
    }

    fn supports(&self, _grip: &Grip, kind: &str, _no_grip: bool) -> bool {
        matches!(kind, "Infinity" | "-Infinity")
    }

    fn render(&self, grip: &Grip, _cx: &RenderContext<'_>) -> Result<Node> {
        Ok(literal("objectBox objectBox-number", grip.kind()))
    }
}

pub struct NaN;

impl Rep for NaN {
    fn name(&self) -> &'static str {
        "NaN"
    }

    fn supports(&self, _grip: &Grip, kind: &str, _no_grip: bool) -> bool {
        kind == "NaN"
    }

    fn render(&self, _grip: &Grip, _cx: &RenderContext<'_>) -> Result<Node> {
        Ok(literal("objectBox objectBox-nan", "NaN"))
    }
}
