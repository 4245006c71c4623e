use crate::options::RenderOptions;
use crate::reps;
use crate::traits::{RenderContext, Rep};
use crate::tree::{Element, Node};
use crate::{Error, Result};
use reps_types::Grip;
use std::sync::LazyLock;

pub const FAILURE_TEXT: &str = "Invalid object";
pub const FAILURE_TITLE: &str = "This object could not be rendered";

static STANDARD: LazyLock<RepRegistry> = LazyLock::new(RepRegistry::standard);

/// Ordered list of reps; the first one supporting a grip wins
pub struct RepRegistry {
    reps: Vec<Box<dyn Rep>>,
}

impl Default for RepRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl RepRegistry {
    pub fn new(reps: Vec<Box<dyn Rep>>) -> Self {
        Self { reps }
    }

    /// Every built-in rep, most specific first.
    ///
    /// Kind-specific reps must come before the generic object rep, and grip
    /// reps before primitive ones.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(reps::RegExp),
            Box::new(reps::StyleSheet),
            Box::new(reps::DateTime),
            Box::new(reps::CommentNode),
            Box::new(reps::ElementNode),
            Box::new(reps::TextNode),
            Box::new(reps::Attribute),
            Box::new(reps::LongString),
            Box::new(reps::Function),
            Box::new(reps::Promise),
            Box::new(reps::Document),
            Box::new(reps::Window),
            Box::new(reps::ObjectWithText),
            Box::new(reps::ObjectWithUrl),
            Box::new(reps::ErrorRep),
            Box::new(reps::GripArray),
            Box::new(reps::GripMap),
            Box::new(reps::GripRep),
            Box::new(reps::Undefined),
            Box::new(reps::Null),
            Box::new(reps::StringRep),
            Box::new(reps::NumberRep),
            Box::new(reps::Symbol),
            Box::new(reps::InfinityRep),
            Box::new(reps::NaN),
        ])
    }

    /// Shared registry holding the built-in reps
    pub fn global() -> &'static RepRegistry {
        &STANDARD
    }

    /// Rep names in priority order
    pub fn names(&self) -> Vec<&'static str> {
        self.reps.iter().map(|rep| rep.name()).collect()
    }

    pub fn select(&self, grip: &Grip) -> Option<&dyn Rep> {
        self.select_with(grip, None, false)
    }

    /// Select a rep, optionally overriding the grip kind or refusing object grips
    pub fn select_with(&self, grip: &Grip, kind: Option<&str>, no_grip: bool) -> Option<&dyn Rep> {
        let kind = kind.unwrap_or_else(|| grip.kind());
        self.reps
            .iter()
            .find(|rep| rep.supports(grip, kind, no_grip))
            .map(|rep| &**rep)
    }

    /// Render without the failure boundary: rep errors and unsupported kinds
    /// are returned to the caller
    pub fn try_render(&self, grip: &Grip, options: &RenderOptions) -> Result<Node> {
        let rep = self.select(grip).ok_or_else(|| Error::Unsupported {
            kind: grip.kind().to_string(),
        })?;
        rep.render(grip, &RenderContext::new(self, options, 0))
    }

    /// Render a grip; never fails.
    ///
    /// Unsupported grips become a raw token and rep errors the
    /// "Invalid object" token, so one bad value cannot break a whole view.
    pub fn render(&self, grip: &Grip, options: &RenderOptions) -> Node {
        self.render_at(grip, options, 0)
    }

    pub(crate) fn render_at(&self, grip: &Grip, options: &RenderOptions, depth: usize) -> Node {
        let Some(rep) = self.select(grip) else {
            tracing::debug!(kind = grip.kind(), "no rep supports grip, rendering raw");
            return raw_node(grip);
        };

        match rep.render(grip, &RenderContext::new(self, options, depth)) {
            Ok(node) => node,
            Err(err) => {
                tracing::warn!(rep = rep.name(), actor = ?grip.actor(), "failed to render grip: {}", err);
                failure_node()
            }
        }
    }
}

fn raw_node(grip: &Grip) -> Node {
    Element::span()
        .class("objectBox objectBox-raw")
        .child(grip.raw())
        .into()
}

fn failure_node() -> Node {
    Element::span()
        .class("objectBox objectBox-failure")
        .attr("title", FAILURE_TITLE)
        .child(FAILURE_TEXT)
        .into()
}

/// Rep the shared registry selects for `grip`
pub fn get_rep(grip: &Grip) -> Option<&'static dyn Rep> {
    RepRegistry::global().select(grip)
}

/// Render `grip` with the shared registry
pub fn render(grip: &Grip, options: &RenderOptions) -> Node {
    RepRegistry::global().render(grip, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reps_types::Mode;

    struct Fails;

    impl Rep for Fails {
        fn name(&self) -> &'static str {
            "Fails"
        }

        fn supports(&self, _grip: &Grip, kind: &str, _no_grip: bool) -> bool {
            kind == "Broken"
        }

        fn render(&self, _grip: &Grip, _cx: &RenderContext<'_>) -> Result<Node> {
            Err(Error::Malformed {
                rep: "Fails",
                reason: "always".to_string(),
            })
        }
    }

    fn broken() -> Grip {
        Grip::from_json(r#"{"type": "object", "class": "Broken"}"#).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let registry = RepRegistry::new(vec![Box::new(Fails), Box::new(reps::GripRep)]);
        assert_eq!(registry.select(&broken()).map(|r| r.name()), Some("Fails"));

        let registry = RepRegistry::new(vec![Box::new(reps::GripRep), Box::new(Fails)]);
        assert_eq!(registry.select(&broken()).map(|r| r.name()), Some("Grip"));
    }

    #[test]
    fn test_kind_override() {
        let registry = RepRegistry::new(vec![Box::new(Fails), Box::new(reps::GripRep)]);
        let plain = Grip::from_json(r#"{"type": "object", "class": "Object"}"#).unwrap();
        assert_eq!(
            registry.select_with(&plain, Some("Broken"), false).map(|r| r.name()),
            Some("Fails")
        );
    }

    #[test]
    fn test_rep_error_becomes_failure_token() {
        let registry = RepRegistry::new(vec![Box::new(Fails)]);
        let node = registry.render(&broken(), &RenderOptions::default());

        assert_eq!(node.text(), FAILURE_TEXT);
        let element = node.as_element().unwrap();
        assert!(element.has_class("objectBox-failure"));
        assert_eq!(element.attributes.get("title").map(String::as_str), Some(FAILURE_TITLE));

        let err = registry.try_render(&broken(), &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Malformed { rep: "Fails", .. }));
    }

    #[test]
    fn test_unsupported_grip_renders_raw() {
        let registry = RepRegistry::new(Vec::new());
        let grip = Grip::from_json(r#"{"type": "NaN"}"#).unwrap();

        assert!(registry.select(&grip).is_none());
        assert_eq!(registry.render(&grip, &RenderOptions::default()).text(), r#"{"type":"NaN"}"#);
        assert!(matches!(
            registry.try_render(&grip, &RenderOptions::default()),
            Err(Error::Unsupported { .. })
        ));
    }

    #[test]
    fn test_no_grip_leaves_primitives_only() {
        let registry = RepRegistry::standard();
        let object = Grip::from_json(r#"{"type": "object", "class": "Object"}"#).unwrap();
        assert!(registry.select_with(&object, None, true).is_none());
        assert_eq!(
            registry.select_with(&Grip::from("a"), None, true).map(|r| r.name()),
            Some("String")
        );
    }

    #[test]
    fn test_depth_cap_forces_tiny() {
        let registry = RepRegistry::standard();
        let options = RenderOptions::default().with_mode(Mode::Long);
        let grip = Grip::from_json(
            r#"{"type": "object", "class": "Object", "preview": {"kind": "Object", "ownProperties": {"a": {"value": 1}}}}"#,
        )
        .unwrap();

        let cx = RenderContext::new(&registry, &options, options.limits.max_depth);
        assert_eq!(cx.mode(), Mode::Tiny);
        assert_eq!(registry.render_at(&grip, &options, options.limits.max_depth).text(), "Object");
        assert_eq!(registry.render_at(&grip, &options, 0).text(), "Object { a: 1 }");
    }

    #[test]
    fn test_standard_order_ends_with_primitives() {
        let names = RepRegistry::global().names();
        let grip = names.iter().position(|n| *n == "Grip").unwrap();
        let style_sheet = names.iter().position(|n| *n == "StyleSheet").unwrap();
        let string = names.iter().position(|n| *n == "String").unwrap();
        assert!(style_sheet < grip);
        assert!(grip < string);
    }
}
