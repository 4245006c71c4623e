use crate::config::Limits;
use crate::options::{LinkTarget, RenderOptions};
use crate::registry::RepRegistry;
use crate::tree::{Element, Node};
use crate::Result;
use reps_types::{Grip, Mode};

/// A renderer for one kind of grip
///
/// Responsibilities:
/// - Claim the grips it knows how to display (`supports`)
/// - Produce a display tree honouring the render mode (`render`)
/// - Degrade to a minimal output when the preview is missing
pub trait Rep: Send + Sync {
    /// Stable rep name (e.g. "Grip", "StyleSheet")
    fn name(&self) -> &'static str;

    /// Whether this rep handles the grip.
    ///
    /// `kind` is the grip's runtime kind or the caller's override. With
    /// `no_grip` set, reps for object grips must decline so that only
    /// primitive reps match.
    fn supports(&self, grip: &Grip, kind: &str, no_grip: bool) -> bool;

    /// Render the grip
    fn render(&self, grip: &Grip, cx: &RenderContext<'_>) -> Result<Node>;
}

/// Everything a rep can consult while rendering
pub struct RenderContext<'a> {
    registry: &'a RepRegistry,
    options: &'a RenderOptions,
    depth: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(registry: &'a RepRegistry, options: &'a RenderOptions, depth: usize) -> Self {
        Self {
            registry,
            options,
            depth,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    pub fn limits(&self) -> &Limits {
        &self.options.limits
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Effective mode, forced to tiny once the nesting cap is reached
    pub fn mode(&self) -> Mode {
        if self.depth >= self.options.limits.max_depth {
            Mode::Tiny
        } else {
            self.options.mode()
        }
    }

    /// Title override for the value being rendered (never inherited by children)
    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    /// Render a nested value in tiny mode through the registry
    pub fn render_child(&self, grip: &Grip) -> Node {
        self.render_child_with(grip, Mode::Tiny)
    }

    pub fn render_child_with(&self, grip: &Grip, mode: Mode) -> Node {
        let options = self.options.for_child(mode);
        self.registry.render_at(grip, &options, self.depth + 1)
    }

    /// Wrap `children` with the caller's object link, if any.
    ///
    /// Without a link a single unclassed child is returned as is, anything
    /// else is grouped in a span.
    pub fn object_link(&self, object: &Grip, class_name: Option<&str>, children: Vec<Node>) -> Node {
        if let Some(link) = &self.options.object_link {
            return link(&LinkTarget { object, class_name }, children);
        }

        match class_name {
            None if children.len() == 1 => children.into_iter().next().unwrap_or(Node::Text(String::new())),
            Some(class) => Element::span().class(class).children(children).into(),
            None => Element::span().children(children).into(),
        }
    }
}
