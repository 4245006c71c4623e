use crate::config::Limits;
use crate::tree::Node;
use reps_types::{Grip, Mode};
use std::fmt;
use std::rc::Rc;

/// What an object link wraps: the grip being rendered and the segment's class
#[derive(Debug, Clone, Copy)]
pub struct LinkTarget<'a> {
    pub object: &'a Grip,
    pub class_name: Option<&'a str>,
}

/// Wraps title and boundary segments, e.g. to make them clickable
pub type ObjectLink = Rc<dyn Fn(&LinkTarget<'_>, Vec<Node>) -> Node>;

/// Interaction hook receiving the grip of the node the user interacted with
pub type GripCallback = Rc<dyn Fn(&Grip)>;

/// Options threaded into every rep call.
///
/// Every field is optional. Built per render call by the caller.
#[derive(Clone)]
pub struct RenderOptions {
    pub mode: Option<Mode>,
    pub title: Option<String>,
    pub object_link: Option<ObjectLink>,
    pub on_dom_node_mouse_over: Option<GripCallback>,
    pub on_dom_node_mouse_out: Option<GripCallback>,
    pub on_inspect_icon_click: Option<GripCallback>,
    /// Crop plain strings to this many characters
    pub crop_limit: Option<usize>,
    pub use_quotes: bool,
    pub limits: Limits,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: None,
            title: None,
            object_link: None,
            on_dom_node_mouse_over: None,
            on_dom_node_mouse_out: None,
            on_inspect_icon_click: None,
            crop_limit: None,
            use_quotes: true,
            limits: Limits::default(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_object_link(
        mut self,
        link: impl Fn(&LinkTarget<'_>, Vec<Node>) -> Node + 'static,
    ) -> Self {
        self.object_link = Some(Rc::new(link));
        self
    }

    pub fn on_dom_node_mouse_over(mut self, callback: impl Fn(&Grip) + 'static) -> Self {
        self.on_dom_node_mouse_over = Some(Rc::new(callback));
        self
    }

    pub fn on_dom_node_mouse_out(mut self, callback: impl Fn(&Grip) + 'static) -> Self {
        self.on_dom_node_mouse_out = Some(Rc::new(callback));
        self
    }

    pub fn on_inspect_icon_click(mut self, callback: impl Fn(&Grip) + 'static) -> Self {
        self.on_inspect_icon_click = Some(Rc::new(callback));
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Effective mode; unset behaves as short
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    /// Options for a nested value: tiny mode, no title, no object link.
    /// Interaction hooks and limits carry over.
    pub fn for_child(&self, mode: Mode) -> Self {
        Self {
            mode: Some(mode),
            title: None,
            object_link: None,
            crop_limit: None,
            use_quotes: true,
            ..self.clone()
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("mode", &self.mode)
            .field("title", &self.title)
            .field("object_link", &self.object_link.is_some())
            .field("on_dom_node_mouse_over", &self.on_dom_node_mouse_over.is_some())
            .field("on_dom_node_mouse_out", &self.on_dom_node_mouse_out.is_some())
            .field("on_inspect_icon_click", &self.on_inspect_icon_click.is_some())
            .field("crop_limit", &self.crop_limit)
            .field("use_quotes", &self.use_quotes)
            .field("limits", &self.limits)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_mode_is_short() {
        assert_eq!(RenderOptions::default().mode(), Mode::Short);
        assert_eq!(RenderOptions::new().with_mode(Mode::Long).mode(), Mode::Long);
    }

    #[test]
    fn test_child_options_drop_title_and_link() {
        let options = RenderOptions::new()
            .with_title("CustomTitle")
            .with_object_link(|_, children| children.into_iter().next().unwrap_or(Node::from("")))
            .on_inspect_icon_click(|_| {});

        let child = options.for_child(Mode::Tiny);
        assert_eq!(child.mode, Some(Mode::Tiny));
        assert!(child.title.is_none());
        assert!(child.object_link.is_none());
        assert!(child.on_inspect_icon_click.is_some());
    }
}
