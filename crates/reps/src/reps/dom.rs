use crate::traits::RenderContext;
use crate::tree::{Element, Event, Node};
use reps_types::{Grip, ObjectGrip};

const INSPECT_TITLE: &str = "Click to select the node in the inspector";

/// Box shared by DOM node reps.
///
/// Hover hooks and the inspect icon are only attached to nodes connected to
/// a live document; a detached node cannot be highlighted or selected.
pub(crate) fn node_box(cx: &RenderContext<'_>, grip: &Grip, content: Vec<Node>) -> Node {
    let options = cx.options();
    let mut element = Element::span()
        .class("objectBox objectBox-node")
        .actor(grip.actor());

    if !grip.as_object().is_some_and(ObjectGrip::is_connected) {
        return element.child(cx.object_link(grip, None, content)).into();
    }

    if let Some(callback) = &options.on_dom_node_mouse_over {
        let (callback, node) = (callback.clone(), grip.clone());
        element = element.on(Event::MouseOver, move || callback(&node));
    }
    if let Some(callback) = &options.on_dom_node_mouse_out {
        let (callback, node) = (callback.clone(), grip.clone());
        element = element.on(Event::MouseOut, move || callback(&node));
    }

    element = element.child(cx.object_link(grip, None, content));

    if let Some(callback) = &options.on_inspect_icon_click {
        let (callback, node) = (callback.clone(), grip.clone());
        element = element.child(
            Element::new("svg")
                .class("open-inspector")
                .attr("title", INSPECT_TITLE)
                .on(Event::Click, move || callback(&node)),
        );
    }

    element.into()
}
