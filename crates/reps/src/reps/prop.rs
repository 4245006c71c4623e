use crate::traits::RenderContext;
use crate::tree::{Element, Node};
use reps_types::{Grip, PropertyDescriptor};

pub(crate) const MORE: &str = "more…";

/// `name: value`, followed by `, ` when another entry comes after it
pub(crate) fn prop(name: Node, value: Node, delim: bool) -> Node {
    let mut element = Element::span()
        .child(name)
        .child(Element::span().class("objectEqual").child(": "))
        .child(value);
    if delim {
        element = element.child(Element::span().class("objectComma").child(", "));
    }
    element.into()
}

pub(crate) fn prop_name(name: &str) -> Node {
    Element::span().class("nodeName").child(name).into()
}

/// Value of a property; accessors without a safe getter value show their kind
pub(crate) fn descriptor_value(cx: &RenderContext<'_>, descriptor: &PropertyDescriptor) -> Node {
    if let Some(grip) = descriptor.grip() {
        return cx.render_child(grip);
    }

    let label = match (descriptor.has_getter(), descriptor.has_setter()) {
        (true, true) => "Getter & Setter",
        (false, true) => "Setter",
        _ => "Getter",
    };
    Element::span()
        .class("objectBox objectBox-accessor")
        .child(label)
        .into()
}

/// Title segment, linked to the rendered object
pub(crate) fn title(cx: &RenderContext<'_>, object: &Grip, text: &str) -> Node {
    cx.object_link(object, Some("objectTitle"), vec![text.into()])
}

/// Elision marker, linked to the rendered object
pub(crate) fn caption(cx: &RenderContext<'_>, object: &Grip, text: String) -> Node {
    Element::span()
        .class("caption")
        .child(cx.object_link(object, None, vec![text.into()]))
        .into()
}
