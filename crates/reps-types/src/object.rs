use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::grip::{present, Grip};

/// DOM `nodeType` values the renderers care about
pub mod node_type {
    pub const ELEMENT_NODE: u32 = 1;
    pub const ATTRIBUTE_NODE: u32 = 2;
    pub const TEXT_NODE: u32 = 3;
    pub const COMMENT_NODE: u32 = 8;
    pub const DOCUMENT_NODE: u32 = 9;
    pub const DOCUMENT_FRAGMENT_NODE: u32 = 11;
}

/// Descriptor of a debuggee object (`{"type": "object", ...}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectGrip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_property_length: Option<usize>,

    // RegExp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_string: Option<String>,

    // Function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_async: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_generator: Option<bool>,

    // Promise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promise_state: Option<PromiseState>,

    // Proxy
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub proxy_target: Option<Grip>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub proxy_handler: Option<Grip>,
}

impl ObjectGrip {
    /// Class name, `"Object"` when the server did not send one
    pub fn class_name(&self) -> &str {
        self.class.as_deref().unwrap_or("Object")
    }

    pub fn preview_kind(&self) -> Option<&str> {
        self.preview.as_ref().and_then(|p| p.kind.as_deref())
    }

    /// DOM node type, when the preview describes a DOM node
    pub fn node_type(&self) -> Option<u32> {
        self.preview
            .as_ref()
            .filter(|p| p.kind.as_deref() == Some("DOMNode"))
            .and_then(|p| p.node_type)
    }

    /// Whether the node is attached to a live document
    pub fn is_connected(&self) -> bool {
        self.preview
            .as_ref()
            .and_then(|p| p.is_connected)
            .unwrap_or(false)
    }
}

/// Partial snapshot of an object sent along with its grip.
///
/// Which fields are present depends on `kind`; every field is optional so a
/// truncated preview still decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    // Object
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub own_properties: IndexMap<String, PropertyDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_properties_length: Option<usize>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub safe_getter_values: IndexMap<String, PropertyDescriptor>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub wrapped_value: Option<Grip>,

    // ArrayLike
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Grip>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    // MapLike
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<(Grip, Grip)>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,

    // ObjectWithURL / ObjectWithText / Document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    // Date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Grip>,

    // DOMNode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_connected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub value: Option<Grip>,

    // Error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// A property entry of an object preview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub value: Option<Grip>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub getter_value: Option<Grip>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub get: Option<Grip>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub set: Option<Grip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enumerable: Option<bool>,
}

impl PropertyDescriptor {
    pub fn with_value(value: Grip) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Displayed value: the data value, else the value a safe getter returned
    pub fn grip(&self) -> Option<&Grip> {
        self.value.as_ref().or(self.getter_value.as_ref())
    }

    pub fn has_getter(&self) -> bool {
        self.get.as_ref().is_some_and(|g| !g.is_undefined())
    }

    pub fn has_setter(&self) -> bool {
        self.set.as_ref().is_some_and(|s| !s.is_undefined())
    }
}

/// Settlement state of a Promise grip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromiseState {
    pub state: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub value: Option<Grip>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub reason: Option<Grip>,
}
