use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::object::ObjectGrip;
use crate::Result;

/// A debuggee value as sent by the inspection protocol.
///
/// Plain JSON primitives are values the server already resolved. Anything
/// else carries a `"type"` tag and is decoded into [`TaggedGrip`], or kept
/// as [`RawGrip`] when the tag is not one this crate knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grip {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Tagged(TaggedGrip),
    Other(RawGrip),
}

/// Values the protocol cannot send as plain JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaggedGrip {
    #[serde(rename = "undefined")]
    Undefined,
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "Infinity")]
    Infinity,
    #[serde(rename = "-Infinity")]
    NegativeInfinity,
    #[serde(rename = "NaN")]
    NaN,
    #[serde(rename = "-0")]
    NegativeZero,
    #[serde(rename = "symbol")]
    Symbol {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    #[serde(rename = "longString")]
    LongString(LongStringGrip),
    #[serde(rename = "object")]
    Object(Box<ObjectGrip>),
}

const KNOWN_TAGS: &[&str] = &[
    "undefined",
    "null",
    "Infinity",
    "-Infinity",
    "NaN",
    "-0",
    "symbol",
    "longString",
    "object",
];

/// Tagged value of a type this crate does not decode, kept exactly as sent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawGrip(Value);

impl RawGrip {
    /// The `"type"` tag the server sent
    pub fn type_tag(&self) -> &str {
        self.0.get("type").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RawGrip {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value.get("type").and_then(Value::as_str) {
            Some(tag) if KNOWN_TAGS.contains(&tag) => {
                Err(de::Error::custom(format!("malformed `{}` grip", tag)))
            }
            Some(_) => Ok(RawGrip(value)),
            None => Err(de::Error::custom("grip object without a `type` tag")),
        }
    }
}

/// A string too long to be sent in a single packet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongStringGrip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    pub initial: String,
    pub length: usize,
}

impl Grip {
    /// Decode a grip from protocol JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a grip from an already parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn undefined() -> Self {
        Grip::Tagged(TaggedGrip::Undefined)
    }

    pub fn object(object: ObjectGrip) -> Self {
        Grip::Tagged(TaggedGrip::Object(Box::new(object)))
    }

    /// True for values that stand in for a live debuggee object (they own an actor)
    pub fn is_grip(&self) -> bool {
        matches!(
            self,
            Grip::Tagged(TaggedGrip::Object(_)) | Grip::Tagged(TaggedGrip::LongString(_))
        )
    }

    pub fn as_object(&self) -> Option<&ObjectGrip> {
        match self {
            Grip::Tagged(TaggedGrip::Object(object)) => Some(object),
            _ => None,
        }
    }

    pub fn as_long_string(&self) -> Option<&LongStringGrip> {
        match self {
            Grip::Tagged(TaggedGrip::LongString(long_string)) => Some(long_string),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Grip::Tagged(TaggedGrip::Undefined))
    }

    /// Runtime kind used for rep dispatch.
    ///
    /// Object grips report their class, tagged primitives their type tag and
    /// plain primitives their JavaScript `typeof`.
    pub fn kind(&self) -> &str {
        match self {
            Grip::Null => "null",
            Grip::Bool(_) => "boolean",
            Grip::Number(_) => "number",
            Grip::String(_) => "string",
            Grip::Tagged(tagged) => match tagged {
                TaggedGrip::Undefined => "undefined",
                TaggedGrip::Null => "null",
                TaggedGrip::Infinity => "Infinity",
                TaggedGrip::NegativeInfinity => "-Infinity",
                TaggedGrip::NaN => "NaN",
                TaggedGrip::NegativeZero => "-0",
                TaggedGrip::Symbol { .. } => "symbol",
                TaggedGrip::LongString(_) => "longString",
                TaggedGrip::Object(object) => object.class_name(),
            },
            Grip::Other(raw) => raw.type_tag(),
        }
    }

    /// Actor identity of the value, when it has one
    pub fn actor(&self) -> Option<&str> {
        match self {
            Grip::Tagged(TaggedGrip::Object(object)) => object.actor.as_deref(),
            Grip::Tagged(TaggedGrip::LongString(long_string)) => long_string.actor.as_deref(),
            _ => None,
        }
    }

    /// Protocol JSON of the value, used when no rep can display it
    pub fn raw(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.kind().to_string())
    }
}

impl From<&str> for Grip {
    fn from(value: &str) -> Self {
        Grip::String(value.to_string())
    }
}

impl From<f64> for Grip {
    fn from(value: f64) -> Self {
        Grip::Number(value)
    }
}

impl From<bool> for Grip {
    fn from(value: bool) -> Self {
        Grip::Bool(value)
    }
}

/// Keep a JSON `null` as [`Grip::Null`] instead of collapsing it into `None`.
///
/// Fields using this must also be `#[serde(default)]` so that an absent key
/// still yields `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Grip>, D::Error>
where
    D: Deserializer<'de>,
{
    Grip::deserialize(deserializer).map(Some)
}
