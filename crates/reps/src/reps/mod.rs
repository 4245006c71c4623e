//! Rep implementations, one module per grip kind.

mod dom;
mod prop;

pub mod attribute;
pub mod comment_node;
pub mod date_time;
pub mod document;
pub mod element_node;
pub mod error;
pub mod function;
pub mod grip;
pub mod grip_array;
pub mod grip_map;
pub mod literal;
pub mod long_string;
pub mod number;
pub mod object_with_text;
pub mod object_with_url;
pub mod promise;
pub mod regexp;
pub mod string;
pub mod stylesheet;
pub mod text_node;
pub mod window;

pub use attribute::Attribute;
pub use comment_node::CommentNode;
pub use date_time::DateTime;
pub use document::Document;
pub use element_node::ElementNode;
pub use error::ErrorRep;
pub use function::Function;
pub use grip::GripRep;
pub use grip_array::GripArray;
pub use grip_map::GripMap;
pub use literal::{InfinityRep, NaN, Null, Symbol, Undefined};
pub use long_string::LongString;
pub use number::NumberRep;
pub use object_with_text::ObjectWithText;
pub use object_with_url::ObjectWithUrl;
pub use promise::Promise;
pub use regexp::RegExp;
pub use string::StringRep;
pub use stylesheet::StyleSheet;
pub use text_node::TextNode;
pub use window::Window;
