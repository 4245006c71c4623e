pub mod error;
pub mod grip;
pub mod mode;
pub mod object;

pub use error::{Error, Result};
pub use grip::{Grip, LongStringGrip, RawGrip, TaggedGrip};
pub use mode::Mode;
pub use object::{node_type, ObjectGrip, Preview, PromiseState, PropertyDescriptor};
