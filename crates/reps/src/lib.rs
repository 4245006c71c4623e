//! Reps: compact, interactive representations of debuggee values.
//!
//! A [`Grip`] received from the inspection protocol is dispatched through a
//! [`RepRegistry`] to the first [`Rep`] that supports it. The rep renders a
//! [`Node`] display tree whose text is a one-line summary such as
//! `Object { a: "a", b: 1, more… }`.
//!
//! ```ignore
//! use reps::{render, Grip, Mode, RenderOptions};
//!
//! let grip = Grip::from_json(json)?;
//! let node = render(&grip, &RenderOptions::new().with_mode(Mode::Long));
//! println!("{}", node.text());
//! ```

// Error types
pub mod error;

// Truncation table
pub mod config;

// Display tree
pub mod tree;

// Render options
pub mod options;

// Shared formatting helpers
pub mod formatters;

// Rep trait and render context
pub mod traits;

// Rep registry and render boundary
pub mod registry;

// Rep implementations
pub mod reps;

pub use config::{Limits, ModeLimits};
pub use error::{Error, Result};
pub use options::{GripCallback, LinkTarget, ObjectLink, RenderOptions};
pub use registry::{get_rep, render, RepRegistry, FAILURE_TEXT, FAILURE_TITLE};
pub use traits::{RenderContext, Rep};
pub use tree::{Element, Event, Node};

pub use reps_types::{Grip, Mode, ObjectGrip, Preview, PropertyDescriptor, RawGrip, TaggedGrip};
