//! Testing infrastructure for reps integration tests.
//!
//! This crate provides:
//! - `fixtures`: Grip stubs recorded from a debugger server, grouped by rep
//! - `assertions`: Grip-level checks shared by the render tests

pub mod assertions;
pub mod fixtures;

pub use fixtures::{stub, StubFiles};
