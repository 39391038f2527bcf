//! Geometry module orchestrator following the module specification.
//!
//! Downstream code imports geometry types from here while the implementation
//! details live in the private `core` module.

mod core;

pub use core::{Rect, Size};
