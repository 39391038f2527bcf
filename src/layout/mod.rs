//! Layout module orchestrator following the module specification.
//!
//! Downstream code and demos import layout types from here while the
//! implementation details live in the private `core` module.

mod core;
pub mod source;

pub use core::{GridItem, LayoutSolution, MasonryConfig, solve};
pub use source::{HeaderedSource, ItemSource};
