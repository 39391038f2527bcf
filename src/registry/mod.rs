//! Registry module orchestrator following the module specification.

mod core;

pub use core::{LayoutSignature, PlacementRegistry};
