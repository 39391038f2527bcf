//! Experimental pilot implementation of the Masonry grid engine MVP.
//!
//! A pure layout computation for pinned-item ("featured") grids: items pack
//! shortest-column-first, featured items span the full row width and
//! re-baseline every column. The modules follow the module orchestrator
//! pattern (public `mod.rs`, private `core`) so the code can be promoted
//! into a production crate without major surgery.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod measure;
pub mod metrics;
pub mod registry;
pub mod store;

pub use error::{MasonryError, Result};
pub use geometry::{Rect, Size};
pub use layout::{GridItem, HeaderedSource, ItemSource, LayoutSolution, MasonryConfig, solve};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use measure::{LabelMetrics, display_width, wrap_label};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use registry::{LayoutSignature, PlacementRegistry};
pub use store::{ImageInfo, ImageStore, MemoryImageStore};
