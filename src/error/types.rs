use thiserror::Error;

/// Unified result type for the masonry MVP crate.
pub type Result<T> = std::result::Result<T, MasonryError>;

/// Precondition violations rejected at the crate boundary. The packing loop
/// itself is total over validated input and cannot fail.
#[derive(Debug, Error)]
pub enum MasonryError {
    #[error("grid requires at least one column")]
    ZeroColumns,
    #[error("container width {0} leaves no room for columns")]
    InvalidContainerWidth(f32),
    #[error("item {index}: {field} is {value}, expected a finite non-negative value")]
    InvalidItem {
        index: usize,
        field: &'static str,
        value: f32,
    },
    #[error("item index {0} is out of bounds")]
    ItemOutOfBounds(usize),
}
