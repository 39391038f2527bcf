//! Capability interface between the packer and the caller-owned item data.
//!
//! Hosting view layers hand layout objects a delegate that answers per-index
//! questions. `ItemSource` is the explicit equivalent: the packer pulls
//! metadata by index and never retains the source.

use super::core::GridItem;

pub trait ItemSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Metadata for the item at `index`. Callers only pass `index < len()`.
    fn item(&self, index: usize) -> GridItem;

    /// Height of the header preceding all items, if any.
    fn header_height(&self) -> Option<f32> {
        None
    }
}

impl ItemSource for [GridItem] {
    fn len(&self) -> usize {
        <[GridItem]>::len(self)
    }

    fn item(&self, index: usize) -> GridItem {
        self[index]
    }
}

impl ItemSource for Vec<GridItem> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn item(&self, index: usize) -> GridItem {
        self[index]
    }
}

impl<S: ItemSource + ?Sized> ItemSource for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn item(&self, index: usize) -> GridItem {
        (**self).item(index)
    }

    fn header_height(&self) -> Option<f32> {
        (**self).header_height()
    }
}

/// Adapter placing a fixed-height header above an existing source.
#[derive(Debug, Clone)]
pub struct HeaderedSource<S> {
    source: S,
    header_height: f32,
}

impl<S: ItemSource> HeaderedSource<S> {
    pub fn new(source: S, header_height: f32) -> Self {
        Self {
            source,
            header_height,
        }
    }
}

impl<S: ItemSource> ItemSource for HeaderedSource<S> {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn item(&self, index: usize) -> GridItem {
        self.source.item(index)
    }

    fn header_height(&self) -> Option<f32> {
        Some(self.header_height)
    }
}
