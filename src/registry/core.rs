use std::collections::BTreeSet;

use blake3::{Hash, Hasher};

use crate::geometry::{Rect, Size};
use crate::layout::source::ItemSource;
use crate::layout::{LayoutSolution, MasonryConfig};

/// Fingerprint of the inputs that produced a solved layout. Two passes with
/// the same signature are guaranteed to yield the same placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSignature(Hash);

impl LayoutSignature {
    pub fn of<S>(source: &S, config: &MasonryConfig) -> Self
    where
        S: ItemSource + ?Sized,
    {
        let mut hasher = Hasher::new();
        hasher.update(&config.container_width.to_le_bytes());
        hasher.update(&config.number_of_columns.to_le_bytes());
        hasher.update(&config.side_padding.to_le_bytes());
        hasher.update(&config.column_spacing.to_le_bytes());
        hasher.update(&config.top_offset.to_le_bytes());

        match source.header_height() {
            Some(height) => {
                hasher.update(&[1]);
                hasher.update(&height.to_le_bytes());
            }
            None => {
                hasher.update(&[0]);
            }
        }

        for index in 0..source.len() {
            let item = source.item(index);
            hasher.update(&[u8::from(item.is_featured)]);
            hasher.update(&item.aspect_ratio.to_le_bytes());
            hasher.update(&item.non_image_height.to_le_bytes());
        }

        Self(hasher.finalize())
    }
}

#[derive(Debug, Clone, Copy)]
struct PlacementState {
    rect: Rect,
    is_dirty: bool,
}

/// Retains the most recent layout pass between invocations so callers can
/// skip redundant solves and redraw only the placements that moved.
#[derive(Debug, Default)]
pub struct PlacementRegistry {
    entries: Vec<PlacementState>,
    header: Option<Rect>,
    content_size: Option<Size>,
    signature: Option<LayoutSignature>,
    dirty: BTreeSet<usize>,
}

impl PlacementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no pass has been adopted yet or the inputs changed since
    /// the last one.
    pub fn needs_layout(&self, signature: &LayoutSignature) -> bool {
        self.signature.map(|s| s != *signature).unwrap_or(true)
    }

    /// Adopt a freshly solved pass. Placements whose rect changed (and any
    /// new ones) are flagged dirty; entries past the new item count are
    /// dropped.
    pub fn sync(&mut self, solution: &LayoutSolution, signature: LayoutSignature) {
        for (index, rect) in solution.placements.iter().enumerate() {
            match self.entries.get_mut(index) {
                Some(state) => {
                    if state.rect != *rect {
                        state.rect = *rect;
                        state.is_dirty = true;
                        self.dirty.insert(index);
                    }
                }
                None => {
                    self.entries.push(PlacementState {
                        rect: *rect,
                        is_dirty: true,
                    });
                    self.dirty.insert(index);
                }
            }
        }

        let count = solution.placements.len();
        if self.entries.len() > count {
            self.entries.truncate(count);
            self.dirty.retain(|index| *index < count);
        }

        self.header = solution.header;
        self.content_size = Some(solution.content_size);
        self.signature = Some(signature);
    }

    /// Drain dirty placements in ascending item order.
    pub fn take_dirty(&mut self) -> Vec<(usize, Rect)> {
        let indices: Vec<_> = std::mem::take(&mut self.dirty).into_iter().collect();
        indices
            .into_iter()
            .filter_map(|index| {
                self.entries.get_mut(index).map(|state| {
                    state.is_dirty = false;
                    (index, state.rect)
                })
            })
            .collect()
    }

    /// Placements intersecting the query rect, in item order.
    pub fn placements_in(&self, rect: &Rect) -> Vec<(usize, Rect)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, state)| state.rect.intersects(rect))
            .map(|(index, state)| (index, state.rect))
            .collect()
    }

    pub fn placement_of(&self, index: usize) -> Option<Rect> {
        self.entries.get(index).map(|state| state.rect)
    }

    pub fn header(&self) -> Option<Rect> {
        self.header
    }

    pub fn content_size(&self) -> Option<Size> {
        self.content_size
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GridItem, solve};

    fn items() -> Vec<GridItem> {
        vec![
            GridItem::normal(1.0, 20.0),
            GridItem::normal(0.5, 20.0),
            GridItem::featured(0.5, 0.0),
        ]
    }

    fn config() -> MasonryConfig {
        MasonryConfig::new(375.0)
    }

    #[test]
    fn first_sync_flags_every_placement_dirty() {
        let items = items();
        let solution = solve(&items, &config()).unwrap();
        let signature = LayoutSignature::of(&items, &config());

        let mut registry = PlacementRegistry::new();
        registry.sync(&solution, signature);

        let dirty = registry.take_dirty();
        assert_eq!(dirty.len(), 3);
        assert_eq!(dirty[0].0, 0);
        assert!(!registry.has_dirty());
    }

    #[test]
    fn identical_resync_flags_nothing() {
        let items = items();
        let solution = solve(&items, &config()).unwrap();
        let signature = LayoutSignature::of(&items, &config());

        let mut registry = PlacementRegistry::new();
        registry.sync(&solution, signature);
        registry.take_dirty();

        registry.sync(&solution, signature);
        assert!(registry.take_dirty().is_empty());
    }

    #[test]
    fn signature_tracks_item_and_geometry_changes() {
        let items = items();
        let signature = LayoutSignature::of(&items, &config());

        let mut registry = PlacementRegistry::new();
        assert!(registry.needs_layout(&signature));

        let solution = solve(&items, &config()).unwrap();
        registry.sync(&solution, signature);
        assert!(!registry.needs_layout(&signature));

        let mut changed = items.clone();
        changed[1].aspect_ratio = 0.75;
        assert!(registry.needs_layout(&LayoutSignature::of(&changed, &config())));

        let wider = config().with_columns(3);
        assert!(registry.needs_layout(&LayoutSignature::of(&items, &wider)));
    }

    #[test]
    fn appending_an_item_dirties_only_moved_placements() {
        let mut items = items();
        let config = config();

        let solution = solve(&items, &config).unwrap();
        let mut registry = PlacementRegistry::new();
        registry.sync(&solution, LayoutSignature::of(&items, &config));
        registry.take_dirty();

        items.push(GridItem::normal(0.8, 20.0));
        let grown = solve(&items, &config).unwrap();
        registry.sync(&grown, LayoutSignature::of(&items, &config));

        // The first three placements are unchanged by an append.
        let dirty = registry.take_dirty();
        assert_eq!(dirty.len(), 1);
        assert_eq!(dirty[0].0, 3);
    }

    #[test]
    fn shrinking_the_item_list_truncates_entries() {
        let items = items();
        let config = config();
        let solution = solve(&items, &config).unwrap();

        let mut registry = PlacementRegistry::new();
        registry.sync(&solution, LayoutSignature::of(&items, &config));

        let fewer = vec![items[0]];
        let shrunk = solve(&fewer, &config).unwrap();
        registry.sync(&shrunk, LayoutSignature::of(&fewer, &config));

        assert_eq!(registry.len(), 1);
        assert!(registry.placement_of(1).is_none());
    }

    #[test]
    fn viewport_query_matches_linear_scan() {
        let items = items();
        let config = config();
        let solution = solve(&items, &config).unwrap();

        let mut registry = PlacementRegistry::new();
        registry.sync(&solution, LayoutSignature::of(&items, &config));

        let viewport = Rect::new(0.0, 0.0, 375.0, 200.0);
        let hits = registry.placements_in(&viewport);

        let expected: Vec<_> = solution
            .placements
            .iter()
            .enumerate()
            .filter(|(_, rect)| rect.intersects(&viewport))
            .map(|(index, rect)| (index, *rect))
            .collect();
        assert_eq!(hits, expected);
        assert!(!hits.is_empty());
    }
}
