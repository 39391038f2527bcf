use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

/// Pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: f32,
    pub height: f32,
}

impl ImageInfo {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Height divided by width, the ratio the packer consumes. Zero-width
    /// images report zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        self.height / self.width
    }
}

/// Injected key-value store for image dimensions, keyed by image path.
///
/// Item builders look dimensions up here instead of reaching for a shared
/// global; the decode/fetch pipeline that fills the store lives outside this
/// crate.
pub trait ImageStore {
    /// Dimensions for `key`, refreshing its recency on a hit.
    fn get(&mut self, key: &str) -> Option<ImageInfo>;

    fn insert(&mut self, key: &str, info: ImageInfo);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store evicting the least recently used entry once `capacity`
/// is reached. A capacity of zero stores nothing.
#[derive(Debug)]
pub struct MemoryImageStore {
    capacity: usize,
    entries: HashMap<String, ImageInfo>,
    // Front is least recently used.
    recency: VecDeque<String>,
}

impl MemoryImageStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            recency: VecDeque::new(),
        }
    }

    fn touch(&mut self, key: &str) {
        if let Some(position) = self.recency.iter().position(|k| k == key) {
            self.recency.remove(position);
        }
        self.recency.push_back(key.to_string());
    }
}

impl ImageStore for MemoryImageStore {
    fn get(&mut self, key: &str) -> Option<ImageInfo> {
        let info = self.entries.get(key).copied()?;
        self.touch(key);
        Some(info)
    }

    fn insert(&mut self, key: &str, info: ImageInfo) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.contains_key(key) {
            self.entries.insert(key.to_string(), info);
            self.touch(key);
            return;
        }

        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.recency.pop_front() {
                self.entries.remove(&evicted);
            }
        }

        self.entries.insert(key.to_string(), info);
        self.recency.push_back(key.to_string());
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_is_height_over_width() {
        assert_eq!(ImageInfo::new(400.0, 200.0).aspect_ratio(), 0.5);
        assert_eq!(ImageInfo::new(0.0, 200.0).aspect_ratio(), 0.0);
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let mut store = MemoryImageStore::new(2);
        store.insert("a.jpg", ImageInfo::new(100.0, 100.0));
        store.insert("b.jpg", ImageInfo::new(100.0, 150.0));
        store.insert("c.jpg", ImageInfo::new(100.0, 200.0));

        assert_eq!(store.len(), 2);
        assert!(store.get("a.jpg").is_none());
        assert!(store.get("c.jpg").is_some());
    }

    #[test]
    fn get_refreshes_recency() {
        let mut store = MemoryImageStore::new(2);
        store.insert("a.jpg", ImageInfo::new(100.0, 100.0));
        store.insert("b.jpg", ImageInfo::new(100.0, 150.0));

        // Touch "a" so "b" becomes the eviction candidate.
        store.get("a.jpg");
        store.insert("c.jpg", ImageInfo::new(100.0, 200.0));

        assert!(store.get("a.jpg").is_some());
        assert!(store.get("b.jpg").is_none());
    }

    #[test]
    fn reinserting_updates_in_place() {
        let mut store = MemoryImageStore::new(2);
        store.insert("a.jpg", ImageInfo::new(100.0, 100.0));
        store.insert("a.jpg", ImageInfo::new(100.0, 300.0));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a.jpg").unwrap().height, 300.0);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut store = MemoryImageStore::new(0);
        store.insert("a.jpg", ImageInfo::new(100.0, 100.0));
        assert!(store.is_empty());
        assert!(store.get("a.jpg").is_none());
    }
}
