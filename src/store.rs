use std::collections::BTreeMap;

use crate::cell::TrackedCell;
use crate::config::TrackerConfig;
use crate::track::Track;
use crate::Detection;

/// Tracks keyed by id, ordered so that iteration is deterministic.
pub type Snapshot = BTreeMap<u64, Track>;

/// Sole owner of all track state and of the id counter.
#[derive(Debug, Clone)]
pub struct TrackStore {
    cells: BTreeMap<u64, TrackedCell>,
    next_id: u64,
    total_created: u64,
}

impl TrackStore {
    pub fn new(first_id: u64) -> Self {
        Self {
            cells: BTreeMap::new(),
            next_id: first_id,
            total_created: 0,
        }
    }

    /// Ids are issued in strictly increasing order and never reused.
    pub fn create_track(&mut self, det: &Detection, frame: u64, cfg: &TrackerConfig) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.total_created += 1;

        self.cells.insert(id, TrackedCell::new(id, det, frame, cfg));

        id
    }

    #[inline]
    pub fn remove_track(&mut self, id: u64) -> Option<TrackedCell> {
        self.cells.remove(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: u64) -> Option<&mut TrackedCell> {
        self.cells.get_mut(&id)
    }

    /// Ascending by id.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TrackedCell> {
        self.cells.values()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TrackedCell> {
        self.cells.values_mut()
    }

    /// Drops every track matching `pred`, returning the dropped ids.
    pub fn evict<P: Fn(&TrackedCell) -> bool>(&mut self, pred: P) -> Vec<u64> {
        let expired: Vec<u64> = self
            .cells
            .values()
            .filter(|c| pred(c))
            .map(|c| c.id)
            .collect();

        for &id in &expired {
            self.remove_track(id);
        }

        expired
    }

    pub fn snapshot(&self) -> Snapshot {
        self.cells.iter().map(|(&id, c)| (id, c.into())).collect()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn total_created(&self) -> u64 {
        self.total_created
    }
}
