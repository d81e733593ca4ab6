use std::collections::BTreeMap;

use crate::association::{self, Gate};
use crate::config::TrackerConfig;
use crate::error::{Error, Result};
use crate::stats::{Statistics, Trajectory};
use crate::store::{Snapshot, TrackStore};
use crate::{Detection, Frame};

/// Adaptive multi-object cell tracker.
///
/// Feed it one detection list per processed frame through [`update`]; it
/// keeps identities across frames, widens the matching gate for fast or
/// missing tracks and evicts tracks that stay unmatched for more than
/// `max_disappeared` frames.
///
/// [`update`]: CellTracker::update
#[derive(Debug, Clone)]
pub struct CellTracker {
    config: TrackerConfig,
    store: TrackStore,
    frame_number: u64,
    last_timestamp: Option<f64>,
}

impl Default for CellTracker {
    fn default() -> Self {
        Self::from_valid(TrackerConfig::default())
    }
}

impl CellTracker {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self::from_valid(config))
    }

    fn from_valid(config: TrackerConfig) -> Self {
        log::info!(
            "Creating CellTracker: max_disappeared={}, base_search_radius={:.1}, max_search_radius={:.1}, smoothing={:.2}, min_track_length={}",
            config.max_disappeared,
            config.base_search_radius,
            config.max_search_radius,
            config.smoothing,
            config.min_track_length,
        );

        Self {
            store: TrackStore::new(config.first_id),
            config,
            frame_number: 0,
            last_timestamp: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[inline]
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// One frame, assuming uniform spacing between calls.
    #[inline]
    pub fn update(&mut self, detections: &[Detection]) -> Result<Snapshot> {
        self.update_with_dt(detections, 1.0)
    }

    /// One frame that is `dt` nominal frames after the previous one.
    pub fn update_with_dt(&mut self, detections: &[Detection], dt: f32) -> Result<Snapshot> {
        if !dt.is_finite() || dt <= 0.0 {
            log::warn!("Rejecting frame: invalid time step {}", dt);
            return Err(Error::InvalidTimeStep { dt });
        }

        if let Some(index) = detections.iter().position(|d| !d.is_finite()) {
            log::warn!(
                "Rejecting frame: detection #{} has non-finite coordinates",
                index
            );
            return Err(Error::NonFiniteDetection { index });
        }

        self.frame_number += 1;
        let frame = self.frame_number;
        let cfg = &self.config;

        let gates: Vec<Gate> = self.store.iter_mut().map(|c| c.gate(dt)).collect();
        let assignment = association::associate(&gates, detections);

        for &(g, d, cost) in &assignment.matched {
            let id = gates[g].id;
            log::trace!("frame {}: track {} <- detection #{} (cost {:.2})", frame, id, d, cost);

            if let Some(cell) = self.store.get_mut(id) {
                cell.on_match(&detections[d], frame, cfg);
            }
        }

        for &g in &assignment.missed {
            if let Some(cell) = self.store.get_mut(gates[g].id) {
                cell.on_miss(cfg);
            }
        }

        let evicted = self.store.evict(|c| c.is_expired(cfg));
        for id in &evicted {
            log::trace!("frame {}: track {} evicted", frame, id);
        }

        for &d in &assignment.unmatched {
            let id = self.store.create_track(&detections[d], frame, cfg);
            log::trace!("frame {}: track {} created from detection #{}", frame, id, d);
        }

        log::debug!(
            "frame {}: {} detections, {} matched, {} missed, {} created, {} evicted, {} live",
            frame,
            detections.len(),
            assignment.matched.len(),
            assignment.missed.len(),
            assignment.unmatched.len(),
            evicted.len(),
            self.store.len(),
        );

        Ok(self.store.snapshot())
    }

    /// Derives the time step from the frame timestamp when there is one.
    pub fn update_frame(&mut self, frame: &Frame) -> Result<Snapshot> {
        let dt = match (frame.timestamp, self.last_timestamp) {
            (Some(ts), _) if !ts.is_finite() => {
                log::warn!("Rejecting frame: non-finite timestamp {}", ts);
                return Err(Error::InvalidTimeStep { dt: ts as f32 });
            }
            (Some(ts), Some(prev)) => ((ts - prev) / self.config.frame_interval as f64) as f32,
            _ => 1.0,
        };

        let snapshot = self.update_with_dt(&frame.detections, dt)?;

        if frame.timestamp.is_some() {
            self.last_timestamp = frame.timestamp;
        }

        Ok(snapshot)
    }

    /// Every live track, including the ones currently missing.
    #[inline]
    pub fn tracks(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Tracks matched on the latest frame.
    pub fn visible_tracks(&self) -> Snapshot {
        self.store
            .iter()
            .filter(|c| c.disappeared_count == 0)
            .map(|c| (c.id, c.into()))
            .collect()
    }

    /// Tracks matched at least `min_track_length` times.
    pub fn established_tracks(&self) -> Snapshot {
        let min = self.config.min_track_length;

        self.store
            .iter()
            .filter(|c| c.hits >= min)
            .map(|c| (c.id, c.into()))
            .collect()
    }

    pub fn trajectories(&self, min_length: usize) -> BTreeMap<u64, Trajectory> {
        self.store
            .iter()
            .filter(|c| c.history.len() >= min_length)
            .map(|c| {
                (
                    c.id,
                    Trajectory {
                        points: c.history.to_vec(),
                        confidence: c.confidence,
                        active: c.disappeared_count == 0,
                    },
                )
            })
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics {
            total_tracked: self.store.total_created(),
            live: self.store.len(),
            frame_number: self.frame_number,
            ..Default::default()
        };

        for c in self.store.iter() {
            if c.disappeared_count == 0 {
                stats.active += 1;
            } else {
                stats.disappeared += 1;
            }

            if c.hits >= self.config.min_track_length {
                stats.established += 1;
            }
        }

        stats
    }

    /// Forgets every track. The id counter keeps running.
    pub fn reset(&mut self) {
        log::debug!("Resetting tracker, dropping {} tracks", self.store.len());

        self.store.clear();
        self.frame_number = 0;
        self.last_timestamp = None;
    }
}

impl crate::Tracking for CellTracker {
    #[inline]
    fn update(&mut self, detections: &[Detection]) -> Result<Snapshot> {
        CellTracker::update(self, detections)
    }

    #[inline]
    fn update_frame(&mut self, frame: &Frame) -> Result<Snapshot> {
        CellTracker::update_frame(self, frame)
    }

    #[inline]
    fn tracks(&self) -> Snapshot {
        CellTracker::tracks(self)
    }
}
