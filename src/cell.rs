use nalgebra as na;

use crate::association::Gate;
use crate::bbox::{BBox, Ltwh};
use crate::config::TrackerConfig;
use crate::history::History;
use crate::motion::{self, Motion};
use crate::track::{Track, TrackStatus};
use crate::Detection;

/// Mutable per-track state owned by the store.
#[derive(Debug, Clone)]
pub struct TrackedCell {
    pub id: u64,
    pub centroid: na::Point2<f32>,
    pub bbox: BBox<Ltwh>,
    pub motion: Motion,
    pub predicted: na::Point2<f32>,
    pub search_radius: f32,
    pub confidence: f32,
    pub disappeared_count: u32,
    pub track_length: u32,
    pub hits: u32,
    pub last_seen_frame: u64,
    pub history: History<na::Point2<f32>>,
}

impl TrackedCell {
    pub fn new(id: u64, det: &Detection, frame: u64, cfg: &TrackerConfig) -> Self {
        let mut history = History::with_capacity(cfg.history_len);
        history.push(det.centroid);

        Self {
            id,
            centroid: det.centroid,
            bbox: det.bbox,
            motion: Motion::new(),
            predicted: det.centroid,
            search_radius: cfg.base_search_radius,
            confidence: cfg.initial_confidence.clamp(0.0, 1.0),
            disappeared_count: 0,
            track_length: 1,
            hits: 1,
            last_seen_frame: frame,
            history,
        }
    }

    #[inline]
    pub fn status(&self) -> TrackStatus {
        if self.disappeared_count == 0 {
            TrackStatus::Active
        } else {
            TrackStatus::Missing
        }
    }

    /// Starts a frame of `dt` nominal frames and returns the matching gate.
    pub fn gate(&mut self, dt: f32) -> Gate {
        self.motion.advance(dt);

        Gate {
            id: self.id,
            predicted: self.motion.predict(self.centroid, dt),
            radius: self.search_radius,
        }
    }

    /// Active/Missing -> Active.
    pub fn on_match(&mut self, det: &Detection, frame: u64, cfg: &TrackerConfig) {
        self.motion.observe(self.centroid, det.centroid, cfg.smoothing);

        self.centroid = det.centroid;
        self.bbox = det.bbox;
        self.history.push(det.centroid);

        self.disappeared_count = 0;
        self.confidence = (self.confidence + cfg.confidence_gain).min(1.0);
        self.track_length = self.track_length.saturating_add(1);
        self.hits = self.hits.saturating_add(1);
        self.last_seen_frame = frame;

        self.refresh(cfg);
    }

    /// Active/Missing -> Missing. Position and box stay where they were.
    pub fn on_miss(&mut self, cfg: &TrackerConfig) {
        self.disappeared_count += 1;
        self.confidence = (self.confidence - cfg.confidence_decay).max(0.0);
        self.track_length = self.track_length.saturating_add(1);

        self.refresh(cfg);
    }

    #[inline]
    pub fn is_expired(&self, cfg: &TrackerConfig) -> bool {
        self.disappeared_count > cfg.max_disappeared
    }

    fn refresh(&mut self, cfg: &TrackerConfig) {
        self.predicted = self.motion.predict(self.centroid, 1.0);
        self.search_radius = motion::search_radius(cfg, self.motion.speed(), self.disappeared_count);
    }
}

impl From<&TrackedCell> for Track {
    fn from(c: &TrackedCell) -> Track {
        Track {
            id: c.id,
            status: c.status(),
            centroid: c.centroid,
            bbox: c.bbox,
            velocity: c.motion.velocity,
            predicted_position: c.predicted,
            search_radius: c.search_radius,
            confidence: c.confidence,
            disappeared_count: c.disappeared_count,
            track_length: c.track_length,
            hits: c.hits,
            last_seen_frame: c.last_seen_frame,
        }
    }
}
