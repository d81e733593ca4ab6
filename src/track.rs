use nalgebra as na;
use serde_derive::Serialize;

use crate::bbox::{BBox, Ltwh};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackStatus {
    /// Matched on the latest frame.
    Active,
    /// Unmatched for at least one frame but not yet evicted.
    Missing,
}

/// Read-only copy of a track as of the latest `update()`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Track {
    pub id: u64,
    pub status: TrackStatus,
    pub centroid: na::Point2<f32>,

    // frozen while missing
    pub bbox: BBox<Ltwh>,

    // per nominal frame
    pub velocity: na::Vector2<f32>,

    pub predicted_position: na::Point2<f32>,
    pub search_radius: f32,
    pub confidence: f32,
    pub disappeared_count: u32,

    // frames since creation, matched or not
    pub track_length: u32,

    // matched frames, creation included
    pub hits: u32,

    pub last_seen_frame: u64,
}
