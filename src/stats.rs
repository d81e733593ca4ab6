use nalgebra as na;
use serde_derive::Serialize;

/// Counters for a status line.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Tracks ever created by this tracker.
    pub total_tracked: u64,
    /// Tracks currently held, active or missing.
    pub live: usize,
    pub active: usize,
    pub disappeared: usize,
    /// Live tracks matched at least `min_track_length` times.
    pub established: usize,
    pub frame_number: u64,
}

/// Centroid trail of one track, oldest point first.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub points: Vec<na::Point2<f32>>,
    pub confidence: f32,
    pub active: bool,
}
