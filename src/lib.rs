pub mod association;
pub mod bbox;
pub mod config;
pub mod detection;
pub mod error;
pub mod frame;
pub mod stats;
pub mod track;
pub mod tracker;

mod cell;
mod history;
mod motion;
mod store;

pub use config::TrackerConfig;
pub use detection::Detection;
pub use error::{Error, Result};
pub use frame::Frame;
pub use stats::{Statistics, Trajectory};
pub use store::Snapshot;
pub use track::{Track, TrackStatus};
pub use tracker::CellTracker;

pub trait Tracking {
    fn update(&mut self, detections: &[Detection]) -> Result<Snapshot>;
    fn update_frame(&mut self, frame: &Frame) -> Result<Snapshot>;
    fn tracks(&self) -> Snapshot;
}
