use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Ltwh};

/// One raw observation: centroid plus left-top-width-height box, both in
/// image coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub centroid: na::Point2<f32>,
    pub bbox: BBox<Ltwh>,
}

impl Detection {
    #[inline]
    pub fn new(centroid: na::Point2<f32>, bbox: BBox<Ltwh>) -> Self {
        Self { centroid, bbox }
    }

    /// Centroid taken as the centre of the box.
    #[inline]
    pub fn from_ltwh(x: f32, y: f32, w: f32, h: f32) -> Self {
        let bbox = BBox::ltwh(x, y, w, h);

        Self {
            centroid: bbox.center(),
            bbox,
        }
    }

    #[inline]
    pub fn from_ltrb(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let bbox = BBox::ltrb(x1, y1, x2, y2).as_ltwh();

        Self {
            centroid: bbox.center(),
            bbox,
        }
    }

    /// Shift into another coordinate frame, e.g. from an AOI crop back to
    /// full-image space.
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            centroid: na::Point2::new(self.centroid.x + dx, self.centroid.y + dy),
            bbox: self.bbox.translated(dx, dy),
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.centroid.x.is_finite() && self.centroid.y.is_finite() && self.bbox.is_finite()
    }
}
