use crate::detection::Detection;

pub struct Frame {
    pub detections: Vec<Detection>,
    pub timestamp: Option<f64>, // in seconds
}

impl Frame {
    #[inline]
    pub fn new(detections: Vec<Detection>) -> Self {
        Self {
            detections,
            timestamp: None,
        }
    }

    #[inline]
    pub fn with_timestamp(detections: Vec<Detection>, timestamp: f64) -> Self {
        Self {
            detections,
            timestamp: Some(timestamp),
        }
    }
}
