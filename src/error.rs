use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Detection #{index} has non-finite coordinates")]
    NonFiniteDetection { index: usize },

    #[error("Invalid time step: {dt}")]
    InvalidTimeStep { dt: f32 },
}
