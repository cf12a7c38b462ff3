pub mod catalog;
pub mod detector;
pub mod engine;
pub mod pipeline;
pub mod sampling;

pub use crate::domain::model::{DetectionReport, DetectionStatus, DiscontinuityPoint, SampledFunction};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
