pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod sampler;

pub use config::{AnalysisConfig, CycleMetric};
pub use error::{Loto7Error, Result};
