mod config;
mod generator;

pub use config::SamplerConfig;
pub use generator::{Bucket, DelayGenerator};
