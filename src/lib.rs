pub mod app;
pub mod domain;
pub mod infra;

pub use app::{DetectionContext, DetectionError, DistributionDetector};
pub use domain::distribution::{Distribution, Family, classify};
