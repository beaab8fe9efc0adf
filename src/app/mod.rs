mod command_runner;
pub mod component_factory;
mod detection_context;
mod detection_error;
mod distribution_detector;
mod file_reader;

pub use command_runner::{CommandOutput, CommandRunError, CommandRunner};
pub use detection_context::{DetectionContext, Interruption};
pub use detection_error::DetectionError;
pub use distribution_detector::{DEFAULT_LSB_RELEASE_COMMAND, DistributionDetector};
pub use file_reader::FileReader;
