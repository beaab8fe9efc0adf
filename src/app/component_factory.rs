use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use super::DistributionDetector;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sysroot: Option<PathBuf>,
    pub lsb_release_command: Option<String>,
    pub command_timeout_ms: Option<u64>,
    pub disable_command_fallback: bool,
}

impl Config {
    pub fn command_timeout(&self) -> Result<Option<Duration>, ComponentFactoryError> {
        match self.command_timeout_ms {
            Some(0) => Err(ComponentFactoryError::ZeroCommandTimeout),
            Some(ms) => Ok(Some(Duration::from_millis(ms))),
            None => Ok(None),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComponentFactoryError {
    #[error("the command timeout must be greater than zero")]
    ZeroCommandTimeout,

    #[error("the lsb_release command must not be empty")]
    EmptyLsbReleaseCommand,
}

pub trait ComponentFactory {
    fn create_detector(&self, config: Config)
    -> Result<DistributionDetector, ComponentFactoryError>;
}

pub fn configure_detector(
    mut detector: DistributionDetector,
    config: &Config,
) -> Result<DistributionDetector, ComponentFactoryError> {
    if let Some(sysroot) = &config.sysroot {
        detector = detector.with_sysroot(sysroot.clone());
    }

    if let Some(command) = &config.lsb_release_command {
        if command.trim().is_empty() {
            return Err(ComponentFactoryError::EmptyLsbReleaseCommand);
        }
        detector = detector.with_lsb_release_command(command.trim());
    }

    if let Some(timeout) = config.command_timeout()? {
        detector = detector.with_command_timeout(timeout);
    }

    Ok(detector)
}
