use tracing::debug;

use crate::{
    app::{
        DistributionDetector,
        component_factory::{ComponentFactory, ComponentFactoryError, Config, configure_detector},
    },
    infra::{HostFileReader, ProcessCommandRunner},
};

pub struct ConcreteComponentFactory;

impl ComponentFactory for ConcreteComponentFactory {
    fn create_detector(
        &self,
        config: Config,
    ) -> Result<DistributionDetector, ComponentFactoryError> {
        debug!("creating detector with configuration: {config:?}");

        let mut detector = DistributionDetector::new().with_file_reader(HostFileReader);

        if !config.disable_command_fallback {
            detector = detector.with_command_runner(ProcessCommandRunner);
        }

        configure_detector(detector, &config)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::app::component_factory::{ComponentFactory, Config};

    use super::ConcreteComponentFactory;

    #[test]
    fn it_wires_the_command_fallback_by_default() {
        let detector = ConcreteComponentFactory
            .create_detector(Config::default())
            .unwrap();

        assert!(detector.has_command_runner());
        assert_eq!(detector.sysroot(), Path::new("/"));
    }

    #[test]
    fn it_leaves_out_the_command_fallback_when_disabled() {
        let detector = ConcreteComponentFactory
            .create_detector(Config {
                disable_command_fallback: true,
                ..Default::default()
            })
            .unwrap();

        assert!(!detector.has_command_runner());
    }
}
