use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::distribution::{Distribution, ProbeSource};
use crate::infra::HostFileReader;
use crate::infra::parsers::{
    parse_arch_release, parse_debian_version, parse_lsb_release, parse_lsb_release_output,
    parse_os_release, parse_redhat_release, parse_suse_release,
};

use super::command_runner::{CommandRunError, CommandRunner};
use super::detection_context::DetectionContext;
use super::detection_error::{DetectionError, SourceError};
use super::file_reader::FileReader;

pub const DEFAULT_LSB_RELEASE_COMMAND: &str = "lsb_release";

type Parser = fn(&str) -> Distribution;

struct FileSource {
    path: &'static str,
    parse: Parser,
    presence_only: bool,
}

impl FileSource {
    const fn parsed(path: &'static str, parse: Parser) -> Self {
        Self {
            path,
            parse,
            presence_only: false,
        }
    }

    const fn presence(path: &'static str, parse: Parser) -> Self {
        Self {
            path,
            parse,
            presence_only: true,
        }
    }
}

// Tried in order; an existing, readable file is the answer even if it is empty.
const PRIMARY_SOURCES: &[FileSource] = &[
    FileSource::parsed("/etc/os-release", parse_os_release),
    FileSource::parsed("/usr/lib/os-release", parse_os_release),
    FileSource::parsed("/etc/lsb-release", parse_lsb_release),
];

const LEGACY_SOURCES: &[FileSource] = &[
    FileSource::parsed("/etc/redhat-release", parse_redhat_release),
    FileSource::parsed("/etc/debian_version", parse_debian_version),
    FileSource::presence("/etc/arch-release", parse_arch_release),
    FileSource::parsed("/etc/SuSE-release", parse_suse_release),
];

pub struct DistributionDetector {
    files: Box<dyn FileReader + Send + Sync>,
    commands: Option<Box<dyn CommandRunner + Send + Sync>>,
    sysroot: PathBuf,
    lsb_release_command: String,
    command_timeout: Option<Duration>,
}

impl Default for DistributionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DistributionDetector {
    pub fn new() -> Self {
        Self {
            files: Box::new(HostFileReader),
            commands: None,
            sysroot: PathBuf::from("/"),
            lsb_release_command: DEFAULT_LSB_RELEASE_COMMAND.to_string(),
            command_timeout: None,
        }
    }

    pub fn with_file_reader(self, files: impl FileReader + Send + Sync + 'static) -> Self {
        Self {
            files: Box::new(files),
            ..self
        }
    }

    pub fn with_command_runner(
        self,
        commands: impl CommandRunner + Send + Sync + 'static,
    ) -> Self {
        Self {
            commands: Some(Box::new(commands)),
            ..self
        }
    }

    pub fn with_sysroot(self, sysroot: impl Into<PathBuf>) -> Self {
        Self {
            sysroot: sysroot.into(),
            ..self
        }
    }

    pub fn with_lsb_release_command(self, command: impl Into<String>) -> Self {
        Self {
            lsb_release_command: command.into(),
            ..self
        }
    }

    pub fn with_command_timeout(self, timeout: Duration) -> Self {
        Self {
            command_timeout: Some(timeout),
            ..self
        }
    }

    pub fn sysroot(&self) -> &Path {
        &self.sysroot
    }

    pub fn has_command_runner(&self) -> bool {
        self.commands.is_some()
    }

    pub async fn detect(&self, ctx: &DetectionContext) -> Result<Distribution, DetectionError> {
        ctx.check()?;

        for source in PRIMARY_SOURCES {
            if let Some(distribution) = self.try_file(source).await {
                return Ok(distribution);
            }
        }

        ctx.check()?;

        for source in LEGACY_SOURCES {
            if let Some(distribution) = self.try_file(source).await {
                return Ok(distribution);
            }
        }

        match self.run_lsb_release_command(ctx).await {
            Ok(distribution) => return Ok(detected(distribution)),
            Err(SourceError::Interrupted(interruption)) => return Err(interruption.into()),
            Err(err) => warn!("last-resort source failed: {err}"),
        }

        warn!("no source could identify the distribution");
        Err(DetectionError::Exhausted)
    }

    async fn try_file(&self, source: &FileSource) -> Option<Distribution> {
        match self.probe_file(source).await {
            Ok(distribution) => Some(detected(distribution)),
            Err(err @ SourceError::Read { .. }) => {
                warn!("skipping source: {err}");
                None
            }
            Err(err) => {
                debug!("skipping source: {err}");
                None
            }
        }
    }

    async fn probe_file(&self, source: &FileSource) -> Result<Distribution, SourceError> {
        let path = self.resolve(source.path);

        if !self.files.exists(&path).await {
            return Err(SourceError::NotFound(path));
        }

        let contents = if source.presence_only {
            Vec::new()
        } else {
            match self.files.read(&path).await {
                Ok(contents) => contents,
                Err(err) => return Err(SourceError::Read { path, source: err }),
            }
        };

        let distribution = (source.parse)(&String::from_utf8_lossy(&contents));
        Ok(distribution.with_source(ProbeSource::File(path)))
    }

    async fn run_lsb_release_command(
        &self,
        ctx: &DetectionContext,
    ) -> Result<Distribution, SourceError> {
        let command = self.lsb_release_command.as_str();

        ctx.check()?;

        let Some(runner) = &self.commands else {
            return Err(SourceError::NoExecutor(command.to_string()));
        };

        let command_ctx = match self.command_timeout {
            Some(timeout) => ctx.clone().with_timeout(timeout),
            None => ctx.clone(),
        };

        debug!("running `{command} -a`");
        let output = match runner.run(&command_ctx, command, &["-a".to_string()]).await {
            Ok(output) => output,
            Err(CommandRunError::Interrupted(_)) => {
                // Only the caller's own interruption ends the detection.
                ctx.check()?;
                return Err(SourceError::CommandInterrupted(command.to_string()));
            }
            Err(err) => return Err(SourceError::CommandUnavailable(command.to_string(), err)),
        };

        if !output.succeeded {
            return Err(SourceError::CommandFailed {
                command: command.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        let distribution = parse_lsb_release_output(&output.stdout);
        if distribution.id().is_empty() {
            return Err(SourceError::EmptyDistributorId(command.to_string()));
        }

        Ok(distribution.with_source(ProbeSource::Command(format!("{command} -a"))))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.sysroot.join(path.trim_start_matches('/'))
    }
}

fn detected(distribution: Distribution) -> Distribution {
    info!(
        "distribution detected from {}: {} ({})",
        distribution.source(),
        distribution.id(),
        distribution.family()
    );
    distribution
}
