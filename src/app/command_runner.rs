use thiserror::Error;

use super::detection_context::{DetectionContext, Interruption};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
    pub succeeded: bool,
}

impl From<std::process::Output> for CommandOutput {
    fn from(value: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&value.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&value.stderr).into_owned(),
            exit_code: value.status.code(),
            succeeded: value.status.success(),
        }
    }
}

#[derive(Error, Debug)]
pub enum CommandRunError {
    #[error("unable to spawn the command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error(transparent)]
    Interrupted(#[from] Interruption),
}

#[async_trait::async_trait]
pub trait CommandRunner {
    async fn run(
        &self,
        ctx: &DetectionContext,
        program: &str,
        args: &[String],
    ) -> Result<CommandOutput, CommandRunError>;
}
