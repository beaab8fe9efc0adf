use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::app::{CommandOutput, CommandRunError, CommandRunner, DetectionContext};

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessCommandRunner;

#[async_trait::async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(
        &self,
        ctx: &DetectionContext,
        program: &str,
        args: &[String],
    ) -> Result<CommandOutput, CommandRunError> {
        ctx.check()?;

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::select! {
            biased;
            interruption = ctx.done() => return Err(interruption.into()),
            output = child => output?,
        };

        debug!("`{program}` exited with status {:?}", output.status.code());

        Ok(output.into())
    }
}
