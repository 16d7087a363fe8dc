//! External process adapter (git, npm).

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;
use wizgen_core::application::{
    ports::{ProcessRunner, StdioMode},
    ApplicationError,
};

/// Runs external commands with `tokio::process`.
#[derive(Debug, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        stdio: StdioMode,
    ) -> Result<(), ApplicationError> {
        debug!(program, ?args, cwd = %cwd.display(), "running external command");
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(cwd);

        match stdio {
            StdioMode::Captured => {
                let output = cmd
                    .output()
                    .await
                    .map_err(|e| ApplicationError::process(program, e.to_string()))?;
                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    return Err(ApplicationError::process(
                        program,
                        stderr.trim().to_string(),
                    ));
                }
            }
            StdioMode::Inherited => {
                let status = cmd
                    .status()
                    .await
                    .map_err(|e| ApplicationError::process(program, e.to_string()))?;
                if !status.success() {
                    return Err(ApplicationError::process(
                        program,
                        format!("exited with {status}"),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_surfaces_as_process_error() {
        let runner = SystemProcessRunner::new();
        let dir = tempfile::tempdir().unwrap();
        let err = runner
            .run(
                "definitely-not-a-real-binary",
                &[],
                dir.path(),
                StdioMode::Captured,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalProcess { .. }));
    }

    #[tokio::test]
    async fn successful_command_returns_ok() {
        let runner = SystemProcessRunner::new();
        let dir = tempfile::tempdir().unwrap();
        runner
            .run("true", &[], dir.path(), StdioMode::Captured)
            .await
            .unwrap();
    }
}
