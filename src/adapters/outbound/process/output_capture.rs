use crate::shared::error::SbomError;
use crate::shared::Result;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;

/// Everything a finished subprocess produced
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CapturedOutput {
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Runs a command with both pipes captured for the duration of this call
///
/// Each pipe is drained on its own task while the caller waits for the exit
/// status, so a chatty child never blocks on a full pipe. The drain tasks are
/// joined before the buffers are returned. The child is killed if the
/// timeout expires or the future is dropped.
pub async fn run_captured(
    mut command: Command,
    display: &str,
    timeout: Option<Duration>,
) -> Result<CapturedOutput> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command.spawn().map_err(|e| SbomError::CommandSpawnError {
        command: display.to_string(),
        details: e.to_string(),
    })?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| capture_error(display, "stdout pipe was not opened"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| capture_error(display, "stderr pipe was not opened"))?;

    let stdout_task = tokio::spawn(drain(stdout));
    let stderr_task = tokio::spawn(drain(stderr));

    let waited = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(waited) => waited,
            Err(_) => {
                let _ = child.kill().await;
                stdout_task.abort();
                stderr_task.abort();
                return Err(SbomError::CommandTimeout {
                    command: display.to_string(),
                    seconds: limit.as_secs(),
                }
                .into());
            }
        },
        None => child.wait().await,
    };
    let status = waited.map_err(|e| capture_error(display, e.to_string()))?;

    Ok(CapturedOutput {
        status,
        stdout: join_drain(stdout_task, display).await?,
        stderr: join_drain(stderr_task, display).await?,
    })
}

async fn drain<R>(mut reader: R) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).await?;
    Ok(buffer)
}

async fn join_drain(task: JoinHandle<std::io::Result<Vec<u8>>>, display: &str) -> Result<Vec<u8>> {
    task.await
        .map_err(|e| capture_error(display, e.to_string()))?
        .map_err(|e| capture_error(display, e.to_string()))
}

fn capture_error(display: &str, details: impl Into<String>) -> anyhow::Error {
    SbomError::OutputCaptureError {
        command: display.to_string(),
        details: details.into(),
    }
    .into()
}
