use super::output_capture::{run_captured, CapturedOutput};
use crate::ports::outbound::BuildToolRunner;
use crate::shared::error::SbomError;
use crate::shared::security::read_checked_to_string;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use tokio::process::Command;

/// Default Maven executable
pub const DEFAULT_MAVEN_COMMAND: &str = "mvn";

const TREE_OUTPUT_FILE: &str = "dependency-tree.txt";

/// Lines of failure output kept in a `CommandFailed` error
const FAILURE_TAIL_LINES: usize = 20;

/// MavenCommandRunner adapter invoking Maven's dependency plugin
///
/// The configured command may carry its own arguments (`./mvnw -s ci.xml`);
/// it is split on whitespace. Every invocation runs in batch mode, and in
/// offline mode when requested.
pub struct MavenCommandRunner {
    program: String,
    program_args: Vec<String>,
    offline: bool,
    timeout: Option<Duration>,
}

impl MavenCommandRunner {
    pub fn new(maven_command: &str) -> Result<Self> {
        let mut parts = maven_command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| SbomError::Validation {
            message: "Maven command must not be empty".to_string(),
        })?;

        Ok(Self {
            program,
            program_args: parts.collect(),
            offline: false,
            timeout: None,
        })
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full argument list for one goal invocation
    pub fn goal_args(&self, goal_args: &[String]) -> Vec<String> {
        let mut args = self.program_args.clone();
        args.push("-B".to_string());
        if self.offline {
            args.push("-o".to_string());
        }
        args.extend(goal_args.iter().cloned());
        args
    }

    async fn run_goal(&self, project_path: &Path, goal_args: &[String]) -> Result<CapturedOutput> {
        let args = self.goal_args(goal_args);
        let display = format!("{} {}", self.program, args.join(" "));

        let mut command = Command::new(&self.program);
        command.args(&args).current_dir(project_path);

        let output = run_captured(command, &display, self.timeout).await?;
        if !output.status.success() {
            return Err(SbomError::CommandFailed {
                command: display,
                status: output.status.to_string(),
                stderr: failure_excerpt(&output),
            }
            .into());
        }

        Ok(output)
    }
}

#[async_trait]
impl BuildToolRunner for MavenCommandRunner {
    async fn dependency_list(&self, project_path: &Path) -> Result<String> {
        let output = self
            .run_goal(project_path, &["dependency:list".to_string()])
            .await?;
        Ok(normalize_dependency_list(&output.stdout_lossy()))
    }

    async fn dependency_tree(&self, project_path: &Path) -> Result<String> {
        let scratch = TempDir::new().map_err(|e| SbomError::OutputCaptureError {
            command: self.program.clone(),
            details: format!("Failed to create temporary directory: {}", e),
        })?;
        let output_file = scratch.path().join(TREE_OUTPUT_FILE);

        self.run_goal(
            project_path,
            &[
                "dependency:tree".to_string(),
                "-DappendOutput=true".to_string(),
                format!("-DoutputFile={}", output_file.display()),
            ],
        )
        .await?;

        read_checked_to_string(&output_file, "dependency tree output").map_err(|e| {
            SbomError::OutputCaptureError {
                command: format!("{} dependency:tree", self.program),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn tool_name(&self) -> &str {
        &self.program
    }
}

/// Normalizes raw `dependency:list` stdout into one coordinate per line
///
/// Keeps lines with at least three colons, drops everything up to the first
/// `]` (the log level prefix), then sorts byte-wise and removes duplicates.
/// The result ends with a newline, so splitting on `\n` yields a final empty
/// line.
pub fn normalize_dependency_list(stdout: &str) -> String {
    let unique: BTreeSet<&str> = stdout
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| line.matches(':').count() >= 3)
        .map(|line| line.split_once(']').map_or(line, |(_, rest)| rest))
        .collect();

    let mut normalized = String::new();
    for line in unique {
        normalized.push_str(line);
        normalized.push('\n');
    }
    normalized
}

/// Tail of stderr, or Maven's `[ERROR]` lines when stderr is empty
fn failure_excerpt(output: &CapturedOutput) -> String {
    let stderr = output.stderr_lossy();
    let lines: Vec<String> = if stderr.trim().is_empty() {
        output
            .stdout_lossy()
            .lines()
            .filter(|line| line.starts_with("[ERROR]"))
            .map(str::to_string)
            .collect()
    } else {
        stderr.lines().map(str::to_string).collect()
    };

    let start = lines.len().saturating_sub(FAILURE_TAIL_LINES);
    lines[start..].join("\n")
}
