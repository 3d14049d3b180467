use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI systems can tell argument errors apart from extraction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// SBOM generated
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (manifest, subprocess, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM extraction.
///
/// Every variant is fatal to an extraction run. Malformed lines inside the
/// build tool's text output never surface here; they are skipped and counted.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("pom.xml not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse pom.xml: {path}\nDetails: {details}\n\n💡 Hint: Please verify that pom.xml is well-formed XML")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to start command: {command}\nDetails: {details}\n\n💡 Hint: Make sure Maven is installed and on your PATH, or set it with --mvn")]
    CommandSpawnError { command: String, details: String },

    #[error("Command failed: {command} ({status})\n{stderr}\n\n💡 Hint: Run the command manually in the project directory to see the full build output")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Command timed out after {seconds}s: {command}\n\n💡 Hint: Increase --timeout or warm the local repository first")]
    CommandTimeout { command: String, seconds: u64 },

    #[error("Failed to capture output of: {command}\nDetails: {details}")]
    OutputCaptureError { command: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
