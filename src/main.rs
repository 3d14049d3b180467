mod cli;
mod config;

use clap::Parser;
use cli::Args;
use config::Settings;
use mvn_sbom::adapters::outbound::console::StderrProgressReporter;
use mvn_sbom::adapters::outbound::filesystem::{
    FileSystemReader, LicenseFileDetector, Sha256ChecksumCalculator,
};
use mvn_sbom::adapters::outbound::process::MavenCommandRunner;
use mvn_sbom::application::dto::SbomRequest;
use mvn_sbom::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use mvn_sbom::application::read_models::SbomReadModelBuilder;
use mvn_sbom::application::use_cases::GenerateSbomUseCase;
use mvn_sbom::ports::outbound::ProgressReporter;
use mvn_sbom::shared::error::{ExitCode, SbomError};
use mvn_sbom::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                // --help and --version
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    let progress_reporter = StderrProgressReporter::new();
    let settings = load_settings(&args, &project_path, &progress_reporter)?;

    // Create adapters (Dependency Injection)
    let build_tool_runner = MavenCommandRunner::new(&settings.maven_command)?
        .with_offline(settings.offline)
        .with_timeout(settings.timeout);

    // Create use case with injected dependencies
    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        build_tool_runner,
        Sha256ChecksumCalculator::new(),
        LicenseFileDetector::new(),
        progress_reporter,
    );

    // Execute use case
    let response = use_case.execute(SbomRequest::new(project_path)).await?;

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let read_model = SbomReadModelBuilder::build(&response.graph, &response.metadata);
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&read_model)?;

    // Present output
    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Explicit `--config` file, else a discovered one, merged under the CLI flags
fn load_settings(
    args: &Args,
    project_path: &Path,
    progress_reporter: &dyn ProgressReporter,
) -> Result<Settings> {
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(project_path)?,
    };

    if let Some(config) = config_file.as_ref() {
        for key in config.unknown_field_names() {
            progress_reporter
                .report_warning(&format!("Unknown config field '{}' will be ignored.", key));
        }
    }

    config::merge(args, config_file.as_ref())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    // Security check: Canonicalize path to prevent path traversal
    path.canonicalize()
        .map_err(|e| SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    Ok(())
}
