//! mvn-sbom - SBOM generation tool for Maven projects
//!
//! This library builds a module graph from a project's `pom.xml` and the
//! text reports of `mvn dependency:list` and `mvn dependency:tree`, then
//! renders it as an SPDX 2.3 document or a Markdown report. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mvn_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     MavenCommandRunner::new("mvn")?,
//!     Sha256ChecksumCalculator::new(),
//!     LicenseFileDetector::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let response = use_case.execute(SbomRequest::new(PathBuf::from("."))).await?;
//!
//! // Format output
//! let model = SbomReadModelBuilder::build(&response.graph, &response.metadata);
//! let output = SpdxJsonFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, LicenseFileDetector, Sha256ChecksumCalculator,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{MarkdownFormatter, SpdxJsonFormatter};
    pub use crate::adapters::outbound::process::MavenCommandRunner;
    pub use crate::application::dto::{OutputFormat, SbomRequest, SbomResponse};
    pub use crate::application::read_models::{SbomReadModel, SbomReadModelBuilder};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        BuildToolRunner, ChecksumCalculator, LicenseDetector, ManifestReader, OutputPresenter,
        ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        Coordinate, DependencyTree, LicenseInfo, Module, ModuleGraph, PomProject, SbomMetadata,
    };
    pub use crate::sbom_generation::services::{
        DependencyListReconciler, GraphAssembler, ManifestModuleExtractor, SbomGenerator,
        TreeParser,
    };
    pub use crate::shared::Result;
}
