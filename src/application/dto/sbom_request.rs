use std::path::PathBuf;

/// SbomRequest - input of the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Maven project directory containing `pom.xml`
    pub project_path: PathBuf,
}

impl SbomRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }
}
