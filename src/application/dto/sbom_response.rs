use crate::sbom_generation::domain::{ModuleGraph, SbomMetadata};

/// SbomResponse - output of the SBOM generation use case
///
/// Carries the linked module graph plus the diagnostics gathered while
/// building it.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    pub graph: ModuleGraph,
    pub metadata: SbomMetadata,
    pub diagnostics: GenerationDiagnostics,
}

impl SbomResponse {
    pub fn new(graph: ModuleGraph, metadata: SbomMetadata, diagnostics: GenerationDiagnostics) -> Self {
        Self {
            graph,
            metadata,
            diagnostics,
        }
    }
}

/// Non-fatal problems seen during one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationDiagnostics {
    /// Tree lines without a parseable coordinate
    pub skipped_tree_lines: usize,
    /// Dependency-list lines without a versioned coordinate
    pub skipped_list_lines: usize,
    /// References whose checksum fell back to empty
    pub checksum_failures: Vec<String>,
    /// Modules added from the dependency list only
    pub reconciled_modules: usize,
    /// Set when license detection failed
    pub license_error: Option<String>,
}

impl GenerationDiagnostics {
    pub fn has_warnings(&self) -> bool {
        self.skipped_tree_lines > 0
            || self.skipped_list_lines > 0
            || !self.checksum_failures.is_empty()
            || self.license_error.is_some()
    }
}
