//! SBOM read model aggregating everything a formatter needs

use super::component_view::ComponentView;
use super::dependency_view::DependencyView;

/// Main read model for SBOM documents
#[derive(Debug, Clone)]
pub struct SbomReadModel {
    pub metadata: SbomMetadataView,
    /// One entry per module, in graph order
    pub components: Vec<ComponentView>,
    pub dependencies: DependencyView,
}

impl SbomReadModel {
    /// The project's own component
    pub fn root(&self) -> Option<&ComponentView> {
        self.components.iter().find(|c| c.is_root)
    }
}

/// View representation of document metadata
#[derive(Debug, Clone)]
pub struct SbomMetadataView {
    /// Creation time, `YYYY-MM-DDThh:mm:ssZ`
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub document_id: String,
    /// Document name, taken from the root module
    pub document_name: String,
}
