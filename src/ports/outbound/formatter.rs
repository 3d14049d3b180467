use crate::application::read_models::SbomReadModel;
use crate::shared::Result;

/// SbomFormatter port for rendering an SBOM document
///
/// Implementations render SPDX JSON, Markdown, or any other document shape
/// from the same read model.
pub trait SbomFormatter {
    /// Renders the document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &SbomReadModel) -> Result<String>;
}
