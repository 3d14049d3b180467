use crate::shared::Result;

/// OutputPresenter port for delivering the rendered SBOM document
///
/// Implementations decide the destination (stdout or a file). The document
/// is written whole; a failed write surfaces as an error and is fatal to the run.
pub trait OutputPresenter {
    /// Writes the rendered document to the destination
    fn present(&self, content: &str) -> Result<()>;
}
