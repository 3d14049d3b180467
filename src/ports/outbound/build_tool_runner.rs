use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// BuildToolRunner port for the external build tool's dependency reports
///
/// Both methods block on a subprocess, so they are async. Implementations
/// must be `Send + Sync` so the use case can hold them across awaits.
#[async_trait]
pub trait BuildToolRunner: Send + Sync {
    /// Flat dependency list, one coordinate per line, sorted and de-duplicated
    ///
    /// The text ends with the build's completion banner followed by an empty
    /// line; consumers drop those two lines.
    async fn dependency_list(&self, project_path: &Path) -> Result<String>;

    /// Rendered dependency tree text using the `+- ` / `\- ` glyph convention
    async fn dependency_tree(&self, project_path: &Path) -> Result<String>;

    /// Human-readable name of the tool, used in progress messages
    fn tool_name(&self) -> &str {
        "mvn"
    }
}
