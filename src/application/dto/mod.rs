/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the formatters,
/// keeping the domain layer isolated.
mod output_format;
mod sbom_request;
mod sbom_response;

pub use output_format::OutputFormat;
pub use sbom_request::SbomRequest;
pub use sbom_response::{GenerationDiagnostics, SbomResponse};
