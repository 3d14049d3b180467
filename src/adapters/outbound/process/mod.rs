/// Process adapters running the external build tool
mod maven_runner;
mod output_capture;

pub use maven_runner::{normalize_dependency_list, MavenCommandRunner, DEFAULT_MAVEN_COMMAND};
pub use output_capture::{run_captured, CapturedOutput};
