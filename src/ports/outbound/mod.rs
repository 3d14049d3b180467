/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the application core needs from the outside
/// world: the manifest on disk, the Maven process, checksums, license files,
/// the console and the output destination.
pub mod build_tool_runner;
pub mod checksum_calculator;
pub mod formatter;
pub mod license_detector;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use build_tool_runner::BuildToolRunner;
pub use checksum_calculator::ChecksumCalculator;
pub use formatter::SbomFormatter;
pub use license_detector::LicenseDetector;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
