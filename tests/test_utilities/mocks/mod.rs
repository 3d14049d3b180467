/// Mock implementations for testing
mod mock_build_tool_runner;
mod mock_checksum_calculator;
mod mock_license_detector;
mod mock_manifest_reader;
mod mock_progress_reporter;

pub use mock_build_tool_runner::MockBuildToolRunner;
pub use mock_checksum_calculator::MockChecksumCalculator;
pub use mock_license_detector::MockLicenseDetector;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::MockProgressReporter;
