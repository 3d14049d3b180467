/// Filesystem adapters: manifest reading, checksums, license files and output
mod checksum_calculator;
mod file_reader;
mod file_writer;
mod license_file_detector;

pub use checksum_calculator::Sha256ChecksumCalculator;
pub use file_reader::{FileSystemReader, MANIFEST_FILE_NAME};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use license_file_detector::LicenseFileDetector;
