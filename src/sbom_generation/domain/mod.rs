pub mod coordinate;
pub mod dependency_tree;
pub mod license_info;
pub mod module;
pub mod module_graph;
pub mod pom;
pub mod sbom_metadata;

pub use coordinate::{Coordinate, MalformedCoordinate};
pub use dependency_tree::DependencyTree;
pub use license_info::LicenseInfo;
pub use module::{base_name, Checksum, ChecksumAlgorithm, Module, Supplier, SupplierType};
pub use module_graph::ModuleGraph;
pub use pom::{Developer, Developers, PomDependency, PomPlugin, PomProject};
pub use sbom_metadata::SbomMetadata;
