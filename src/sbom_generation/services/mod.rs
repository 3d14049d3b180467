mod dependency_list_reconciler;
mod graph_assembler;
mod manifest_extractor;
mod sbom_generator;
mod tree_parser;

pub use dependency_list_reconciler::{DependencyListReconciler, Reconciled};
pub use graph_assembler::GraphAssembler;
pub use manifest_extractor::{ExtractedModules, ManifestModuleExtractor, ROOT_CHECKSUM_REFERENCE};
pub use sbom_generator::SbomGenerator;
pub use tree_parser::{classify_line, line_coordinate, LineDepth, TreeParser};
