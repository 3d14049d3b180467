//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving formatters a flat, denormalized picture of
//! the module graph with document identifiers already assigned.

pub mod component_view;
pub mod dependency_view;
pub mod sbom_read_model;
pub mod sbom_read_model_builder;

pub use component_view::{ChecksumView, ComponentView, LicenseView};
pub use dependency_view::{DependencyEdgeView, DependencyView};
pub use sbom_read_model::{SbomMetadataView, SbomReadModel};
pub use sbom_read_model_builder::SbomReadModelBuilder;
