//! Builder for constructing SbomReadModel from the module graph

use super::component_view::{ChecksumView, ComponentView, LicenseView};
use super::dependency_view::{DependencyEdgeView, DependencyView};
use super::sbom_read_model::{SbomMetadataView, SbomReadModel};
use crate::sbom_generation::domain::{Module, ModuleGraph, SbomMetadata, Supplier};
use crate::sbom_generation::policies::NOASSERTION;
use std::collections::HashMap;

const FALLBACK_DOCUMENT_NAME: &str = "unnamed-project";

/// Builder for constructing SbomReadModel from domain objects
///
/// Assigns each module a document-unique reference. Module names may repeat,
/// so the reference carries the module's position; edges resolve a child name
/// to the last module with that name, as graph lookups do.
pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    pub fn build(graph: &ModuleGraph, metadata: &SbomMetadata) -> SbomReadModel {
        let components: Vec<ComponentView> = graph
            .modules()
            .iter()
            .enumerate()
            .map(|(index, module)| Self::build_component(index, module))
            .collect();

        let dependencies = Self::build_dependencies(graph, &components);
        let document_name = graph
            .root()
            .map(|root| root.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_DOCUMENT_NAME.to_string());

        SbomReadModel {
            metadata: Self::build_metadata(metadata, document_name),
            components,
            dependencies,
        }
    }

    /// SPDX element id for the module at `index`
    ///
    /// Characters outside `[A-Za-z0-9.-]` become `-`.
    pub fn spdx_id(index: usize, name: &str) -> String {
        let sanitized: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        format!("SPDXRef-Package-{}-{}", index, sanitized)
    }

    /// Renders a supplier the way SPDX expects (`Person: name (email)`)
    pub fn format_supplier(supplier: &Supplier) -> String {
        match &supplier.email {
            Some(email) => format!(
                "{}: {} ({})",
                supplier.supplier_type.as_str(),
                supplier.name,
                email
            ),
            None => format!("{}: {}", supplier.supplier_type.as_str(), supplier.name),
        }
    }

    fn build_metadata(metadata: &SbomMetadata, document_name: String) -> SbomMetadataView {
        SbomMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            document_id: metadata.document_id().to_string(),
            document_name,
        }
    }

    fn build_component(index: usize, module: &Module) -> ComponentView {
        let checksum = (!module.checksum.is_empty()).then(|| ChecksumView {
            algorithm: module.checksum.algorithm().as_str().to_string(),
            value: module.checksum.value().to_string(),
        });

        let has_license = module.license_declared.is_some() || module.license_concluded.is_some();
        let license = has_license.then(|| LicenseView {
            declared: module
                .license_declared
                .clone()
                .unwrap_or_else(|| NOASSERTION.to_string()),
            concluded: module
                .license_concluded
                .clone()
                .unwrap_or_else(|| NOASSERTION.to_string()),
            comments: module.license_comments.clone(),
        });

        ComponentView {
            spdx_id: Self::spdx_id(index, &module.name),
            name: module.name.clone(),
            version: module.version.clone(),
            is_root: module.root,
            checksum,
            supplier: module.supplier.as_ref().map(Self::format_supplier),
            homepage: module.homepage.clone(),
            download_location: module.download_location.clone(),
            license,
            copyright: module.copyright.clone(),
        }
    }

    fn build_dependencies(graph: &ModuleGraph, components: &[ComponentView]) -> DependencyView {
        let refs: HashMap<&str, &str> = components
            .iter()
            .map(|c| (c.name.as_str(), c.spdx_id.as_str()))
            .collect();

        let edges = graph
            .modules()
            .iter()
            .zip(components)
            .flat_map(|(module, component)| {
                let refs = &refs;
                module.dependencies.iter().filter_map(move |(name, child)| {
                    refs.get(name.as_str()).map(|to_ref| DependencyEdgeView {
                        from_ref: component.spdx_id.clone(),
                        from_name: component.name.clone(),
                        to_ref: to_ref.to_string(),
                        to_name: name.clone(),
                        to_version: child.version.clone(),
                    })
                })
            })
            .collect();

        DependencyView { edges }
    }
}
