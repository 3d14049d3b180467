use crate::application::read_models::{ComponentView, DependencyView, SbomMetadataView, SbomReadModel};
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::policies::NOASSERTION;
use crate::shared::Result;
use serde::Serialize;

const SPDX_VERSION: &str = "SPDX-2.3";
const DATA_LICENSE: &str = "CC0-1.0";
const DOCUMENT_ID: &str = "SPDXRef-DOCUMENT";
const NAMESPACE_BASE: &str = "https://spdx.org/spdxdocs";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxDocument {
    spdx_version: String,
    data_license: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    packages: Vec<Package>,
    relationships: Vec<Relationship>,
}

#[derive(Debug, Serialize)]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Package {
    name: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supplier: Option<String>,
    download_location: String,
    files_analyzed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    checksums: Vec<PackageChecksum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<String>,
    license_concluded: String,
    license_declared: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    license_comments: Option<String>,
    copyright_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageChecksum {
    algorithm: String,
    checksum_value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Relationship {
    spdx_element_id: String,
    relationship_type: String,
    related_spdx_element: String,
}

impl Relationship {
    fn new(from: &str, relationship_type: &str, to: &str) -> Self {
        Self {
            spdx_element_id: from.to_string(),
            relationship_type: relationship_type.to_string(),
            related_spdx_element: to.to_string(),
        }
    }
}

/// SpdxJsonFormatter adapter for generating SPDX 2.3 JSON documents
///
/// The document DESCRIBES the root module; every graph edge becomes a
/// DEPENDS_ON relationship. Unknown values are written as NOASSERTION.
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let document = SpdxDocument {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: DATA_LICENSE.to_string(),
            spdx_id: DOCUMENT_ID.to_string(),
            name: model.metadata.document_name.clone(),
            document_namespace: self.build_namespace(&model.metadata),
            creation_info: self.build_creation_info(&model.metadata),
            packages: model.components.iter().map(|c| self.build_package(c)).collect(),
            relationships: self.build_relationships(model.root(), &model.dependencies),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

impl SpdxJsonFormatter {
    fn build_namespace(&self, metadata: &SbomMetadataView) -> String {
        let name: String = metadata
            .document_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '-' })
            .collect();
        format!("{}/{}-{}", NAMESPACE_BASE, name, metadata.document_id)
    }

    fn build_creation_info(&self, metadata: &SbomMetadataView) -> CreationInfo {
        CreationInfo {
            created: metadata.timestamp.clone(),
            creators: vec![format!(
                "Tool: {}-{}",
                metadata.tool_name, metadata.tool_version
            )],
        }
    }

    fn build_package(&self, component: &ComponentView) -> Package {
        let (license_declared, license_concluded, license_comments) = match &component.license {
            Some(license) => (
                license.declared.clone(),
                license.concluded.clone(),
                license.comments.clone(),
            ),
            None => (NOASSERTION.to_string(), NOASSERTION.to_string(), None),
        };

        Package {
            name: component.name.clone(),
            spdx_id: component.spdx_id.clone(),
            version_info: Some(component.version.clone()).filter(|v| !v.is_empty()),
            supplier: component.supplier.clone(),
            download_location: component
                .download_location
                .clone()
                .unwrap_or_else(|| NOASSERTION.to_string()),
            files_analyzed: false,
            checksums: component
                .checksum
                .iter()
                .map(|c| PackageChecksum {
                    algorithm: c.algorithm.clone(),
                    checksum_value: c.value.clone(),
                })
                .collect(),
            homepage: component.homepage.clone(),
            license_concluded,
            license_declared,
            license_comments,
            copyright_text: component
                .copyright
                .clone()
                .unwrap_or_else(|| NOASSERTION.to_string()),
        }
    }

    fn build_relationships(
        &self,
        root: Option<&ComponentView>,
        dependencies: &DependencyView,
    ) -> Vec<Relationship> {
        let describes = root.map(|r| Relationship::new(DOCUMENT_ID, "DESCRIBES", &r.spdx_id));

        describes
            .into_iter()
            .chain(
                dependencies
                    .edges
                    .iter()
                    .map(|e| Relationship::new(&e.from_ref, "DEPENDS_ON", &e.to_ref)),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{
        ChecksumView, DependencyEdgeView, LicenseView,
    };
    use serde_json::Value;

    fn component(index: usize, name: &str, version: &str, is_root: bool) -> ComponentView {
        ComponentView {
            spdx_id: format!("SPDXRef-Package-{}-{}", index, name),
            name: name.to_string(),
            version: version.to_string(),
            is_root,
            checksum: None,
            supplier: None,
            homepage: None,
            download_location: None,
            license: None,
            copyright: None,
        }
    }

    fn create_test_read_model() -> SbomReadModel {
        let mut root = component(0, "demo-app", "1.0", true);
        root.checksum = Some(ChecksumView {
            algorithm: "SHA256".to_string(),
            value: "abc123".to_string(),
        });
        root.supplier = Some("Person: Jane Doe".to_string());
        root.homepage = Some("https://example.com".to_string());
        root.license = Some(LicenseView {
            declared: "MIT".to_string(),
            concluded: "MIT".to_string(),
            comments: None,
        });
        root.copyright = Some("Copyright (c) 2024 Jane Doe".to_string());

        let lib = component(1, "slf4j-api", "", false);

        SbomReadModel {
            metadata: SbomMetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "mvn-sbom".to_string(),
                tool_version: "0.1.0".to_string(),
                document_id: "0000-1111".to_string(),
                document_name: "demo app".to_string(),
            },
            components: vec![root, lib],
            dependencies: DependencyView {
                edges: vec![DependencyEdgeView {
                    from_ref: "SPDXRef-Package-0-demo-app".to_string(),
                    from_name: "demo-app".to_string(),
                    to_ref: "SPDXRef-Package-1-slf4j-api".to_string(),
                    to_name: "slf4j-api".to_string(),
                    to_version: String::new(),
                }],
            },
        }
    }

    fn format_json() -> Value {
        let output = SpdxJsonFormatter::new()
            .format(&create_test_read_model())
            .unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_format_document_header() {
        let json = format_json();

        assert_eq!(json["spdxVersion"], "SPDX-2.3");
        assert_eq!(json["dataLicense"], "CC0-1.0");
        assert_eq!(json["SPDXID"], "SPDXRef-DOCUMENT");
        assert_eq!(json["name"], "demo app");
        assert_eq!(
            json["documentNamespace"],
            "https://spdx.org/spdxdocs/demo-app-0000-1111"
        );
        assert_eq!(json["creationInfo"]["created"], "2024-01-01T00:00:00Z");
        assert_eq!(json["creationInfo"]["creators"][0], "Tool: mvn-sbom-0.1.0");
    }

    #[test]
    fn test_format_root_package() {
        let json = format_json();
        let root = &json["packages"][0];

        assert_eq!(root["name"], "demo-app");
        assert_eq!(root["versionInfo"], "1.0");
        assert_eq!(root["supplier"], "Person: Jane Doe");
        assert_eq!(root["homepage"], "https://example.com");
        assert_eq!(root["checksums"][0]["algorithm"], "SHA256");
        assert_eq!(root["checksums"][0]["checksumValue"], "abc123");
        assert_eq!(root["licenseDeclared"], "MIT");
        assert_eq!(root["copyrightText"], "Copyright (c) 2024 Jane Doe");
        assert_eq!(root["filesAnalyzed"], false);
        assert_eq!(root["downloadLocation"], "NOASSERTION");
    }

    #[test]
    fn test_format_unknown_values_are_noassertion() {
        let json = format_json();
        let lib = &json["packages"][1];

        assert!(lib.get("versionInfo").is_none());
        assert!(lib.get("checksums").is_none());
        assert!(lib.get("supplier").is_none());
        assert_eq!(lib["licenseConcluded"], "NOASSERTION");
        assert_eq!(lib["licenseDeclared"], "NOASSERTION");
        assert_eq!(lib["copyrightText"], "NOASSERTION");
    }

    #[test]
    fn test_format_relationships() {
        let json = format_json();
        let relationships = json["relationships"].as_array().unwrap();

        assert_eq!(relationships.len(), 2);
        assert_eq!(relationships[0]["spdxElementId"], "SPDXRef-DOCUMENT");
        assert_eq!(relationships[0]["relationshipType"], "DESCRIBES");
        assert_eq!(
            relationships[0]["relatedSpdxElement"],
            "SPDXRef-Package-0-demo-app"
        );
        assert_eq!(relationships[1]["relationshipType"], "DEPENDS_ON");
        assert_eq!(
            relationships[1]["relatedSpdxElement"],
            "SPDXRef-Package-1-slf4j-api"
        );
    }

    #[test]
    fn test_format_without_root_has_no_describes() {
        let mut model = create_test_read_model();
        model.components[0].is_root = false;
        model.dependencies.edges.clear();

        let output = SpdxJsonFormatter::new().format(&model).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert!(json["relationships"].as_array().unwrap().is_empty());
    }
}
