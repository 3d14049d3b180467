//! Typed view of a Maven build descriptor (`pom.xml`)
//!
//! Only the elements the module extractor consumes are modelled; everything
//! else in the document is ignored during deserialization. List elements
//! keep Maven's wrapper shape (`<dependencies><dependency>…`), so each list
//! has a small wrapper struct.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomProject {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub developers: Developers,
    #[serde(default)]
    pub distribution_management: DistributionManagement,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub modules: Modules,
    #[serde(default)]
    pub dependency_management: DependencyManagement,
    #[serde(default)]
    pub dependencies: Dependencies,
    #[serde(default)]
    pub build: Build,
}

impl PomProject {
    /// Display name when present and non-blank
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    pub fn first_developer(&self) -> Option<&Developer> {
        self.developers.developer.first()
    }

    pub fn sub_modules(&self) -> &[String] {
        &self.modules.module
    }

    pub fn managed_dependencies(&self) -> &[PomDependency] {
        &self.dependency_management.dependencies.dependency
    }

    pub fn declared_dependencies(&self) -> &[PomDependency] {
        &self.dependencies.dependency
    }

    pub fn plugins(&self) -> &[PomPlugin] {
        &self.build.plugins.plugin
    }

    pub fn download_url(&self) -> Option<&str> {
        self.distribution_management.download_url.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Developers {
    #[serde(default)]
    pub developer: Vec<Developer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Developer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionManagement {
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Modules {
    #[serde(default)]
    pub module: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DependencyManagement {
    #[serde(default)]
    pub dependencies: Dependencies,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub dependency: Vec<PomDependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomDependency {
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub artifact_id: String,
    /// Literal version or a `${property}` placeholder
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub scope: Option<String>,
}

impl PomDependency {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            scope: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Build {
    #[serde(default)]
    pub plugins: Plugins,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Plugins {
    #[serde(default)]
    pub plugin: Vec<PomPlugin>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomPlugin {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
}

impl PomPlugin {
    pub fn new(artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: None,
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
        }
    }
}
