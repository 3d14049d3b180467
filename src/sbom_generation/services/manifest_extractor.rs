use crate::sbom_generation::domain::{
    base_name, Checksum, Developer, LicenseInfo, Module, PomProject, Supplier, SupplierType,
};
use crate::sbom_generation::policies::LicensePolicy;
use crate::shared::Result;

/// Reference the root module's checksum is computed over
pub const ROOT_CHECKSUM_REFERENCE: &str = "pom.xml";

/// Modules produced from one source, plus the checksum references that failed
#[derive(Debug, Clone, Default)]
pub struct ExtractedModules {
    pub modules: Vec<Module>,
    pub checksum_failures: Vec<String>,
}

/// Computes a checksum, recording the reference and returning an empty digest on failure
pub(super) fn checksum_or_empty<F>(compute: &F, reference: &str, failures: &mut Vec<String>) -> Checksum
where
    F: Fn(&str) -> Result<Checksum>,
{
    match compute(reference) {
        Ok(checksum) => checksum,
        Err(_) => {
            failures.push(reference.to_string());
            Checksum::empty()
        }
    }
}

/// ManifestModuleExtractor service turning a typed manifest into unlinked modules
///
/// Output order: root, sub-modules, dependency-management entries, declared
/// dependencies, build plugins. Every module starts with no dependencies.
pub struct ManifestModuleExtractor;

impl ManifestModuleExtractor {
    /// Extracts the unlinked module list
    ///
    /// # Arguments
    /// * `project` - Deserialized build descriptor
    /// * `license` - License detected for the project directory, if any
    /// * `checksum` - Computes a checksum for a reference path
    pub fn extract<F>(
        project: &PomProject,
        license: Option<&LicenseInfo>,
        checksum: F,
    ) -> ExtractedModules
    where
        F: Fn(&str) -> Result<Checksum>,
    {
        let mut failures = Vec::new();
        let mut modules = Vec::new();

        modules.push(Self::root_module(
            project,
            license,
            checksum_or_empty(&checksum, ROOT_CHECKSUM_REFERENCE, &mut failures),
        ));

        for path in project.sub_modules() {
            let path = path.trim();
            let module = Module::new(
                base_name(path),
                project.version.clone(),
                checksum_or_empty(&checksum, path, &mut failures),
            )
            .with_path(path);
            modules.push(module);
        }

        for dependency in project.managed_dependencies() {
            let name = dependency.artifact_id.trim();
            let version = Self::resolve_managed_version(&dependency.version, project);
            modules.push(
                Module::new(name, version, checksum_or_empty(&checksum, name, &mut failures))
                    .with_path(name),
            );
        }

        for dependency in project.declared_dependencies() {
            let name = dependency.artifact_id.trim();
            modules.push(
                Module::new(
                    name,
                    dependency.version.clone(),
                    checksum_or_empty(&checksum, name, &mut failures),
                )
                .with_path(name),
            );
        }

        for plugin in project.plugins() {
            let name = plugin.artifact_id.trim();
            modules.push(
                Module::new(
                    name,
                    plugin.version.clone(),
                    checksum_or_empty(&checksum, name, &mut failures),
                )
                .with_path(name),
            );
        }

        ExtractedModules {
            modules,
            checksum_failures: failures,
        }
    }

    /// Name of the root module: display name, else artifact id, with spaces hyphenated
    pub fn root_name(project: &PomProject) -> String {
        project
            .display_name()
            .unwrap_or_else(|| project.artifact_id.trim())
            .replace(' ', "-")
    }

    fn root_module(project: &PomProject, license: Option<&LicenseInfo>, checksum: Checksum) -> Module {
        let mut root = Module::new(Self::root_name(project), project.version.clone(), checksum)
            .with_path(ROOT_CHECKSUM_REFERENCE);
        root.root = true;
        root.supplier = project.first_developer().and_then(Self::supplier_from);
        root.homepage = project
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        root.download_location = project
            .download_url()
            .map(str::trim)
            .filter(|url| url.starts_with("http"))
            .map(str::to_string);

        if let Some(info) = license {
            root.license_declared = Some(LicensePolicy::declared(info));
            root.license_concluded = Some(LicensePolicy::concluded(info));
            root.copyright = Some(LicensePolicy::copyright(info));
            root.license_comments = info.comments().map(str::to_string);
        }

        root
    }

    /// Supplier from a developer entry
    ///
    /// A named developer is a Person; a declared organization turns it into an
    /// Organization. A developer with neither yields no supplier.
    pub fn supplier_from(developer: &Developer) -> Option<Supplier> {
        let name = non_blank(developer.name.as_deref());
        let organization = non_blank(developer.organization.as_deref());
        let email = non_blank(developer.email.as_deref()).map(str::to_string);

        match (name, organization) {
            (_, Some(org)) => Some(Supplier {
                supplier_type: SupplierType::Organization,
                name: name.unwrap_or(org).to_string(),
                email,
            }),
            (Some(name), None) => Some(Supplier {
                supplier_type: SupplierType::Person,
                name: name.to_string(),
                email,
            }),
            (None, None) => None,
        }
    }

    /// Resolves a dependency-management version
    ///
    /// The `${` / `}` markers are stripped and the remainder is looked up in
    /// the project properties. Anything not found there, literal versions
    /// included, resolves to an empty version.
    pub fn resolve_managed_version(version: &str, project: &PomProject) -> String {
        let property = version
            .trim()
            .trim_end_matches('}')
            .trim_start_matches(['$', '{']);

        project
            .properties
            .get(property)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
