use crate::application::dto::{GenerationDiagnostics, SbomRequest, SbomResponse};
use crate::ports::outbound::{
    BuildToolRunner, ChecksumCalculator, LicenseDetector, ManifestReader, ProgressReporter,
};
use crate::sbom_generation::domain::{
    Checksum, DependencyTree, LicenseInfo, Module, ModuleGraph, PomProject,
};
use crate::sbom_generation::services::{
    DependencyListReconciler, GraphAssembler, ManifestModuleExtractor, Reconciled, SbomGenerator,
    TreeParser,
};
use crate::shared::Result;

/// Steps reported through the progress bar
const TOTAL_STEPS: usize = 5;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Orchestrates the extraction pipeline with generic dependency injection
/// for every piece of infrastructure.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `BR` - BuildToolRunner implementation
/// * `CC` - ChecksumCalculator implementation
/// * `LD` - LicenseDetector implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<MR, BR, CC, LD, PR> {
    manifest_reader: MR,
    build_tool_runner: BR,
    checksum_calculator: CC,
    license_detector: LD,
    progress_reporter: PR,
}

impl<MR, BR, CC, LD, PR> GenerateSbomUseCase<MR, BR, CC, LD, PR>
where
    MR: ManifestReader,
    BR: BuildToolRunner,
    CC: ChecksumCalculator,
    LD: LicenseDetector,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        manifest_reader: MR,
        build_tool_runner: BR,
        checksum_calculator: CC,
        license_detector: LD,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_reader,
            build_tool_runner,
            checksum_calculator,
            license_detector,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// Manifest, subprocess and I/O failures abort the run. Malformed report
    /// lines, checksum failures and license detection failures only produce
    /// warnings.
    pub async fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        let mut diagnostics = GenerationDiagnostics::default();

        // Step 1: Read the build descriptor
        let project = self.read_manifest(&request)?;

        // Step 2: Ask the build tool for the flat dependency list
        let list_lines = self.read_dependency_list(&request).await?;

        // Step 3: Detect the project license
        let license = self.detect_license(&request, &mut diagnostics);

        // Step 4: Extract manifest modules and reconcile the flat list
        let modules = self.collect_modules(
            &request,
            &project,
            license.as_ref(),
            &list_lines,
            &mut diagnostics,
        );

        // Step 5: Recover edges from the dependency tree
        let tree = self.read_dependency_tree(&request).await?;
        diagnostics.skipped_tree_lines = tree.skipped_lines();

        // Step 6: Wire the graph
        let graph = self.assemble_graph(modules, &tree);

        self.report_diagnostics(&diagnostics);
        self.progress_reporter.report_completion(&format!(
            "✅ Module graph ready: {} module(s), {} edge(s)",
            graph.module_count(),
            graph.edge_count()
        ));

        let metadata = SbomGenerator::generate_default_metadata();
        Ok(SbomResponse::new(graph, metadata, diagnostics))
    }

    fn read_manifest(&self, request: &SbomRequest) -> Result<PomProject> {
        self.progress_reporter.report(&format!(
            "📖 Loading pom.xml from: {}",
            request.project_path.display()
        ));

        let project = self.manifest_reader.read_manifest(&request.project_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} dependenc(ies), {} managed, {} plugin(s), {} sub-module(s)",
            project.declared_dependencies().len(),
            project.managed_dependencies().len(),
            project.plugins().len(),
            project.sub_modules().len()
        ));
        self.progress_reporter
            .report_progress(1, TOTAL_STEPS, Some("manifest loaded"));

        Ok(project)
    }

    async fn read_dependency_list(&self, request: &SbomRequest) -> Result<Vec<String>> {
        self.progress_reporter.report(&format!(
            "📦 Running {} dependency:list...",
            self.build_tool_runner.tool_name()
        ));

        let text = self
            .build_tool_runner
            .dependency_list(&request.project_path)
            .await?;
        self.progress_reporter
            .report_progress(2, TOTAL_STEPS, Some("dependency list captured"));

        Ok(DependencyListReconciler::split_lines(&text))
    }

    fn detect_license(
        &self,
        request: &SbomRequest,
        diagnostics: &mut GenerationDiagnostics,
    ) -> Option<LicenseInfo> {
        self.progress_reporter.report("🔍 Looking for license file...");

        match self.license_detector.detect(&request.project_path) {
            Ok(Some(info)) => {
                self.progress_reporter.report(&format!(
                    "   - License: {}",
                    info.license_id().unwrap_or("unidentified")
                ));
                Some(info)
            }
            Ok(None) => {
                self.progress_reporter.report("   - No license file found");
                None
            }
            Err(e) => {
                diagnostics.license_error = Some(e.to_string());
                None
            }
        }
    }

    /// Manifest modules with the reconciled flat-list modules spliced in
    /// ahead of the build plugins
    fn collect_modules(
        &self,
        request: &SbomRequest,
        project: &PomProject,
        license: Option<&LicenseInfo>,
        list_lines: &[String],
        diagnostics: &mut GenerationDiagnostics,
    ) -> Vec<Module> {
        let checksum = |reference: &str| -> Result<Checksum> {
            self.checksum_calculator
                .checksum(&request.project_path, reference)
        };

        let extracted = ManifestModuleExtractor::extract(project, license, &checksum);
        let Reconciled {
            extracted: reconciled,
            skipped_lines,
        } = DependencyListReconciler::reconcile(list_lines, project, &checksum);

        diagnostics.skipped_list_lines = skipped_lines;
        diagnostics.reconciled_modules = reconciled.modules.len();
        diagnostics.checksum_failures = extracted
            .checksum_failures
            .into_iter()
            .chain(reconciled.checksum_failures)
            .collect();

        let mut modules = extracted.modules;
        let plugins = modules.split_off(modules.len() - project.plugins().len());
        modules.extend(reconciled.modules);
        modules.extend(plugins);

        self.progress_reporter.report(&format!(
            "✅ Collected {} module(s) ({} from the dependency list only)",
            modules.len(),
            diagnostics.reconciled_modules
        ));
        self.progress_reporter
            .report_progress(3, TOTAL_STEPS, Some("modules collected"));

        modules
    }

    async fn read_dependency_tree(&self, request: &SbomRequest) -> Result<DependencyTree> {
        self.progress_reporter.report(&format!(
            "🌳 Running {} dependency:tree...",
            self.build_tool_runner.tool_name()
        ));

        let text = self
            .build_tool_runner
            .dependency_tree(&request.project_path)
            .await?;
        let tree = TreeParser::parse(&text);

        self.progress_reporter
            .report_progress(4, TOTAL_STEPS, Some("dependency tree parsed"));
        Ok(tree)
    }

    fn assemble_graph(&self, modules: Vec<Module>, tree: &DependencyTree) -> ModuleGraph {
        self.progress_reporter.report("📊 Linking dependency graph...");

        let graph = GraphAssembler::assemble(modules, tree);

        self.progress_reporter
            .report(&format!("   - Modules: {}", graph.module_count()));
        self.progress_reporter
            .report(&format!("   - Dependency edges: {}", graph.edge_count()));
        self.progress_reporter
            .report_progress(TOTAL_STEPS, TOTAL_STEPS, Some("graph linked"));

        graph
    }

    fn report_diagnostics(&self, diagnostics: &GenerationDiagnostics) {
        if diagnostics.skipped_tree_lines > 0 {
            self.progress_reporter.report_warning(&format!(
                "Skipped {} dependency-tree line(s) without a coordinate",
                diagnostics.skipped_tree_lines
            ));
        }
        if diagnostics.skipped_list_lines > 0 {
            self.progress_reporter.report_warning(&format!(
                "Skipped {} dependency-list line(s) without a versioned coordinate",
                diagnostics.skipped_list_lines
            ));
        }
        if !diagnostics.checksum_failures.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "Checksum unavailable for {} module(s): {}",
                diagnostics.checksum_failures.len(),
                diagnostics.checksum_failures.join(", ")
            ));
        }
        if let Some(error) = &diagnostics.license_error {
            self.progress_reporter
                .report_warning(&format!("License detection failed: {}", error));
        }
    }
}
