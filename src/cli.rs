use clap::Parser;
use mvn_sbom::application::dto::OutputFormat;

/// Generate SBOMs for Maven projects
#[derive(Parser, Debug)]
#[command(name = "mvn-sbom")]
#[command(version)]
#[command(
    about = "Generate SPDX SBOMs for Maven projects from pom.xml and mvn dependency reports",
    long_about = None
)]
pub struct Args {
    /// Output format: json (SPDX 2.3) or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Maven command, may include leading arguments (e.g. "./mvnw" or "mvn -q") [default: mvn]
    #[arg(long = "mvn", value_name = "COMMAND")]
    pub maven_command: Option<String>,

    /// Run Maven in offline mode (-o)
    #[arg(long)]
    pub offline: bool,

    /// Abort a Maven invocation after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to a config file (defaults to mvn-sbom.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,
}
