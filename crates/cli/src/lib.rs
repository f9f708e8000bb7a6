mod buckets;
mod library;
mod transform;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weaver_core::factory::PluginRegistry;

#[derive(Parser)]
#[command(
    name = "weaver",
    version,
    about = "Build-time bytecode instrumentation orchestrator",
    long_about = "Weaver discovers instrumentation plugins declared by a project and shipped \
                  inside its dependencies, then runs them over the project's compiled classes, \
                  one build variant at a time."
)]
pub struct Cli {
    /// Mirror log output to stderr (logs always go to $WEAVER_LOG_DIR or ~/.weaver/logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Instrument the classes of one variant
    #[command(
        long_about = "Reads a JSON transform invocation (variant, scope, classpaths, declared \
                      plugins, dependency buckets, output directory) and runs every discovered \
                      plugin over the scope. The output directory is emptied first."
    )]
    Transform {
        /// Path to the invocation JSON file
        #[arg(value_name = "INVOCATION")]
        invocation: PathBuf,
    },
    /// Write the plugin metadata file of a plugin library
    DescribeLibrary {
        /// Directory receiving plugins.properties (emptied first)
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Plugin class names to declare
        #[arg(short, long = "plugin", value_name = "CLASS")]
        plugins: Vec<String>,

        /// Compiled class directories to search for plugin implementations
        #[arg(long = "classes", value_name = "DIR")]
        classes: Vec<PathBuf>,
    },
    /// Print the dependency bucket names of a variant, most general first
    Buckets {
        /// Build type of the variant
        #[arg(value_name = "BUILD_TYPE")]
        build_type: String,

        /// Flavor values, outermost dimension first
        #[arg(short, long = "flavor", value_name = "FLAVOR")]
        flavors: Vec<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    run_with_registry(PluginRegistry::new())
}

/// Entry point for binaries that link their plugin implementations into `registry`.
pub fn run_with_registry(registry: PluginRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let component = match &cli.command {
        Commands::Transform { .. } => "transform",
        Commands::DescribeLibrary { .. } => "library",
        Commands::Buckets { .. } => "cli",
    };
    let _guard = weaver_core::logging::init_logging(component, cli.verbose);

    match cli.command {
        Commands::Transform { invocation } => transform::run(&invocation, registry),
        Commands::DescribeLibrary {
            output,
            plugins,
            classes,
        } => library::run(output, plugins, &classes),
        Commands::Buckets {
            build_type,
            flavors,
            json,
        } => buckets::run(build_type, flavors, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_buckets() {
        let cli = Cli::try_parse_from(["weaver", "buckets", "debug", "-f", "demo", "-f", "full"])
            .unwrap();
        match cli.command {
            Commands::Buckets {
                build_type,
                flavors,
                json,
            } => {
                assert_eq!(build_type, "debug");
                assert_eq!(flavors, vec!["demo", "full"]);
                assert!(!json);
            }
            _ => panic!("expected buckets"),
        }
    }

    #[test]
    fn test_parse_describe_library() {
        let cli = Cli::try_parse_from([
            "weaver",
            "-v",
            "describe-library",
            "--output",
            "build/meta",
            "--plugin",
            "a.First",
            "--classes",
            "build/classes",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::DescribeLibrary { ref plugins, .. } if plugins == &vec!["a.First".to_string()]
        ));
    }
}
