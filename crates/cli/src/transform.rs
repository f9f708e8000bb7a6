use std::path::Path;
use tracing::info;
use weaver_core::factory::PluginRegistry;
use weaver_core::transform::{Transform, TransformInvocation};

pub fn run(invocation: &Path, registry: PluginRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let invocation = TransformInvocation::from_file(invocation)?;
    info!(
        "Loaded invocation for build type {} with {} scope entries",
        invocation.build_type,
        invocation.scope.len()
    );

    let report = Transform::new(registry).run(&invocation)?;

    println!("Variant: {}", report.variant);
    println!("Plugins: {}", report.plugins.join(", "));
    println!(
        "Classes: {} transformed, {} unchanged",
        report.summary.transformed, report.summary.unchanged
    );
    println!("Output: {}", invocation.output_dir.display());
    Ok(())
}
