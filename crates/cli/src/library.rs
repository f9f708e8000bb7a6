use std::collections::BTreeSet;
use std::path::PathBuf;
use weaver_core::library::LibraryPropertiesWriter;

pub fn run(
    output: PathBuf,
    plugins: Vec<String>,
    classes: &[PathBuf],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut names: BTreeSet<String> = plugins.into_iter().collect();
    if !classes.is_empty() {
        names.extend(LibraryPropertiesWriter::find_plugin_class_names(classes));
    }

    let file = LibraryPropertiesWriter::new(output).write(&names)?;
    println!("Wrote {} plugin classes to {}", names.len(), file.display());
    Ok(())
}
