#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

#[path = "../../src/scan/fixtures.rs"]
mod fixtures;

pub use fixtures::{ACC_ABSTRACT, ACC_INTERFACE, ACC_PUBLIC, class_bytes};

pub fn simple_class(name: &str, super_name: Option<&str>) -> Vec<u8> {
    class_bytes(name, Some(super_name.unwrap_or("java/lang/Object")), &[], ACC_PUBLIC)
}

pub fn abstract_class(name: &str, super_name: Option<&str>) -> Vec<u8> {
    class_bytes(
        name,
        Some(super_name.unwrap_or("java/lang/Object")),
        &[],
        ACC_PUBLIC | ACC_ABSTRACT,
    )
}

/// Writes `internal.class` under `root`.
pub fn write_class(root: &Path, internal: &str, bytes: &[u8]) -> PathBuf {
    let path = root.join(format!("{internal}.class"));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, bytes).unwrap();
    path
}

/// Creates a jar at `path` with the given `(entry name, content)` pairs.
pub fn create_jar(path: &Path, entries: &[(&str, Vec<u8>)]) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    for (name, content) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content).unwrap();
    }
    zip.finish().unwrap();
    path.to_path_buf()
}

/// Creates a jar whose entries are stored uncompressed, then flips one byte inside the content
/// of the entry holding `damaged`, so reading that entry fails its CRC check.
pub fn create_jar_with_bad_crc(
    path: &Path,
    entries: &[(&str, Vec<u8>)],
    damaged: &[u8],
) -> PathBuf {
    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, content) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content).unwrap();
    }
    zip.finish().unwrap();

    let mut bytes = fs::read(path).unwrap();
    let at = bytes
        .windows(damaged.len())
        .position(|window| window == damaged)
        .unwrap();
    bytes[at] ^= 0xFF;
    fs::write(path, bytes).unwrap();
    path.to_path_buf()
}

/// Jar content declaring `names` as plugin entry points.
pub fn plugins_properties(names: &[&str]) -> (&'static str, Vec<u8>) {
    (
        "META-INF/weaver-plugins/plugins.properties",
        format!("plugin-classes={}\n", names.join(",")).into_bytes(),
    )
}
