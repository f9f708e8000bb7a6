//! Conversions between the three spellings of a JVM class name.
//!
//! - binary: `com.example.Foo$Inner` (what plugin metadata and locators use)
//! - internal: `com/example/Foo$Inner` (what the constant pool stores)
//! - resource: `com/example/Foo$Inner.class` (entry path inside a jar or a classes dir)

const CLASS_SUFFIX: &str = ".class";

/// Internal name to binary name.
pub fn binary_name(internal: &str) -> String {
    internal.replace('/', ".")
}

/// Binary name to internal name.
pub fn internal_name(binary: &str) -> String {
    binary.replace('.', "/")
}

/// Binary name to the relative resource path of its class file.
pub fn resource_name(binary: &str) -> String {
    internal_name(binary) + CLASS_SUFFIX
}

/// Resource path (always `/`-separated) to binary name, `None` for non-class resources.
pub fn binary_name_of_resource(resource: &str) -> Option<String> {
    let stem = resource.strip_suffix(CLASS_SUFFIX)?;
    if stem.is_empty() || stem.ends_with('/') {
        return None;
    }
    Some(binary_name(stem.trim_start_matches('/')))
}
