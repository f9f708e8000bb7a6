/// Prefix of every per-variant dependency bucket name.
pub const CUSTOM_CONFIGURATIONS_PREFIX: &str = "weaver";

/// Directory, inside a library artifact, holding the plugin metadata resource.
pub const LIBRARY_METADATA_DIR: &str = "META-INF/weaver-plugins";
pub const PLUGINS_METADATA_FILE_NAME: &str = "plugins.properties";
pub const PLUGINS_PROPERTIES_CLASSES_KEY: &str = "plugin-classes";

/// Type every instrumentation plugin class implements.
pub const PLUGIN_CAPABILITY_CLASS: &str = "net.bytebuddy.build.Plugin";

/// Relative path of the metadata resource inside an archive or a resources directory.
pub fn plugins_metadata_path() -> String {
    format!("{LIBRARY_METADATA_DIR}/{PLUGINS_METADATA_FILE_NAME}")
}
