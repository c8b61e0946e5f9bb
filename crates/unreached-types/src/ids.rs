//! Stable identifiers: preset names, loader identifiers, and file conventions.

// Presets
pub const PRESET_COMMON: &str = "common";
pub const PRESET_WEBPACK: &str = "webpack";
pub const PRESET_VUE: &str = "vue";
pub const PRESET_NUXT: &str = "nuxt";

/// Preset used when the options name none.
pub const DEFAULT_PRESET: &str = PRESET_COMMON;

/// Report location used when the options name none.
pub const DEFAULT_OUTPUT_PATH: &str = ".unreached/unused-files.json";

/// Directory names whose contents count as vendored dependencies.
pub const VENDOR_DIRS: &[&str] = &["node_modules"];

/// Substrings identifying a stylesheet-preprocessor loader in a module's loader chain.
pub const STYLESHEET_LOADERS: &[&str] = &["sass-loader", "less-loader"];

/// Stylesheet extensions, in the order they are tried for an extension-less import target.
pub const STYLESHEET_EXTENSIONS: &[&str] = &["scss", "sass", "less", "css"];

// Trace labels
pub const TRACE_POLICY: &str = "policy";
pub const TRACE_UNIVERSE: &str = "universe";
pub const TRACE_REACHED: &str = "reached";
pub const TRACE_IMPORT_MISS: &str = "import_miss";
pub const TRACE_IMPORT_VENDORED: &str = "import_vendored";
pub const TRACE_UNREACHED: &str = "unreached";
pub const TRACE_REPORT_PATH: &str = "report_path";
