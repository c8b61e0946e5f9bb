use unreached_types::ids::{PRESET_COMMON, PRESET_NUXT, PRESET_VUE, PRESET_WEBPACK};

/// A named bundle of source-root default and baseline ignore patterns.
///
/// Keep these small and readable. Project-specific rules belong in user options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub source_root: &'static str,
    pub ignore_patterns: Vec<String>,
}

/// Look up a registered preset by name.
pub fn preset(name: &str) -> Option<Preset> {
    match name {
        PRESET_COMMON => Some(common_preset()),
        PRESET_WEBPACK => Some(source_dir_preset(PRESET_WEBPACK)),
        PRESET_VUE => Some(source_dir_preset(PRESET_VUE)),
        PRESET_NUXT => Some(nuxt_preset()),
        _ => None,
    }
}

pub fn preset_names() -> &'static [&'static str] {
    &[PRESET_COMMON, PRESET_WEBPACK, PRESET_VUE, PRESET_NUXT]
}

fn common_preset() -> Preset {
    Preset {
        name: PRESET_COMMON,
        source_root: "./",
        ignore_patterns: common_ignores(),
    }
}

// Bundler conventions that keep sources under `src/`.
fn source_dir_preset(name: &'static str) -> Preset {
    Preset {
        name,
        source_root: "./src",
        ignore_patterns: common_ignores(),
    }
}

fn nuxt_preset() -> Preset {
    let mut ignore_patterns = common_ignores();
    ignore_patterns.extend(
        [
            ".nuxt/**/*",
            "app/**/*",
            "modules/**/*",
            "router/**/*",
            "app.html",
        ]
        .map(String::from),
    );
    Preset {
        name: PRESET_NUXT,
        source_root: "./",
        ignore_patterns,
    }
}

fn common_ignores() -> Vec<String> {
    [
        // dependencies & build output
        "node_modules/**/*",
        "dist/**/*",
        "build/**/*",
        // config files
        "*.config.js",
        "*.config.ts",
        "*.config.json",
        "*.config.yaml",
        "*.config.yml",
        "*.config.toml",
        // tool profiles
        "sonar-project.properties",
        "jsconfig.json",
        // package manager files
        "package.json",
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        // dot files & dot dirs
        "**/.*",
        "**/.*/**",
        // documentation
        "**/*.md",
        "**/*.txt",
        "**/LICENSE",
        // resources
        "assets/**/*",
        "public/**/*",
        "static/**/*",
        // scripts
        "**/*.sh",
        "**/*.bat",
        "**/*.ps1",
        "sudo",
        // non-source files
        "**/*.d.ts",
        "**/*.map",
        "**/*.min.*",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
