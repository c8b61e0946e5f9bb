use camino::{Utf8Path, Utf8PathBuf};
use globset::Glob;
use unreached_domain::{Policy, Trace};
use unreached_types::ids::{DEFAULT_OUTPUT_PATH, DEFAULT_PRESET, TRACE_POLICY};
use unreached_types::normalize_lexically;

use crate::error::{ConfigError, SourceRootProblem};
use crate::model::AuditOptions;
use crate::presets::{self, preset_names};

pub fn resolve_policy(options: AuditOptions, cwd: &Utf8Path) -> Result<Policy, ConfigError> {
    let AuditOptions {
        preset,
        source_root,
        ignore_patterns,
        important_patterns,
        output_path,
        debug_enabled,
    } = options;

    let preset_name = non_empty(preset).unwrap_or_else(|| DEFAULT_PRESET.to_string());
    let base = presets::preset(&preset_name).ok_or_else(|| ConfigError::UnknownPreset {
        name: preset_name.clone(),
        known: preset_names().join(", "),
    })?;

    // Patterns are checked before touching the filesystem.
    let user_ignores = ignore_patterns.unwrap_or_default();
    let important = important_patterns.unwrap_or_default();
    validate_patterns("ignore", &user_ignores)?;
    validate_patterns("important", &important)?;

    let root_raw = non_empty(source_root).unwrap_or_else(|| base.source_root.to_string());
    let source_root = absolutize(cwd, &root_raw);
    check_source_root(&source_root)?;

    let mut ignores = base.ignore_patterns;
    ignores.extend(user_ignores);

    let output_raw = non_empty(output_path).unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    let policy = Policy::new(
        preset_name,
        source_root,
        ignores,
        important,
        absolutize(cwd, &output_raw),
        debug_enabled.unwrap_or(false),
    );
    Trace::from_policy(&policy).value(TRACE_POLICY, &policy);

    Ok(policy)
}

// Empty strings fall back to the preset, like an omitted option.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn absolutize(cwd: &Utf8Path, raw: &str) -> Utf8PathBuf {
    let path = Utf8Path::new(raw);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    Utf8PathBuf::from(normalize_lexically(joined.as_str()))
}

fn check_source_root(path: &Utf8Path) -> Result<(), ConfigError> {
    let reason = match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => SourceRootProblem::NotADirectory,
        Err(_) => SourceRootProblem::Missing,
    };
    Err(ConfigError::InvalidSourceRoot {
        path: path.to_path_buf(),
        reason,
    })
}

fn validate_patterns(list: &'static str, patterns: &[String]) -> Result<(), ConfigError> {
    for pattern in patterns {
        Glob::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            list,
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorKind;
    use proptest::prelude::*;
    use unreached_test_util::TempProject;

    #[test]
    fn defaults_use_common_preset_at_cwd() {
        let project = TempProject::new();
        let policy = resolve_policy(AuditOptions::default(), project.root()).expect("resolve");

        assert_eq!(policy.preset(), "common");
        assert_eq!(policy.source_root(), project.root());
        assert_eq!(
            policy.ignore_patterns(),
            presets::preset("common").expect("common").ignore_patterns
        );
        assert!(policy.important_patterns().is_empty());
        assert_eq!(
            policy.output_path(),
            project.root().join(".unreached/unused-files.json")
        );
        assert!(!policy.debug_enabled());
    }

    #[test]
    fn user_ignores_are_appended_after_preset() {
        let project = TempProject::new();
        project.mkdir("src");
        let options = AuditOptions::default()
            .with_preset("vue")
            .with_ignore_patterns(["**/*.stories.js", "**/*.md"]);

        let policy = resolve_policy(options, project.root()).expect("resolve");
        let base = presets::preset("vue").expect("vue").ignore_patterns;

        assert!(policy.ignore_patterns().starts_with(&base));
        assert_eq!(
            &policy.ignore_patterns()[base.len()..],
            &["**/*.stories.js".to_string(), "**/*.md".to_string()]
        );
        assert_eq!(policy.source_root(), project.root().join("src"));
    }

    #[test]
    fn explicit_values_override_preset() {
        let project = TempProject::new();
        project.mkdir("web/app");
        let options = AuditOptions::default()
            .with_source_root("web/./app")
            .with_important_patterns(["**/keep/**"])
            .with_output_path("reports/unused.json")
            .with_debug(true);

        let policy = resolve_policy(options, project.root()).expect("resolve");
        assert_eq!(policy.source_root(), project.root().join("web/app"));
        assert_eq!(policy.important_patterns(), &["**/keep/**".to_string()]);
        assert_eq!(
            policy.output_path(),
            project.root().join("reports/unused.json")
        );
        assert!(policy.debug_enabled());
    }

    #[test]
    fn unknown_preset_fails_before_filesystem_checks() {
        // The source root does not exist either; the preset error must win.
        let options = AuditOptions::default()
            .with_preset("bogus")
            .with_source_root("/definitely/not/here");
        let err = resolve_policy(options, Utf8Path::new("/nowhere")).unwrap_err();

        assert_eq!(err.kind(), ConfigErrorKind::UnknownPreset);
        assert!(err.to_string().contains("\"bogus\""));
        assert!(err.to_string().contains("common, webpack, vue, nuxt"));
    }

    #[test]
    fn missing_source_root_is_distinguished_from_file() {
        let project = TempProject::new();
        project.write("main.js", "");

        let missing = resolve_policy(
            AuditOptions::default().with_source_root("nope"),
            project.root(),
        )
        .unwrap_err();
        assert!(matches!(
            missing,
            ConfigError::InvalidSourceRoot {
                reason: SourceRootProblem::Missing,
                ..
            }
        ));

        let file = resolve_policy(
            AuditOptions::default().with_source_root("main.js"),
            project.root(),
        )
        .unwrap_err();
        assert!(matches!(
            file,
            ConfigError::InvalidSourceRoot {
                reason: SourceRootProblem::NotADirectory,
                ..
            }
        ));
        assert!(file.to_string().ends_with("is not a directory"));
    }

    #[test]
    fn vue_preset_without_src_dir_fails() {
        let project = TempProject::new();
        let err = resolve_policy(AuditOptions::default().with_preset("vue"), project.root())
            .unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::InvalidSourceRoot);
    }

    #[test]
    fn invalid_glob_is_rejected() {
        let project = TempProject::new();
        let err = resolve_policy(
            AuditOptions::default().with_important_patterns(["src/[oops"]),
            project.root(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::InvalidPattern);
        assert!(err.to_string().contains("important pattern `src/[oops`"));
    }

    #[test]
    fn resolved_policy_serializes_paths_as_strings() {
        let project = TempProject::new();
        let policy = resolve_policy(AuditOptions::default(), project.root()).expect("resolve");

        let value = serde_json::to_value(&policy).expect("serialize policy");
        assert_eq!(value["preset"], "common");
        assert_eq!(value["source_root"], project.root().as_str());
        assert_eq!(
            value["output_path"],
            project.root().join(".unreached/unused-files.json").as_str()
        );
        assert_eq!(value["debug_enabled"], false);
    }

    #[test]
    fn empty_strings_fall_back_to_defaults() {
        let project = TempProject::new();
        let options = AuditOptions::default()
            .with_preset("")
            .with_source_root("")
            .with_output_path("");
        let policy = resolve_policy(options, project.root()).expect("resolve");
        assert_eq!(policy.preset(), "common");
        assert_eq!(policy.source_root(), project.root());
    }

    proptest! {
        #[test]
        fn ignores_always_extend_preset_list(
            preset_idx in 0usize..4,
            extra in prop::collection::vec("[a-z]{1,6}/\\*\\*/\\*\\.[a-z]{1,3}", 0..6),
        ) {
            let project = TempProject::new();
            project.mkdir("src");
            let name = preset_names()[preset_idx];
            let options = AuditOptions::default()
                .with_preset(name)
                .with_ignore_patterns(extra.clone());

            let policy = resolve_policy(options, project.root()).expect("resolve");
            let base = presets::preset(name).expect("preset").ignore_patterns;

            prop_assert!(policy.ignore_patterns().starts_with(&base));
            prop_assert_eq!(&policy.ignore_patterns()[base.len()..], &extra[..]);
        }
    }
}
