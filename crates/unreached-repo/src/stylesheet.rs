//! Stylesheet `@import` / `@use` / `@forward` scanning and partial-aware resolution.
//!
//! Preprocessor loaders inline these targets before the bundler sees them, so they never show
//! up as module graph edges. This module recovers them from source text.

use camino::{Utf8Path, Utf8PathBuf};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use unreached_types::ids::STYLESHEET_EXTENSIONS;
use unreached_types::normalize_lexically;

// String literals come first so comment markers inside quotes (`'vendor/*'`, URLs) are kept.
static COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"[^"\n]*"|'[^'\n]*'|/\*.*?\*/|//[^\n]*"#).expect("comment regex")
});

// Keyword, optional Less import options `(reference)`, then one or more quoted targets.
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"@(?:import|use|forward)\s*(?:\([^)]*\)\s*)?((?:(?:"[^"\n]*"|'[^'\n]*')\s*,\s*)*(?:"[^"\n]*"|'[^'\n]*'))"#,
    )
    .expect("directive regex")
});

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\n]*)"|'([^'\n]*)'"#).expect("quoted regex"));

/// Extract every local import target from stylesheet source.
///
/// Either quote style is accepted, comma-separated lists are split, and no terminator is
/// required. Built-in modules (`sass:math`), URLs and `~package` specifiers are dropped.
pub fn scan_directives(source: &str) -> Vec<String> {
    let stripped = COMMENT.replace_all(source, |caps: &Captures<'_>| {
        let matched = &caps[0];
        if matched.starts_with(['"', '\'']) {
            matched.to_string()
        } else {
            " ".to_string()
        }
    });

    let mut targets = Vec::new();
    for caps in DIRECTIVE.captures_iter(&stripped) {
        let Some(list) = caps.get(1) else { continue };
        for quoted in QUOTED.captures_iter(list.as_str()) {
            let target = quoted
                .get(1)
                .or_else(|| quoted.get(2))
                .map(|m| m.as_str().trim())
                .unwrap_or_default();
            if is_local_target(target) {
                targets.push(target.to_string());
            }
        }
    }
    targets
}

fn is_local_target(target: &str) -> bool {
    !(target.is_empty()
        || target.starts_with("sass:")
        || target.starts_with("//")
        || target.starts_with('~')
        || target.starts_with("url(")
        || target.contains("://"))
}

/// Candidate files for `target` imported from a file in `from_dir`, in resolution order.
///
/// With a stylesheet extension: the file itself, then its `_partial`. Without one: for each
/// extension in preferred order the plain file then the partial, then `index` / `_index` files
/// inside a directory of that name.
pub fn import_candidates(from_dir: &Utf8Path, target: &str) -> Vec<Utf8PathBuf> {
    let joined = Utf8PathBuf::from(normalize_lexically(from_dir.join(target).as_str()));
    let file_name = joined.file_name().map(str::to_string);
    let dir = joined.parent().map(Utf8Path::to_path_buf);

    let partial_of = |name: &str| -> Option<Utf8PathBuf> {
        if name.starts_with('_') {
            return None;
        }
        dir.as_ref().map(|d| d.join(format!("_{name}")))
    };

    let mut out = Vec::new();

    if has_stylesheet_extension(target) {
        if let Some(name) = &file_name {
            out.push(joined.clone());
            out.extend(partial_of(name));
        }
        return out;
    }

    if let Some(name) = &file_name {
        for ext in STYLESHEET_EXTENSIONS {
            let with_ext = format!("{name}.{ext}");
            if let Some(d) = &dir {
                out.push(d.join(&with_ext));
            }
            out.extend(partial_of(&with_ext));
        }
    }

    for ext in STYLESHEET_EXTENSIONS {
        out.push(joined.join(format!("index.{ext}")));
        out.push(joined.join(format!("_index.{ext}")));
    }

    out
}

/// Resolve `target` to the first existing candidate file, or `None` for a broken reference.
pub fn resolve_import(from_dir: &Utf8Path, target: &str) -> Option<Utf8PathBuf> {
    import_candidates(from_dir, target)
        .into_iter()
        .find(|candidate| std::fs::metadata(candidate).is_ok_and(|m| m.is_file()))
}

fn has_stylesheet_extension(target: &str) -> bool {
    Utf8Path::new(target)
        .extension()
        .is_some_and(|ext| {
            STYLESHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
