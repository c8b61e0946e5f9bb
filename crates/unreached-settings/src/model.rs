use serde_json::{Map, Value};

use crate::error::ConfigError;

/// User-supplied audit options. Every field is optional; absent fields fall back to the preset.
///
/// Hosts either build this directly or hand a JSON object to [`AuditOptions::from_json`], which
/// accepts the camelCase names and their short aliases (`src`, `ignores`, `important`, `output`,
/// `debug`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditOptions {
    pub preset: Option<String>,
    pub source_root: Option<String>,
    pub ignore_patterns: Option<Vec<String>>,
    pub important_patterns: Option<Vec<String>>,
    pub output_path: Option<String>,
    pub debug_enabled: Option<bool>,
}

// (canonical name, alias)
const OPTION_KEYS: &[(&str, &str)] = &[
    ("preset", "preset"),
    ("sourceRoot", "src"),
    ("ignorePatterns", "ignores"),
    ("importantPatterns", "important"),
    ("outputPath", "output"),
    ("debugEnabled", "debug"),
];

impl AuditOptions {
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn with_source_root(mut self, source_root: impl Into<String>) -> Self {
        self.source_root = Some(source_root.into());
        self
    }

    pub fn with_ignore_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_important_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.important_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = Some(enabled);
        self
    }

    /// Validate a dynamic options object.
    ///
    /// Unknown keys and mistyped values are rejected; `null` counts as absent.
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let obj = value.as_object().ok_or(ConfigError::NotAnObject {
            found: json_type(value),
        })?;

        for key in obj.keys() {
            let known = OPTION_KEYS
                .iter()
                .any(|(name, alias)| key == name || key == alias);
            if !known {
                return Err(ConfigError::UnknownOption {
                    name: key.clone(),
                    expected: expected_keys(),
                });
            }
        }

        Ok(Self {
            preset: string_option(obj, "preset", "preset")?,
            source_root: string_option(obj, "sourceRoot", "src")?,
            ignore_patterns: string_list_option(obj, "ignorePatterns", "ignores")?,
            important_patterns: string_list_option(obj, "importantPatterns", "important")?,
            output_path: string_option(obj, "outputPath", "output")?,
            debug_enabled: bool_option(obj, "debugEnabled", "debug")?,
        })
    }
}

fn lookup<'a>(
    obj: &'a Map<String, Value>,
    name: &'static str,
    alias: &'static str,
) -> Result<Option<&'a Value>, ConfigError> {
    let by_name = obj.get(name).filter(|v| !v.is_null());
    let by_alias = if alias == name {
        None
    } else {
        obj.get(alias).filter(|v| !v.is_null())
    };
    match (by_name, by_alias) {
        (Some(_), Some(_)) => Err(ConfigError::DuplicateOption { name, alias }),
        (a, b) => Ok(a.or(b)),
    }
}

fn string_option(
    obj: &Map<String, Value>,
    name: &'static str,
    alias: &'static str,
) -> Result<Option<String>, ConfigError> {
    match lookup(obj, name, alias)? {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConfigError::InvalidOptionType {
            option: name,
            expected: "a string",
            found: json_type(other).to_string(),
        }),
    }
}

fn string_list_option(
    obj: &Map<String, Value>,
    name: &'static str,
    alias: &'static str,
) -> Result<Option<Vec<String>>, ConfigError> {
    let items = match lookup(obj, name, alias)? {
        None => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ConfigError::InvalidOptionType {
                option: name,
                expected: "a list of strings",
                found: json_type(other).to_string(),
            });
        }
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(ConfigError::InvalidOptionType {
                option: name,
                expected: "a list of strings",
                found: format!("a list containing {}", json_type(other)),
            }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn bool_option(
    obj: &Map<String, Value>,
    name: &'static str,
    alias: &'static str,
) -> Result<Option<bool>, ConfigError> {
    match lookup(obj, name, alias)? {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(ConfigError::InvalidOptionType {
            option: name,
            expected: "a boolean",
            found: json_type(other).to_string(),
        }),
    }
}

fn expected_keys() -> String {
    OPTION_KEYS
        .iter()
        .flat_map(|(name, alias)| {
            if name == alias {
                vec![*name]
            } else {
                vec![*name, *alias]
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
