//! Structured cargo options as read from a project target.
//!
//! Options arrive as a TOML table with camelCase keys. Keys outside
//! [`KNOWN_KEYS`] are ignored in lenient mode and rejected in strict mode.
//! Empty strings count as unset.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Keys accepted in a target's `options` table.
pub const KNOWN_KEYS: &[&str] = &[
    "toolchain",
    "features",
    "noDefaultFeatures",
    "target",
    "release",
    "targetDir",
    "outDir",
    "verbose",
    "veryVerbose",
    "quiet",
    "messageFormat",
    "locked",
    "frozen",
    "offline",
    "watch",
    "args",
];

/// Sentinel value of `features` that selects every feature.
pub const ALL_FEATURES: &str = "all";

/// How unrecognized option keys are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionsPolicy {
    /// Unknown keys are logged and dropped.
    #[default]
    Lenient,
    /// Unknown keys are an error.
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CargoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolchain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    pub no_default_features: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub release: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    pub verbose: bool,
    pub very_verbose: bool,
    pub quiet: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_format: Option<String>,
    pub locked: bool,
    pub frozen: bool,
    pub offline: bool,
    pub watch: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl CargoOptions {
    /// Reads options from a TOML table, applying `policy` to unknown keys.
    pub fn from_table(table: &toml::Table, policy: OptionsPolicy) -> Result<Self> {
        let mut recognized = toml::Table::new();

        for (key, value) in table {
            if KNOWN_KEYS.contains(&key.as_str()) {
                recognized.insert(key.clone(), value.clone());
                continue;
            }

            let suggestion = suggest_key(key).map(str::to_string);
            match policy {
                OptionsPolicy::Strict => {
                    return Err(Error::UnknownOption {
                        key: key.clone(),
                        suggestion,
                    });
                }
                OptionsPolicy::Lenient => match suggestion {
                    Some(known) => {
                        warn!(key = %key, suggestion = %known, "ignoring unrecognized option")
                    }
                    None => debug!(key = %key, "ignoring unrecognized option"),
                },
            }
        }

        for (key, value) in &recognized {
            check_type(key, value)?;
        }

        let options: CargoOptions =
            toml::Value::Table(recognized)
                .try_into()
                .map_err(|e: toml::de::Error| Error::InvalidOption {
                    key: "options".to_string(),
                    message: e.message().to_string(),
                })?;

        Ok(options.normalized())
    }

    /// Overlays `overrides` on top of `self`. Set values in `overrides` win,
    /// flags are OR-ed and trailing args are replaced when non-empty.
    pub fn merge(self, overrides: CargoOptions) -> Self {
        let overrides = overrides.normalized();
        CargoOptions {
            toolchain: overrides.toolchain.or(self.toolchain),
            features: overrides.features.or(self.features),
            no_default_features: overrides.no_default_features || self.no_default_features,
            target: overrides.target.or(self.target),
            release: overrides.release || self.release,
            target_dir: overrides.target_dir.or(self.target_dir),
            out_dir: overrides.out_dir.or(self.out_dir),
            verbose: overrides.verbose || self.verbose,
            very_verbose: overrides.very_verbose || self.very_verbose,
            quiet: overrides.quiet || self.quiet,
            message_format: overrides.message_format.or(self.message_format),
            locked: overrides.locked || self.locked,
            frozen: overrides.frozen || self.frozen,
            offline: overrides.offline || self.offline,
            watch: overrides.watch || self.watch,
            args: if overrides.args.is_empty() {
                self.args
            } else {
                overrides.args
            },
        }
    }

    /// Drops empty string values so they behave as unset.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.toolchain,
            &mut self.features,
            &mut self.target,
            &mut self.target_dir,
            &mut self.out_dir,
            &mut self.message_format,
        ] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
        self
    }
}

fn check_type(key: &str, value: &toml::Value) -> Result<()> {
    let expected = match key {
        "toolchain" | "features" | "target" | "targetDir" | "outDir" | "messageFormat" => "string",
        "args" => "array",
        _ => "boolean",
    };

    let matches = match expected {
        "string" => value.is_str(),
        "array" => value
            .as_array()
            .is_some_and(|items| items.iter().all(|v| v.is_str())),
        _ => value.is_bool(),
    };

    if matches {
        Ok(())
    } else {
        Err(Error::InvalidOption {
            key: key.to_string(),
            message: format!("expected {}, found {}", describe(expected), value.type_str()),
        })
    }
}

fn describe(expected: &str) -> &'static str {
    match expected {
        "string" => "a string",
        "array" => "an array of strings",
        _ => "a boolean",
    }
}

/// Finds a known key that differs from `key` only in case or separators.
pub fn suggest_key(key: &str) -> Option<&'static str> {
    let folded = fold_key(key);
    KNOWN_KEYS.iter().copied().find(|known| fold_key(known) == folded)
}

fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_ignores_case_and_separators() {
        assert_eq!(fold_key("no_default-Features"), "nodefaultfeatures");
    }

    #[test]
    fn suggest_key_finds_snake_case_spelling() {
        assert_eq!(suggest_key("target_dir"), Some("targetDir"));
        assert_eq!(suggest_key("jobs"), None);
    }
}
