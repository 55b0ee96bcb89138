//! Translation lookup
//!
//! Bundles map dotted keys such as `dialog.Allow` to templates. Templates
//! name substitutions as `__name__`. Bundles may be flat or nested JSON
//! objects; nested objects are flattened with `.` separators.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Built-in English strings
const DEFAULT_BUNDLE: &[(&str, &str)] = &[
    ("dialog.Allow", "Allow"),
    ("dialog.Cancel", "Cancel"),
    ("dialog.remoteControlTitle", "Remote desktop control"),
    (
        "dialog.remoteControlRequestMessage",
        "Will you allow __user__ to remotely control your desktop?",
    ),
    (
        "dialog.remoteControlShareScreenWarning",
        "Note that if you press \"Allow\" you will share your screen!",
    ),
    ("notify.remoteControlGranted", "__user__ is now controlling your desktop"),
    ("notify.remoteControlDenied", "Denied remote control to __user__"),
    ("notify.remoteControlStopped", "Remote control session with __user__ ended"),
];

/// Resolves translation keys to display strings
#[derive(Debug, Clone)]
pub struct Translator {
    strings: HashMap<String, String>,
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            strings: DEFAULT_BUNDLE
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Translator {
    /// Translator with the built-in English strings
    pub fn new() -> Self {
        Self::default()
    }

    /// Translator with no strings at all
    pub fn empty() -> Self {
        Self {
            strings: HashMap::new(),
        }
    }

    /// Translate `key`, replacing each `__name__` with its substitution.
    ///
    /// Unknown keys translate to themselves.
    pub fn t(&self, key: &str, substitutions: &[(&str, &str)]) -> String {
        let Some(template) = self.strings.get(key) else {
            tracing::debug!("Missing translation for {}", key);
            return key.to_string();
        };

        substitutions
            .iter()
            .fold(template.clone(), |text, (name, value)| {
                text.replace(&format!("__{}__", name), value)
            })
    }

    /// Whether a translation exists for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    /// Merge a JSON bundle over the current strings
    pub fn merge_json(&mut self, json: &str) -> Result<usize> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(Error::Translation(
                "bundle root must be a JSON object".to_string(),
            ));
        };

        // Nothing is merged unless the whole bundle is valid
        let mut flat = Vec::new();
        for (key, value) in map {
            flatten(key, value, &mut flat)?;
        }

        let merged = flat.len();
        self.strings.extend(flat);
        Ok(merged)
    }

    /// Load a JSON bundle from disk and merge it over the current strings
    pub fn load_bundle(&mut self, path: &Path) -> Result<usize> {
        let contents = fs::read_to_string(path)?;
        let merged = self.merge_json(&contents)?;
        tracing::info!("Loaded {} translations from {:?}", merged, path);
        Ok(merged)
    }
}

fn flatten(key: String, value: Value, out: &mut Vec<(String, String)>) -> Result<()> {
    match value {
        Value::String(text) => {
            out.push((key, text));
            Ok(())
        }
        Value::Object(children) => {
            for (child, value) in children {
                flatten(format!("{}.{}", key, child), value, out)?;
            }
            Ok(())
        }
        other => Err(Error::Translation(format!(
            "value for {} must be a string, got {}",
            key, other
        ))),
    }
}
