//! Grip stubs for render tests.
//!
//! Stubs live in `crates/reps-testing/stubs/<group>.json`, one JSON object
//! per group mapping a stub name to the grip the server sent for it.

use anyhow::{Context, Result};
use reps_types::Grip;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

/// Stub file manager for test data.
pub struct StubFiles {
    stubs_dir: PathBuf,
}

impl Default for StubFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl StubFiles {
    /// Create a stub manager reading from this crate's `stubs/` directory.
    pub fn new() -> Self {
        let stubs_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("stubs");
        Self { stubs_dir }
    }

    /// Raw JSON of every stub in a group, in file order.
    pub fn group(&self, group: &str) -> Result<Map<String, Value>> {
        let path = self.stubs_dir.join(format!("{}.json", group));
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read stub group {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?;

        match value {
            Value::Object(stubs) => Ok(stubs),
            _ => anyhow::bail!("Stub group {} is not a JSON object", group),
        }
    }

    /// Names of the stubs in a group.
    pub fn names(&self, group: &str) -> Result<Vec<String>> {
        Ok(self.group(group)?.keys().cloned().collect())
    }

    /// Decode one stub into a grip.
    pub fn get(&self, group: &str, name: &str) -> Result<Grip> {
        let mut stubs = self.group(group)?;
        let value = stubs
            .remove(name)
            .with_context(|| format!("Stub {} not found in group {}", name, group))?;
        Grip::from_value(value).with_context(|| format!("Stub {}/{} is not a valid grip", group, name))
    }
}

/// Shortcut for `StubFiles::new().get(group, name)`.
pub fn stub(group: &str, name: &str) -> Result<Grip> {
    StubFiles::new().get(group, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_grip_stub_decodes() -> Result<()> {
        let files = StubFiles::new();
        for group in ["grip", "stylesheet"] {
            for name in files.names(group)? {
                let grip = files.get(group, &name)?;
                assert!(grip.as_object().is_some(), "{}/{} is not an object grip", group, name);
            }
        }
        Ok(())
    }

    #[test]
    fn test_missing_stub() {
        let err = stub("grip", "testDoesNotExist").unwrap_err();
        assert!(err.to_string().contains("testDoesNotExist"));
    }
}
