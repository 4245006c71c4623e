use crate::Result;
use reps_types::Mode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-mode count limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeLimits {
    pub tiny: usize,
    pub short: usize,
    pub long: usize,
}

impl ModeLimits {
    pub const fn new(tiny: usize, short: usize, long: usize) -> Self {
        Self { tiny, short, long }
    }

    pub fn for_mode(&self, mode: Mode) -> usize {
        match mode {
            Mode::Tiny => self.tiny,
            Mode::Short => self.short,
            Mode::Long => self.long,
        }
    }
}

impl Default for ModeLimits {
    fn default() -> Self {
        Self::new(0, 3, 10)
    }
}

/// Truncation table shared by every rep.
///
/// A value of `0` in a character limit disables cropping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Properties shown by the generic object rep
    pub object_props: ModeLimits,
    /// Items shown by the array rep
    pub array_items: ModeLimits,
    /// Entries shown by the map rep
    pub map_entries: ModeLimits,
    /// Characters kept from a comment node
    pub comment_chars: ModeLimits,
    /// Nesting level from which children are forced to tiny mode
    pub max_depth: usize,
    /// Characters kept from a text node
    pub text_chars: usize,
    /// Characters kept from a displayed URL
    pub url_chars: usize,
    /// Characters kept from a function signature
    pub function_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            object_props: ModeLimits::new(0, 3, 10),
            array_items: ModeLimits::new(0, 3, 10),
            map_entries: ModeLimits::new(0, 3, 10),
            comment_chars: ModeLimits::new(30, 50, 0),
            max_depth: 8,
            text_chars: 50,
            url_chars: 0,
            function_chars: 100,
        }
    }
}

impl Limits {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load limits from a TOML file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let limits = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded rep limits");
        Ok(limits)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
