use serde::{Deserialize, Serialize};

/// Verbosity level used when rendering a grip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Title only, used for nested values
    Tiny,
    /// Compact summary with a few properties
    #[default]
    Short,
    /// Expanded summary with more properties
    Long,
}
