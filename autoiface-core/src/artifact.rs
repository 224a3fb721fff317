//! Output boundary: emitted source artifacts.

use serde::{Deserialize, Serialize};

/// One synthesized interface, rendered to text.
///
/// Created fresh per candidate and never mutated afterwards; artifacts are
/// independent of each other. Serializable so hosts can persist or
/// snapshot-compare emitted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Artifact name: the synthesized interface name plus the generated-file
    /// suffix, e.g. `ITestService.g.cs`.
    pub hint_name: String,
    /// Full rendered declaration text.
    pub text: String,
}

impl GeneratedFile {
    pub fn new(hint_name: impl Into<String>, text: impl Into<String>) -> Self {
        GeneratedFile {
            hint_name: hint_name.into(),
            text: text.into(),
        }
    }
}
