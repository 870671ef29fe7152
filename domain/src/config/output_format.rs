//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished debate is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every turn, in order
    #[default]
    Full,
    /// Only the summariser's verdict
    Summary,
    /// The session snapshot as JSON
    Json,
}
