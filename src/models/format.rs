//! Document formats understood by the importers and exporters

use serde::{Deserialize, Serialize};

/// Serialized document format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    #[default]
    Yaml,
}

