use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Course catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON fixture with the courses to serve. The built-in sample
    /// catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<PathBuf>,
}
