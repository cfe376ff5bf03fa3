//! Game catalog configuration.

use serde::{Deserialize, Serialize};

/// Location of the static catalog data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding `games.json` and the `items/<slug>/` folders.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Minimum level applied when the caller sends no level bounds.
    #[serde(default = "default_min_level")]
    pub default_min_level: Option<i64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_min_level: default_min_level(),
        }
    }
}

fn default_data_dir() -> String {
    "data/json".to_string()
}

fn default_min_level() -> Option<i64> {
    Some(8)
}
