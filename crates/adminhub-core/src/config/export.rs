//! Spreadsheet export configuration.

use serde::{Deserialize, Serialize};

/// Settings for XLSX export downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Worksheet name used in exported workbooks.
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    /// Maximum number of rows allowed in a single export.
    #[serde(default = "default_max_rows")]
    pub max_rows: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: default_sheet_name(),
            max_rows: default_max_rows(),
        }
    }
}

fn default_sheet_name() -> String {
    "export".to_string()
}

fn default_max_rows() -> u64 {
    100_000
}
