//! Artifact file names.

use serde::{Deserialize, Serialize};

fn default_log_file() -> String {
    "ccgen.log".to_string()
}

fn default_json_file() -> String {
    "ccgen.json".to_string()
}

fn default_dump_file() -> String {
    "ccgen_dump.txt".to_string()
}

/// Where the run's side artifacts go. Relative names are resolved against
/// the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_log_file")]
    pub log_file: String,

    #[serde(default = "default_json_file")]
    pub json_file: String,

    #[serde(default = "default_dump_file")]
    pub dump_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            json_file: default_json_file(),
            dump_file: default_dump_file(),
        }
    }
}
