//! Content-based hashing for report IDs.

use af_project::AnalysisParams;
use sha2::{Digest, Sha256};

pub fn compute_report_id(params: &AnalysisParams, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let params_json = serde_json::to_string(params).unwrap_or_default();
    hasher.update(params_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
