//! Analysis file schema definitions.

use af_aero::AngleSweep;
use af_geometry::DEFAULT_POINTS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisProject {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub analyses: Vec<AnalysisDef>,
}

impl AnalysisProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            analyses: Vec::new(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&AnalysisDef> {
        self.analyses.iter().find(|a| a.id == id)
    }
}

/// One named analysis in a project file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub params: AnalysisParams,
}

/// Everything that determines an analysis result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisParams {
    /// 4-digit shape code, kept as text so leading zeros survive.
    pub code: String,
    #[serde(default = "default_points")]
    pub n_points: usize,
    #[serde(default)]
    pub sweep: SweepDef,
}

impl AnalysisParams {
    /// Parameters with the engine's default sampling.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            n_points: DEFAULT_POINTS,
            sweep: SweepDef::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub alpha_min_deg: f64,
    pub alpha_max_deg: f64,
    pub n_alpha: usize,
}

impl Default for SweepDef {
    fn default() -> Self {
        Self {
            alpha_min_deg: AngleSweep::DEFAULT_MIN_DEG,
            alpha_max_deg: AngleSweep::DEFAULT_MAX_DEG,
            n_alpha: AngleSweep::DEFAULT_COUNT,
        }
    }
}

fn default_points() -> usize {
    DEFAULT_POINTS
}
