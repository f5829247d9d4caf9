//! Report data types.
//!
//! Series that can legitimately hold non-finite values (the whole polar,
//! since extreme sweep bounds overflow, and the illustrative pressure profile
//! of symmetric sections) are stored as `Option<f64>`, with `None` standing
//! for a non-finite value, so reports survive a JSON round trip.

use af_project::AnalysisParams;
use serde::{Deserialize, Serialize};

pub type ReportId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportManifest {
    pub report_id: ReportId,
    pub code: String,
    pub timestamp: String,
    pub engine_version: String,
    pub params: AnalysisParams,
}

/// Numeric outputs of one analysis, ready for any plotting or table tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub code: String,
    pub m: f64,
    pub p: f64,
    pub t: f64,
    pub cl: f64,
    pub cd: f64,
    pub camber_max: f64,
    pub geometry: GeometrySeries,
    pub polar: PolarSeries,
    pub pressure: PressureSeries,
}

impl AnalysisReport {
    /// True when any stored series held a non-finite value.
    pub fn has_gaps(&self) -> bool {
        self.polar
            .alpha_deg
            .iter()
            .chain(&self.polar.cl)
            .chain(&self.polar.cd)
            .chain(&self.pressure.values)
            .any(Option::is_none)
    }
}

/// Chordwise series, one entry per grid station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeometrySeries {
    pub x: Vec<f64>,
    pub x_upper: Vec<f64>,
    pub y_upper: Vec<f64>,
    pub x_lower: Vec<f64>,
    pub y_lower: Vec<f64>,
    pub y_c: Vec<f64>,
    pub dyc_dx: Vec<f64>,
    pub y_t: Vec<f64>,
}

/// Polar curves, one entry per swept angle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PolarSeries {
    pub alpha_deg: Vec<Option<f64>>,
    pub cl: Vec<Option<f64>>,
    pub cd: Vec<Option<f64>>,
}

/// Illustrative pressure-like profile; not a pressure coefficient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PressureSeries {
    pub values: Vec<Option<f64>>,
}

/// `Some(v)` for finite values, `None` otherwise.
pub fn finite_or_none(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_or_none_filters() {
        assert_eq!(finite_or_none(1.5), Some(1.5));
        assert_eq!(finite_or_none(f64::NAN), None);
        assert_eq!(finite_or_none(f64::NEG_INFINITY), None);
    }

    #[test]
    fn gaps_survive_json() {
        let report = AnalysisReport {
            code: "0012".to_string(),
            m: 0.0,
            p: 0.0,
            t: 0.12,
            cl: 0.0,
            cd: 0.01,
            camber_max: 0.0,
            geometry: GeometrySeries::default(),
            polar: PolarSeries {
                alpha_deg: vec![Some(0.0)],
                cl: vec![Some(0.0)],
                cd: vec![Some(0.01)],
            },
            pressure: PressureSeries {
                values: vec![None, None],
            },
        };
        assert!(report.has_gaps());

        let json = serde_json::to_string(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn overflowed_polar_survives_json() {
        let polar = PolarSeries {
            alpha_deg: [f64::NAN, f64::INFINITY, 1e308]
                .into_iter()
                .map(finite_or_none)
                .collect(),
            cl: vec![None, None, Some(-0.07)],
            cd: vec![None, None, Some(0.011)],
        };

        let json = serde_json::to_string(&polar).unwrap();
        let back: PolarSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, polar);
        assert_eq!(back.alpha_deg, vec![None, None, Some(1e308)]);
    }
}
