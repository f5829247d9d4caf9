//! Query helpers for extracting named series from a report.

use af_results::AnalysisReport;

use crate::error::{AppError, AppResult};

/// Summary of a report's scalars and sizes.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub code: String,
    pub m: f64,
    pub p: f64,
    pub t: f64,
    pub cl: f64,
    pub cd: f64,
    pub camber_max: f64,
    pub n_points: usize,
    pub n_alpha: usize,
    pub has_gaps: bool,
}

/// Get report summary.
pub fn get_report_summary(report: &AnalysisReport) -> AppResult<ReportSummary> {
    if report.geometry.x.is_empty() {
        return Err(AppError::InvalidInput("Report has no geometry".to_string()));
    }

    Ok(ReportSummary {
        code: report.code.clone(),
        m: report.m,
        p: report.p,
        t: report.t,
        cl: report.cl,
        cd: report.cd,
        camber_max: report.camber_max,
        n_points: report.geometry.x.len(),
        n_alpha: report.polar.alpha_deg.len(),
        has_gaps: report.has_gaps(),
    })
}

/// Independent variable a series is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesDomain {
    /// Grid stations
    Chord,
    /// Upper-surface x coordinates
    UpperSurface,
    /// Lower-surface x coordinates
    LowerSurface,
    /// Angle of attack in degrees
    Alpha,
}

impl SeriesDomain {
    pub fn label(self) -> &'static str {
        match self {
            Self::Chord => "x",
            Self::UpperSurface => "x_upper",
            Self::LowerSurface => "x_lower",
            Self::Alpha => "alpha_deg",
        }
    }
}

/// Named series available in every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    UpperSurface,
    LowerSurface,
    Camber,
    CamberSlope,
    Thickness,
    Pressure,
    PolarCl,
    PolarCd,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 8] = [
        Self::UpperSurface,
        Self::LowerSurface,
        Self::Camber,
        Self::CamberSlope,
        Self::Thickness,
        Self::Pressure,
        Self::PolarCl,
        Self::PolarCd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::UpperSurface => "upper",
            Self::LowerSurface => "lower",
            Self::Camber => "camber",
            Self::CamberSlope => "camber_slope",
            Self::Thickness => "thickness",
            Self::Pressure => "pressure",
            Self::PolarCl => "polar_cl",
            Self::PolarCd => "polar_cd",
        }
    }

    pub fn parse(name: &str) -> AppResult<Self> {
        let kind = match name {
            "upper" | "y_upper" => Self::UpperSurface,
            "lower" | "y_lower" => Self::LowerSurface,
            "camber" | "y_c" => Self::Camber,
            "camber_slope" | "dyc_dx" => Self::CamberSlope,
            "thickness" | "y_t" => Self::Thickness,
            "pressure" => Self::Pressure,
            "polar_cl" | "cl" => Self::PolarCl,
            "polar_cd" | "cd" => Self::PolarCd,
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "Unknown series: {}",
                    name
                )));
            }
        };
        Ok(kind)
    }

    pub fn domain(self) -> SeriesDomain {
        match self {
            Self::UpperSurface => SeriesDomain::UpperSurface,
            Self::LowerSurface => SeriesDomain::LowerSurface,
            Self::PolarCl | Self::PolarCd => SeriesDomain::Alpha,
            _ => SeriesDomain::Chord,
        }
    }

    /// Abscissa and values; `None` marks a non-finite value.
    pub(crate) fn columns(
        self,
        report: &AnalysisReport,
    ) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
        let g = &report.geometry;
        let polar = &report.polar;
        match self {
            Self::UpperSurface => (dense(&g.x_upper), dense(&g.y_upper)),
            Self::LowerSurface => (dense(&g.x_lower), dense(&g.y_lower)),
            Self::Camber => (dense(&g.x), dense(&g.y_c)),
            Self::CamberSlope => (dense(&g.x), dense(&g.dyc_dx)),
            Self::Thickness => (dense(&g.x), dense(&g.y_t)),
            Self::Pressure => (dense(&g.x), report.pressure.values.clone()),
            Self::PolarCl => (polar.alpha_deg.clone(), polar.cl.clone()),
            Self::PolarCd => (polar.alpha_deg.clone(), polar.cd.clone()),
        }
    }
}

fn dense(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// Names accepted by `extract_series`.
pub fn list_series_names() -> Vec<&'static str> {
    SeriesKind::ALL.iter().map(|k| k.name()).collect()
}

/// Extract `(abscissa, value)` pairs for a named series. Pairs with a
/// non-finite abscissa or value are skipped.
pub fn extract_series(report: &AnalysisReport, name: &str) -> AppResult<Vec<(f64, f64)>> {
    let kind = SeriesKind::parse(name)?;
    let (abscissa, values) = kind.columns(report);

    Ok(abscissa
        .into_iter()
        .zip(values)
        .filter_map(|(x, v)| x.zip(v))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis_service::run_analysis;
    use af_project::AnalysisParams;

    #[test]
    fn every_listed_name_parses() {
        for name in list_series_names() {
            assert_eq!(SeriesKind::parse(name).unwrap().name(), name);
        }
    }

    #[test]
    fn unknown_series_is_invalid_input() {
        let report = run_analysis(&AnalysisParams::new("2412")).unwrap();
        assert!(matches!(
            extract_series(&report, "lift_to_drag"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn upper_series_uses_surface_x() {
        let report = run_analysis(&AnalysisParams::new("4412")).unwrap();
        let upper = extract_series(&report, "upper").unwrap();
        assert_eq!(upper.len(), 100);
        assert_eq!(upper[10].0, report.geometry.x_upper[10]);
        assert_eq!(upper[10].1, report.geometry.y_upper[10]);
    }

    #[test]
    fn gaps_are_skipped() {
        let report = run_analysis(&AnalysisParams::new("0012")).unwrap();
        assert!(extract_series(&report, "pressure").unwrap().is_empty());
        assert_eq!(extract_series(&report, "polar_cd").unwrap().len(), 100);
    }

    #[test]
    fn summary_counts() {
        let mut params = AnalysisParams::new("2412");
        params.n_points = 30;
        params.sweep.n_alpha = 7;
        let report = run_analysis(&params).unwrap();
        let summary = get_report_summary(&report).unwrap();
        assert_eq!(summary.n_points, 30);
        assert_eq!(summary.n_alpha, 7);
        assert!(!summary.has_gaps);
    }
}
