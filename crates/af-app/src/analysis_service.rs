//! Analysis execution and caching service.

use std::time::Instant;

use af_aero::{
    AerodynamicEstimate, AngleSweep, PressureEstimate, compute_aerodynamics, estimate_pressure,
};
use af_geometry::{AirfoilGeometry, compute_geometry, parse_shape_code};
use af_project::{AnalysisParams, validate_params};
use af_results::{
    AnalysisReport, GeometrySeries, PolarSeries, PressureSeries, ReportManifest, ReportStore,
    compute_report_id, finite_or_none,
};

use crate::error::AppResult;

/// Version tag mixed into report ids; bump invalidates cached reports.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options for producing a report.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub use_cache: bool,
    pub engine_version: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            engine_version: ENGINE_VERSION.to_string(),
        }
    }
}

/// Response from `ensure_report`.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub report_id: String,
    pub manifest: ReportManifest,
    pub report: AnalysisReport,
    pub loaded_from_cache: bool,
    pub elapsed_s: f64,
}

/// Run the engine for one parameter set. No I/O.
pub fn run_analysis(params: &AnalysisParams) -> AppResult<AnalysisReport> {
    let shape = parse_shape_code(&params.code)?;
    let geometry = compute_geometry(&shape, params.n_points)?;
    let sweep = AngleSweep::linear(
        params.sweep.alpha_min_deg,
        params.sweep.alpha_max_deg,
        params.sweep.n_alpha,
    )?;
    let aero = compute_aerodynamics(&shape, &sweep);
    let pressure = estimate_pressure(&geometry);

    Ok(build_report(&geometry, &aero, &pressure))
}

fn build_report(
    geometry: &AirfoilGeometry,
    aero: &AerodynamicEstimate,
    pressure: &PressureEstimate,
) -> AnalysisReport {
    let shape = geometry.shape();
    let surfaces = geometry.surfaces();

    AnalysisReport {
        code: shape.code(),
        m: shape.m(),
        p: shape.p(),
        t: shape.t(),
        cl: aero.cl(),
        cd: aero.cd(),
        camber_max: geometry.camber_max(),
        geometry: GeometrySeries {
            x: geometry.grid().stations().to_vec(),
            x_upper: surfaces.upper_x(),
            y_upper: surfaces.upper_y(),
            x_lower: surfaces.lower_x(),
            y_lower: surfaces.lower_y(),
            y_c: geometry.camber().y_c().to_vec(),
            dyc_dx: geometry.camber().slope().to_vec(),
            y_t: geometry.thickness().y_t().to_vec(),
        },
        polar: PolarSeries {
            alpha_deg: aero
                .sweep()
                .angles_deg()
                .iter()
                .copied()
                .map(finite_or_none)
                .collect(),
            cl: aero.polar_cl().iter().copied().map(finite_or_none).collect(),
            cd: aero.polar_cd().iter().copied().map(finite_or_none).collect(),
        },
        pressure: PressureSeries {
            values: pressure.values().iter().copied().map(finite_or_none).collect(),
        },
    }
}

/// Load a cached report for `params`, or compute and store it.
///
/// Parameters are checked with the same rules as definition files before
/// anything is hashed or stored.
pub fn ensure_report(
    store: &ReportStore,
    params: &AnalysisParams,
    options: &AnalysisOptions,
) -> AppResult<ReportResponse> {
    let started = Instant::now();
    validate_params(params)?;
    let report_id = compute_report_id(params, &options.engine_version);

    if options.use_cache && store.has_report(&report_id) {
        match load_report(store, &report_id) {
            Ok((manifest, report)) => {
                tracing::info!(report_id = %report_id, code = %params.code, "loaded report from cache");
                return Ok(ReportResponse {
                    report_id,
                    manifest,
                    report,
                    loaded_from_cache: true,
                    elapsed_s: started.elapsed().as_secs_f64(),
                });
            }
            Err(err) => {
                tracing::warn!(report_id = %report_id, error = %err, "cached report unreadable, recomputing");
            }
        }
    }

    let report = run_analysis(params)?;
    if report.has_gaps() {
        tracing::warn!(code = %params.code, "report contains non-finite values");
    }

    let manifest = ReportManifest {
        report_id: report_id.clone(),
        code: report.code.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        engine_version: options.engine_version.clone(),
        params: params.clone(),
    };
    store.save_report(&manifest, &report)?;
    tracing::info!(report_id = %report_id, code = %params.code, "saved report");

    Ok(ReportResponse {
        report_id,
        manifest,
        report,
        loaded_from_cache: false,
        elapsed_s: started.elapsed().as_secs_f64(),
    })
}

/// Load a stored report and its manifest.
pub fn load_report(
    store: &ReportStore,
    report_id: &str,
) -> AppResult<(ReportManifest, AnalysisReport)> {
    let manifest = store.load_manifest(report_id)?;
    let report = store.load_report(report_id)?;
    Ok((manifest, report))
}

/// Stored report manifests, optionally only those for one code.
pub fn list_reports(store: &ReportStore, code: Option<&str>) -> AppResult<Vec<ReportManifest>> {
    Ok(store.list_reports(code)?)
}
