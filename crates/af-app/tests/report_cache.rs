//! Service layer: caching, project runs, batches.

use af_app::*;
use af_project::{AnalysisDef, AnalysisParams};
use af_results::ReportStore;

fn fresh_store(name: &str) -> ReportStore {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    ReportStore::new(dir).unwrap()
}

#[test]
fn second_request_hits_cache() {
    let store = fresh_store("af_app_cache_hit");
    let params = AnalysisParams::new("2412");
    let options = AnalysisOptions::default();

    let first = ensure_report(&store, &params, &options).unwrap();
    assert!(!first.loaded_from_cache);
    assert!(store.has_report(&first.report_id));

    let second = ensure_report(&store, &params, &options).unwrap();
    assert!(second.loaded_from_cache);
    assert_eq!(second.report_id, first.report_id);
    assert_eq!(second.report, first.report);
    assert_eq!(second.manifest.params, params);
}

#[test]
fn no_cache_recomputes() {
    let store = fresh_store("af_app_no_cache");
    let params = AnalysisParams::new("4415");

    ensure_report(&store, &params, &AnalysisOptions::default()).unwrap();
    let options = AnalysisOptions {
        use_cache: false,
        ..Default::default()
    };
    let again = ensure_report(&store, &params, &options).unwrap();
    assert!(!again.loaded_from_cache);
    assert_eq!(list_reports(&store, Some("4415")).unwrap().len(), 1);
}

#[test]
fn symmetric_report_round_trips_through_store() {
    let store = fresh_store("af_app_symmetric");
    let params = AnalysisParams::new("0012");

    let saved = ensure_report(&store, &params, &AnalysisOptions::default()).unwrap();
    let (_manifest, loaded) = load_report(&store, &saved.report_id).unwrap();
    assert_eq!(loaded, saved.report);
    assert!(loaded.has_gaps());
}

#[test]
fn missing_report_maps_to_not_found() {
    let store = fresh_store("af_app_missing");
    assert!(matches!(
        load_report(&store, "does-not-exist"),
        Err(AppError::ReportNotFound(_))
    ));
}

#[test]
fn batch_keeps_order_and_isolates_failures() {
    let defs: Vec<AnalysisDef> = ["2412", "12", "0012", "9999"]
        .iter()
        .enumerate()
        .map(|(i, code)| AnalysisDef {
            id: format!("a{i}"),
            description: None,
            params: AnalysisParams::new(*code),
        })
        .collect();

    let results = run_batch(&defs);
    assert_eq!(results.len(), 4);
    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a0", "a1", "a2", "a3"]);
    assert!(results[0].result.is_ok());
    assert!(matches!(results[1].result, Err(AppError::Geometry(_))));
    assert!(results[2].result.is_ok());
    assert_eq!(results[3].result.as_ref().unwrap().code, "9999");
}

#[test]
fn project_run_stores_beside_file() {
    let dir = std::env::temp_dir().join("af_app_project_run");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("wing.yaml");
    std::fs::write(
        &path,
        r#"
version: 1
name: wing
analyses:
  - id: root
    code: "2412"
  - id: tip
    code: "0009"
    n_points: 41
    sweep:
      alpha_min_deg: -4.0
      alpha_max_deg: 8.0
      n_alpha: 13
"#,
    )
    .unwrap();

    let items = run_project(&path, &AnalysisOptions::default()).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id, "tip");
    assert_eq!(items[1].response.report.geometry.x.len(), 41);
    assert_eq!(items[1].response.report.polar.alpha_deg.len(), 13);
    assert!(dir.join(".airfoil").join("reports").exists());

    let again = run_project(&path, &AnalysisOptions::default()).unwrap();
    assert!(again.iter().all(|item| item.response.loaded_from_cache));
}

#[test]
fn invalid_project_reports_validation_error() {
    let dir = std::env::temp_dir().join("af_app_project_invalid");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: bad\nanalyses:\n  - id: x\n    code: \"2412\"\n    n_points: 1\n",
    )
    .unwrap();

    assert!(matches!(
        run_project(&path, &AnalysisOptions::default()),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn non_finite_bounds_are_rejected_before_storing() {
    let store = fresh_store("af_app_non_finite_bounds");
    let mut params = AnalysisParams::new("2412");
    params.sweep.alpha_max_deg = f64::INFINITY;
    params.sweep.n_alpha = 3;

    assert!(matches!(
        ensure_report(&store, &params, &AnalysisOptions::default()),
        Err(AppError::Validation(_))
    ));

    params.sweep.alpha_max_deg = f64::NAN;
    assert!(matches!(
        ensure_report(&store, &params, &AnalysisOptions::default()),
        Err(AppError::Validation(_))
    ));
    assert!(list_reports(&store, None).unwrap().is_empty());
}

#[test]
fn overflowing_sweep_reloads_from_cache() {
    let store = fresh_store("af_app_overflowing_sweep");
    let mut params = AnalysisParams::new("2412");
    params.sweep.alpha_min_deg = -1e308;
    params.sweep.alpha_max_deg = 1e308;
    params.sweep.n_alpha = 3;
    let options = AnalysisOptions::default();

    let first = ensure_report(&store, &params, &options).unwrap();
    assert!(first.report.has_gaps());
    assert_eq!(first.report.polar.alpha_deg[0], None);
    assert_eq!(first.report.polar.alpha_deg[2], Some(1e308));

    let (_manifest, loaded) = load_report(&store, &first.report_id).unwrap();
    assert_eq!(loaded, first.report);

    let second = ensure_report(&store, &params, &options).unwrap();
    assert!(second.loaded_from_cache);
    assert_eq!(second.report, first.report);
}

#[test]
fn parallel_project_run_keeps_file_order() {
    let dir = std::env::temp_dir().join("af_app_project_order");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("fleet.yaml");

    let codes = ["0006", "1408", "2412", "4415", "6409", "0018", "2310", "9912"];
    let mut project = af_project::AnalysisProject::new("fleet");
    for code in codes {
        project.analyses.push(AnalysisDef {
            id: format!("naca-{code}"),
            description: None,
            params: AnalysisParams::new(code),
        });
    }
    af_project::save_yaml(&path, &project).unwrap();

    let items = run_project(&path, &AnalysisOptions::default()).unwrap();
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    let expected: Vec<String> = codes.iter().map(|c| format!("naca-{c}")).collect();
    assert_eq!(ids, expected);
    for (item, code) in items.iter().zip(codes) {
        assert_eq!(item.response.report.code, code);
    }

    let store = ReportStore::for_project(&path).unwrap();
    assert_eq!(list_reports(&store, None).unwrap().len(), codes.len());
}
