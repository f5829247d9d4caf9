use af_project::*;

fn sample_project() -> AnalysisProject {
    let mut project = AnalysisProject::new("wing");
    project.analyses.push(AnalysisDef {
        id: "root".to_string(),
        description: Some("root section".to_string()),
        params: AnalysisParams::new("2412"),
    });
    let mut tip = AnalysisParams::new("0009");
    tip.n_points = 51;
    tip.sweep = SweepDef {
        alpha_min_deg: -4.0,
        alpha_max_deg: 8.0,
        n_alpha: 13,
    };
    project.analyses.push(AnalysisDef {
        id: "tip".to_string(),
        description: None,
        params: tip,
    });
    project
}

#[test]
fn yaml_roundtrip() {
    let dir = std::env::temp_dir().join("af_project_yaml_roundtrip");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("wing.yaml");

    let project = sample_project();
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(loaded, project);

    let by_ext = load_project(&path).unwrap();
    assert_eq!(by_ext, project);
}

#[test]
fn json_roundtrip() {
    let dir = std::env::temp_dir().join("af_project_json_roundtrip");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("wing.json");

    let project = sample_project();
    save_json(&path, &project).unwrap();
    let loaded = load_project(&path).unwrap();
    assert_eq!(loaded, project);
    assert_eq!(loaded.find("tip").unwrap().params.n_points, 51);
}

#[test]
fn invalid_file_is_rejected_on_load() {
    let dir = std::env::temp_dir().join("af_project_invalid");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: bad\nanalyses:\n  - id: x\n    code: \"123\"\n",
    )
    .unwrap();

    assert!(matches!(
        load_yaml(&path),
        Err(ProjectError::Validation(_))
    ));
}

#[test]
fn invalid_project_is_not_saved() {
    let dir = std::env::temp_dir().join("af_project_not_saved");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("never.yaml");
    let _ = std::fs::remove_file(&path);

    let mut project = sample_project();
    project.analyses[0].params.n_points = 0;
    assert!(save_yaml(&path, &project).is_err());
    assert!(!path.exists());
}
