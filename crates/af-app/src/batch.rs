//! Batch and project-wide analysis runs.

use std::path::Path;

use af_project::AnalysisDef;
use af_results::{AnalysisReport, ReportStore};
use rayon::prelude::*;

use crate::analysis_service::{AnalysisOptions, ReportResponse, ensure_report, run_analysis};
use crate::error::AppResult;

/// Outcome of one analysis in a batch.
#[derive(Debug)]
pub struct BatchItem {
    pub id: String,
    pub result: AppResult<AnalysisReport>,
}

/// Run independent analyses in parallel. Output order follows input order
/// and a failing analysis does not affect the others.
pub fn run_batch(analyses: &[AnalysisDef]) -> Vec<BatchItem> {
    tracing::debug!(count = analyses.len(), "running analysis batch");
    analyses
        .par_iter()
        .map(|def| BatchItem {
            id: def.id.clone(),
            result: run_analysis(&def.params),
        })
        .collect()
}

/// One analysis of a project run.
#[derive(Debug, Clone)]
pub struct ProjectRunItem {
    pub id: String,
    pub response: ReportResponse,
}

/// Load an analysis file and ensure a stored report for each entry, using
/// the store beside the file. Entries run in parallel; the output follows
/// file order and any failing entry fails the run.
pub fn run_project(project_path: &Path, options: &AnalysisOptions) -> AppResult<Vec<ProjectRunItem>> {
    let project = af_project::load_project(project_path)?;
    let store = ReportStore::for_project(project_path)?;
    tracing::info!(project = %project.name, analyses = project.analyses.len(), "running project");

    project
        .analyses
        .par_iter()
        .map(|def| -> AppResult<ProjectRunItem> {
            Ok(ProjectRunItem {
                id: def.id.clone(),
                response: ensure_report(&store, &def.params, options)?,
            })
        })
        .collect()
}
