//! Report storage API.

use crate::types::{AnalysisReport, ReportManifest};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "manifest.json";
const REPORT_FILE: &str = "report.json";

#[derive(Clone, Debug)]
pub struct ReportStore {
    root_dir: PathBuf,
}

impl ReportStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store next to an analysis file, under `.airfoil/reports`.
    pub fn for_project(project_path: &Path) -> ResultsResult<Self> {
        let project_dir = project_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "project path has no parent directory".to_string(),
            })?;
        Self::new(project_dir.join(".airfoil").join("reports"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn report_dir(&self, report_id: &str) -> PathBuf {
        self.root_dir.join(report_id)
    }

    pub fn has_report(&self, report_id: &str) -> bool {
        self.report_dir(report_id).join(MANIFEST_FILE).exists()
    }

    pub fn save_report(
        &self,
        manifest: &ReportManifest,
        report: &AnalysisReport,
    ) -> ResultsResult<()> {
        let report_dir = self.report_dir(&manifest.report_id);
        fs::create_dir_all(&report_dir)?;

        // Report first: a manifest marks the entry as complete.
        fs::write(
            report_dir.join(REPORT_FILE),
            serde_json::to_string_pretty(report)?,
        )?;
        fs::write(
            report_dir.join(MANIFEST_FILE),
            serde_json::to_string_pretty(manifest)?,
        )?;

        Ok(())
    }

    pub fn load_manifest(&self, report_id: &str) -> ResultsResult<ReportManifest> {
        let manifest_path = self.report_dir(report_id).join(MANIFEST_FILE);

        if !manifest_path.exists() {
            return Err(ResultsError::ReportNotFound {
                report_id: report_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_report(&self, report_id: &str) -> ResultsResult<AnalysisReport> {
        let report_path = self.report_dir(report_id).join(REPORT_FILE);

        if !report_path.exists() {
            return Err(ResultsError::ReportNotFound {
                report_id: report_id.to_string(),
            });
        }

        let content = fs::read_to_string(report_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Manifests of every stored report, optionally only those for `code`.
    pub fn list_reports(&self, code: Option<&str>) -> ResultsResult<Vec<ReportManifest>> {
        let mut reports = Vec::new();

        if !self.root_dir.exists() {
            return Ok(reports);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let report_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&report_id)
                    && code.is_none_or(|c| manifest.code == c)
                {
                    reports.push(manifest);
                }
            }
        }

        reports.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(reports)
    }

    pub fn delete_report(&self, report_id: &str) -> ResultsResult<()> {
        let report_dir = self.report_dir(report_id);
        if report_dir.exists() {
            fs::remove_dir_all(report_dir)?;
        }
        Ok(())
    }
}
