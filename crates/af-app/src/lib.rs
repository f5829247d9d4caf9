//! Shared application service layer for the airfoil workspace.
//!
//! Centralizes what a frontend needs: running analyses through the engine,
//! caching reports on disk, batch runs, and pulling named series out of a
//! report for plotting or CSV export.

pub mod analysis_service;
pub mod batch;
pub mod error;
pub mod export;
pub mod query;

// Re-export key types for convenience
pub use analysis_service::{
    AnalysisOptions, ENGINE_VERSION, ReportResponse, ensure_report, list_reports, load_report,
    run_analysis,
};
pub use batch::{BatchItem, ProjectRunItem, run_batch, run_project};
pub use error::{AppError, AppResult};
pub use export::{series_csv, write_series_csv};
pub use query::{
    ReportSummary, SeriesDomain, SeriesKind, extract_series, get_report_summary, list_series_names,
};
