//! CSV export of report series.

use std::io::Write;

use af_results::AnalysisReport;

use crate::error::{AppError, AppResult};
use crate::query::SeriesKind;

/// Render one or more series as CSV. All series must share an abscissa;
/// the first column is that abscissa and non-finite cells are left empty.
pub fn series_csv(report: &AnalysisReport, names: &[&str]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_series_csv(&mut buf, report, names)?;
    String::from_utf8(buf).map_err(|e| AppError::InvalidInput(e.to_string()))
}

/// Write series as CSV, returning the number of data rows.
pub fn write_series_csv<W: Write>(
    writer: &mut W,
    report: &AnalysisReport,
    names: &[&str],
) -> AppResult<usize> {
    let kinds = names
        .iter()
        .map(|n| SeriesKind::parse(n))
        .collect::<AppResult<Vec<_>>>()?;

    let Some(first) = kinds.first() else {
        return Err(AppError::InvalidInput("No series requested".to_string()));
    };
    let domain = first.domain();
    if let Some(other) = kinds.iter().find(|k| k.domain() != domain) {
        return Err(AppError::InvalidInput(format!(
            "Series {} is indexed by {}, not {}",
            other.name(),
            other.domain().label(),
            domain.label()
        )));
    }

    let (abscissa, _) = first.columns(report);
    let columns: Vec<Vec<Option<f64>>> = kinds.iter().map(|k| k.columns(report).1).collect();

    let mut header = vec![domain.label()];
    header.extend(kinds.iter().map(|k| k.name()));
    writeln!(writer, "{}", header.join(","))?;

    for (row, x) in abscissa.iter().enumerate() {
        let mut line = x.map(|x| x.to_string()).unwrap_or_default();
        for column in &columns {
            line.push(',');
            if let Some(v) = column.get(row).copied().flatten() {
                line.push_str(&v.to_string());
            }
        }
        writeln!(writer, "{}", line)?;
    }

    Ok(abscissa.len())
}
