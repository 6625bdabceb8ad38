use serde::Serialize;
use std::path::Path;

use crate::core::report::QualityReport;
use crate::errors::{AppError, AppResult};

use super::notify_export_success;

/// Write any serializable table as formatted JSON.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T], label: &str) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(&path, json)?;
    notify_export_success(label, path.as_ref());
    Ok(())
}

pub fn write_report_json<P: AsRef<Path>>(path: P, report: &QualityReport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(&path, json)?;
    notify_export_success("Quality report", path.as_ref());
    Ok(())
}
