//! Unified application error type.
//! All modules (core, ingest, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Data-quality anomalies (missing identity, unusable spells, invalid
//! intervals) are deliberately NOT errors: they degrade to
//! exclusion-with-count in the QualityReport and never abort a run.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid status code: {0}")]
    InvalidStatus(String),

    #[error("Missing column in input file: {0}")]
    MissingColumn(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid study window: {0}")]
    InvalidWindow(String),

    #[error("Override table error: {0}")]
    Overrides(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
