// src/error.rs
use thiserror::Error;

/// Caller-input problems detected while resolving a report.
///
/// Both kinds abort the whole call before any item is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("invalid report type: {0}")]
    InvalidReportType(String),

    #[error("invalid user role: {0}")]
    InvalidUserRole(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
