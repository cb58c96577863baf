// src/exit.rs
//! Standardized process exit codes for `itemreport`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ReportExit {
    /// Report rendered.
    Success = 0,
    /// Generic error (e.g. IO, malformed item input, config).
    Error = 1,
    /// Unknown report type or user role.
    InvalidInput = 2,
}

impl ReportExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Picks the exit code for an error that reached the top level.
    #[must_use]
    pub fn for_error(e: &anyhow::Error) -> Self {
        if e.downcast_ref::<ReportError>().is_some() {
            Self::InvalidInput
        } else {
            Self::Error
        }
    }
}
