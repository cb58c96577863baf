// src/report.rs
//! Report generation.
//!
//! A report is resolved (format by report type, policy by user role), opened
//! with the format header, fed every included item in input order, closed
//! with the footer carrying the total, and trimmed.
//!
//! Resolution happens before any item is looked at, so an invalid report
//! type or role never produces partial output and never annotates an item.

use tracing::{debug, trace};

use crate::error::Result;
use crate::format::ReportFormat;
use crate::policy::InclusionPolicy;
use crate::types::{Item, User};

/// A finished report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Header, item fragments and footer with surrounding whitespace trimmed.
    pub text: String,
    /// Sum of the values of the included items.
    pub total: f64,
    /// Number of items that passed the inclusion policy.
    pub included: usize,
}

/// Renders reports for an embedding system.
///
/// The database handle is held for the embedding system; report
/// generation works only on the items it is given.
#[derive(Debug, Clone)]
pub struct ReportGenerator<D> {
    db: D,
}

impl<D> ReportGenerator<D> {
    #[must_use]
    pub fn new(database: D) -> Self {
        Self { db: database }
    }

    #[must_use]
    pub fn database(&self) -> &D {
        &self.db
    }

    /// Renders `items` for `user` in the given report type.
    ///
    /// Annotation is applied to copies; `items` is left untouched.
    ///
    /// # Errors
    /// Returns `InvalidReportType` or `InvalidUserRole` before any item is processed.
    pub fn generate_report(&self, report_type: &str, user: &User, items: &[Item]) -> Result<String> {
        self.render(report_type, user, items).map(|r| r.text)
    }

    /// Like [`ReportGenerator::generate_report`], returning the total and
    /// included count alongside the text.
    ///
    /// # Errors
    /// Returns `InvalidReportType` or `InvalidUserRole` before any item is processed.
    pub fn render(&self, report_type: &str, user: &User, items: &[Item]) -> Result<Report> {
        let (format, policy) = resolve(report_type, user)?;
        let mut out = Assembly::open(format, user);

        for (index, item) in items.iter().enumerate() {
            if !policy.should_include(item) {
                trace!(index, id = item.id, "item excluded");
                continue;
            }
            let item = policy.annotate(item.clone());
            out.push(&item, user);
        }

        Ok(out.close())
    }

    /// Renders `items` and leaves the policy annotation on the caller's items.
    ///
    /// A second call over the same items yields the same text.
    ///
    /// # Errors
    /// Returns `InvalidReportType` or `InvalidUserRole`; no item is modified in that case.
    pub fn generate_report_in_place(
        &self,
        report_type: &str,
        user: &User,
        items: &mut [Item],
    ) -> Result<String> {
        let (format, policy) = resolve(report_type, user)?;
        let mut out = Assembly::open(format, user);

        for (index, item) in items.iter_mut().enumerate() {
            if !policy.should_include(item) {
                trace!(index, id = item.id, "item excluded");
                continue;
            }
            policy.post_process_item(item);
            out.push(item, user);
        }

        Ok(out.close().text)
    }
}

fn resolve(report_type: &str, user: &User) -> Result<(ReportFormat, InclusionPolicy)> {
    let format: ReportFormat = report_type.parse()?;
    let role = user.role()?;
    let policy = InclusionPolicy::for_role(role);
    debug!(format = %format, role = role.as_str(), policy = ?policy, user = %user.name, "report resolved");
    Ok((format, policy))
}

/// Accumulated text and total for a report being built.
struct Assembly {
    format: ReportFormat,
    text: String,
    total: f64,
    included: usize,
}

impl Assembly {
    fn open(format: ReportFormat, user: &User) -> Self {
        Self {
            format,
            text: format.header(user),
            total: 0.0,
            included: 0,
        }
    }

    fn push(&mut self, item: &Item, user: &User) {
        self.text.push_str(&self.format.format_item(item, user));
        self.total += item.value;
        self.included += 1;
    }

    fn close(mut self) -> Report {
        self.text.push_str(&self.format.footer(self.total));
        debug!(included = self.included, total = self.total, "report rendered");
        Report {
            text: self.text.trim().to_string(),
            total: self.total,
            included: self.included,
        }
    }
}
