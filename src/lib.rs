//! Render line items into CSV or HTML reports.
//!
//! ```
//! use itemreport_core::report::ReportGenerator;
//! use itemreport_core::types::{Item, User};
//!
//! let items = vec![Item::new(1, "Pen", 300.0), Item::new(2, "Book", 600.0)];
//! let text = ReportGenerator::new(())
//!     .generate_report("CSV", &User::new("Ann", "USER"), &items)
//!     .unwrap();
//! assert_eq!(text, "ID,NOME,VALOR,USUARIO\n1,Pen,300,Ann\n\nTotal,,\n300,,");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod format;
pub mod policy;
pub mod report;
pub mod types;

pub use error::{ReportError, Result};
pub use report::{Report, ReportGenerator};
