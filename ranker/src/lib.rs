//! Corpus loading and result presentation for the `docrank` binary.

pub mod demo;
pub mod load;
pub mod report;

pub use load::{load_path, SourceDoc};
pub use report::{build_report, write_json, write_text, ReportEntry, ReportOptions};
