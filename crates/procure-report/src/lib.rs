//! # Procurement Report
//!
//! 報表欄位映射與輸出

pub mod render;
pub mod sink;

// Re-export 主要類型
pub use render::{header_row, render_report, render_row, REPORT_COLUMNS};
pub use sink::{CsvReportSink, JsonReportSink};
