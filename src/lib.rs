//! # Procurement
//!
//! 需求彙總與調節引擎：把開放訂單化為淨採購清單。
//!
//! - [`procure_core`] — 資料模型、欄位型別結構與外部來源介面
//! - [`procure_calc`] — BOM 展開、淨需求彙總、庫存調節
//! - [`procure_report`] — 報表欄位映射與 CSV/JSON 輸出

pub use procure_calc as calc;
pub use procure_core as core;
pub use procure_report as report;

pub use procure_calc::{ProcurementEngine, ProcurementReport};
pub use procure_core::{ProcureError, ReconciledItem, Result};
