//! # Procure Core
//!
//! 核心資料模型與類型定義

pub mod bom;
pub mod inventory;
pub mod location;
pub mod order;
pub mod provider;
pub mod purchase;
pub mod report;
pub mod schema;

// Re-export 主要類型
pub use bom::BomEdge;
pub use inventory::InventoryRecord;
pub use location::LocationRecord;
pub use order::OrderLine;
pub use provider::{
    BomSource, DemandSource, InventorySource, LocationSource, PurchaseOrderSource, ReportSink,
};
pub use purchase::PurchaseOrderRecord;
pub use report::ReconciledItem;
pub use schema::{FieldSchema, FieldType, FieldValue};

/// 採購引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ProcureError {
    #[error("需求來源讀取失敗: {0}")]
    DemandSource(String),

    #[error("BOM 查詢失敗: {0}")]
    BomLookup(String),

    #[error("資料查詢失敗: {0}")]
    Lookup(String),

    #[error("報表寫入失敗: {0}")]
    ReportWrite(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ProcureError>;
