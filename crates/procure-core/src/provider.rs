//! 外部資料來源介面
//!
//! 引擎只操作記憶體內的實體；持久層與報表輸出透過這些介面接入。
//! 介面皆為同步呼叫：`Err` 代表來源本身失效，整次計算中止；
//! `Ok(None)` 則是正常的查無資料（左外連接缺項或直接剔除）。

use crate::{
    BomEdge, InventoryRecord, LocationRecord, OrderLine, PurchaseOrderRecord, Result,
};

/// 需求來源：提供全部開放訂單行
pub trait DemandSource {
    fn open_order_lines(&self) -> Result<Vec<OrderLine>>;
}

/// BOM 來源：提供指定組件的直接子件
///
/// 空集合代表該物料為獨立件（非組件）。
pub trait BomSource {
    fn components_of(&self, assembly_id: &str) -> Result<Vec<BomEdge>>;
}

/// 庫存來源：依物料ID查詢庫存描述記錄
pub trait InventorySource {
    fn lookup(&self, item_id: &str) -> Result<Option<InventoryRecord>>;
}

/// 儲位來源：依物料ID查詢儲位記錄
///
/// 多筆符合時由實作決定唯一一筆；實作必須是可重現的。
pub trait LocationSource {
    fn lookup(&self, item_id: &str) -> Result<Option<LocationRecord>>;
}

/// 採購單來源：依物料ID查詢開放採購單記錄
///
/// 多筆符合時由實作決定唯一一筆；實作必須是可重現的。
pub trait PurchaseOrderSource {
    fn lookup(&self, item_id: &str) -> Result<Option<PurchaseOrderRecord>>;
}

/// 報表輸出：接收表頭與資料列，依供給順序輸出
pub trait ReportSink {
    fn write(&mut self, header: &[String], rows: &[Vec<String>]) -> Result<()>;
}
