//! 記憶體內資料來源
//!
//! 測試與示例用的來源實作；也示範多筆符合時的取捨規則：
//! 同一物料有多筆儲位/採購單記錄時，取排序鍵最小的一筆
//! （儲位字串、採購單編號），結果可重現。

use std::collections::HashMap;

use procure_core::{
    BomEdge, BomSource, DemandSource, InventoryRecord, InventorySource, LocationRecord,
    LocationSource, OrderLine, PurchaseOrderRecord, PurchaseOrderSource, ReportSink, Result,
};

/// 記憶體內需求來源
#[derive(Debug, Clone, Default)]
pub struct MemoryDemand {
    order_lines: Vec<OrderLine>,
}

impl MemoryDemand {
    /// 以訂單行清單創建
    pub fn new(order_lines: Vec<OrderLine>) -> Self {
        Self { order_lines }
    }
}

impl DemandSource for MemoryDemand {
    fn open_order_lines(&self) -> Result<Vec<OrderLine>> {
        Ok(self.order_lines.clone())
    }
}

/// 記憶體內 BOM 來源
#[derive(Debug, Clone, Default)]
pub struct MemoryBom {
    edges_by_assembly: HashMap<String, Vec<BomEdge>>,
}

impl MemoryBom {
    /// 以邊清單創建，依父件ID分組
    pub fn new(edges: Vec<BomEdge>) -> Self {
        let mut edges_by_assembly: HashMap<String, Vec<BomEdge>> = HashMap::new();
        for edge in edges {
            edges_by_assembly
                .entry(edge.assembly_id.clone())
                .or_default()
                .push(edge);
        }
        Self { edges_by_assembly }
    }
}

impl BomSource for MemoryBom {
    fn components_of(&self, assembly_id: &str) -> Result<Vec<BomEdge>> {
        Ok(self
            .edges_by_assembly
            .get(assembly_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// 記憶體內庫存來源（每個物料至多一筆）
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    records: HashMap<String, InventoryRecord>,
}

impl MemoryInventory {
    /// 以記錄清單創建
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.item_id.clone(), r))
            .collect();
        Self { records }
    }
}

impl InventorySource for MemoryInventory {
    fn lookup(&self, item_id: &str) -> Result<Option<InventoryRecord>> {
        Ok(self.records.get(item_id).cloned())
    }
}

/// 記憶體內儲位來源
#[derive(Debug, Clone, Default)]
pub struct MemoryLocations {
    records: Vec<LocationRecord>,
}

impl MemoryLocations {
    /// 以記錄清單創建
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }
}

impl LocationSource for MemoryLocations {
    fn lookup(&self, item_id: &str) -> Result<Option<LocationRecord>> {
        // 多筆符合時取儲位字串最小的一筆
        Ok(self
            .records
            .iter()
            .filter(|r| r.item_id == item_id)
            .min_by(|a, b| a.location.cmp(&b.location))
            .cloned())
    }
}

/// 記憶體內採購單來源
#[derive(Debug, Clone, Default)]
pub struct MemoryPurchaseOrders {
    records: Vec<PurchaseOrderRecord>,
}

impl MemoryPurchaseOrders {
    /// 以記錄清單創建
    pub fn new(records: Vec<PurchaseOrderRecord>) -> Self {
        Self { records }
    }
}

impl PurchaseOrderSource for MemoryPurchaseOrders {
    fn lookup(&self, item_id: &str) -> Result<Option<PurchaseOrderRecord>> {
        // 多筆符合時取採購單編號最小的一筆
        Ok(self
            .records
            .iter()
            .filter(|r| r.item_id == item_id)
            .min_by(|a, b| a.po_number.cmp(&b.po_number))
            .cloned())
    }
}

/// 收集輸出的報表匯出端（測試用）
#[derive(Debug, Clone, Default)]
pub struct VecReportSink {
    /// 表頭
    pub header: Vec<String>,

    /// 資料列
    pub rows: Vec<Vec<String>>,
}

impl VecReportSink {
    /// 創建空的匯出端
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for VecReportSink {
    fn write(&mut self, header: &[String], rows: &[Vec<String>]) -> Result<()> {
        self.header = header.to_vec();
        self.rows = rows.to_vec();
        Ok(())
    }
}
