//! # Procurement Calculation Engine
//!
//! 需求彙總與調節引擎

pub mod aggregator;
pub mod engine;
pub mod memory;
pub mod reconciler;
pub mod resolver;

// Re-export 主要類型
pub use aggregator::{PartRequirement, RequirementAggregator};
pub use engine::ProcurementEngine;
pub use reconciler::{ReconcileOutcome, Reconciler};
pub use resolver::{BomResolver, ComponentDemand, Explosion};

use serde::Serialize;
use uuid::Uuid;

/// 採購計算結果
#[derive(Debug, Clone, Serialize)]
pub struct ProcurementReport {
    /// 本次計算ID
    pub run_id: Uuid,

    /// 調節後的報表記錄
    pub items: Vec<procure_core::ReconciledItem>,

    /// 查無庫存記錄而被剔除的物料ID
    pub unmatched: Vec<String>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ProcurementReport {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            items: Vec::new(),
            unmatched: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 檢查是否有任何短缺記錄
    pub fn has_shortages(&self) -> bool {
        self.items.iter().any(|item| item.is_short())
    }

    /// 取得所有短缺記錄
    pub fn shortages(&self) -> Vec<&procure_core::ReconciledItem> {
        self.items.iter().filter(|item| item.is_short()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procure_core::{InventoryRecord, ReconciledItem};
    use rust_decimal::Decimal;

    #[test]
    fn test_shortage_listing() {
        let mut report = ProcurementReport::empty();
        report.items.push(ReconciledItem::from_inventory(
            &InventoryRecord::new("SHORT".to_string(), Decimal::from(1)),
            Decimal::from(9),
        ));
        report.items.push(ReconciledItem::from_inventory(
            &InventoryRecord::new("COVERED".to_string(), Decimal::from(9)),
            Decimal::from(1),
        ));

        assert!(report.has_shortages());
        let shortages = report.shortages();
        assert_eq!(shortages.len(), 1);
        assert_eq!(shortages[0].item_id, "SHORT");
    }
}
