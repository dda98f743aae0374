//! 採購計算主流程

use procure_core::{
    BomSource, DemandSource, InventorySource, LocationSource, PurchaseOrderSource,
};

use crate::aggregator::RequirementAggregator;
use crate::reconciler::Reconciler;
use crate::resolver::BomResolver;
use crate::ProcurementReport;

/// 採購計算引擎
///
/// 單執行緒、同步執行：逐行讀需求、逐件查詢調節。
/// 任一來源失效即整次中止，不產出部分報表。
pub struct ProcurementEngine<'a> {
    demand: &'a dyn DemandSource,
    bom: &'a dyn BomSource,
    inventory: &'a dyn InventorySource,
    locations: &'a dyn LocationSource,
    purchase_orders: &'a dyn PurchaseOrderSource,
}

impl<'a> ProcurementEngine<'a> {
    /// 創建新的引擎
    pub fn new(
        demand: &'a dyn DemandSource,
        bom: &'a dyn BomSource,
        inventory: &'a dyn InventorySource,
        locations: &'a dyn LocationSource,
        purchase_orders: &'a dyn PurchaseOrderSource,
    ) -> Self {
        Self {
            demand,
            bom,
            inventory,
            locations,
            purchase_orders,
        }
    }

    /// 執行完整計算：讀取需求 → 展開彙總 → 調節
    ///
    /// 需求來源為空時正常完成，產出空報表。
    pub fn run(&self) -> procure_core::Result<ProcurementReport> {
        let start_time = std::time::Instant::now();

        // Step 1: 讀取開放訂單行
        tracing::debug!("Step 1: 讀取開放訂單行");
        let order_lines = self.demand.open_order_lines()?;
        tracing::info!("開始採購計算：訂單行 {} 筆", order_lines.len());

        // Step 2: BOM 展開與淨需求彙總
        tracing::debug!("Step 2: 展開與彙總");
        let resolver = BomResolver::new(self.bom);
        let requirement = RequirementAggregator::aggregate(&order_lines, &resolver)?;
        tracing::debug!("彙總後葉件數量: {}", requirement.len());

        // Step 3: 調節庫存、儲位與採購單
        tracing::debug!("Step 3: 調節");
        let reconciler = Reconciler::new(self.inventory, self.locations, self.purchase_orders);
        let outcome = reconciler.reconcile(&requirement)?;

        if !outcome.unmatched.is_empty() {
            tracing::warn!(
                "{} 個物料查無庫存記錄，不列入報表: {:?}",
                outcome.unmatched.len(),
                outcome.unmatched
            );
        }

        let mut report = ProcurementReport::empty();
        report.items = outcome.items;
        report.unmatched = outcome.unmatched;
        report.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "採購計算完成，報表記錄 {} 筆，耗時 {:?}",
            report.items.len(),
            start_time.elapsed()
        );

        Ok(report)
    }
}
