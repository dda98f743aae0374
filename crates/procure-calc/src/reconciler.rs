//! 需求調節
//!
//! 將彙總後的淨需求逐件對上庫存、儲位與開放採購單，
//! 算出短缺/結餘，產出最終報表記錄。

use procure_core::{
    InventorySource, LocationSource, PurchaseOrderSource, ReconciledItem, Result,
};

use crate::aggregator::PartRequirement;

/// 調節結果
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    /// 有庫存對應的報表記錄（依物料ID排序）
    pub items: Vec<ReconciledItem>,

    /// 查無庫存記錄而被剔除的物料ID
    ///
    /// 原始行為是靜默剔除；此清單讓呼叫端能揭露被隱藏的需求。
    pub unmatched: Vec<String>,
}

/// 調節器
pub struct Reconciler<'a> {
    inventory: &'a dyn InventorySource,
    locations: &'a dyn LocationSource,
    purchase_orders: &'a dyn PurchaseOrderSource,
}

impl<'a> Reconciler<'a> {
    /// 創建新的調節器
    pub fn new(
        inventory: &'a dyn InventorySource,
        locations: &'a dyn LocationSource,
        purchase_orders: &'a dyn PurchaseOrderSource,
    ) -> Self {
        Self {
            inventory,
            locations,
            purchase_orders,
        }
    }

    /// 調節淨需求
    ///
    /// 逐件處理（映射本身有序，結果順序可重現）：
    /// 1. 查庫存；查無記錄的物料不進報表，只記入 `unmatched`。
    /// 2. 差額 = 現有庫存 − 需求數量。
    /// 3. 儲位與採購單為左外連接，查無對應時欄位留空。
    ///
    /// 任一來源返回 `Err` 即中止整次調節，不產出部分結果。
    pub fn reconcile(&self, requirement: &PartRequirement) -> Result<ReconcileOutcome> {
        let mut items = Vec::new();
        let mut unmatched = Vec::new();

        for (item_id, &qty_needed) in requirement {
            let Some(inventory) = self.inventory.lookup(item_id)? else {
                tracing::debug!("物料 {} 查無庫存記錄，剔除", item_id);
                unmatched.push(item_id.clone());
                continue;
            };

            let mut item = ReconciledItem::from_inventory(&inventory, qty_needed);

            if let Some(location) = self.locations.lookup(item_id)? {
                item = item.with_location(&location);
            }

            if let Some(po) = self.purchase_orders.lookup(item_id)? {
                item = item.with_purchase_order(&po);
            }

            items.push(item);
        }

        Ok(ReconcileOutcome { items, unmatched })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryInventory, MemoryLocations, MemoryPurchaseOrders};
    use procure_core::{InventoryRecord, LocationRecord, PurchaseOrderRecord};
    use rust_decimal::Decimal;

    fn requirement(pairs: &[(&str, i64)]) -> PartRequirement {
        pairs
            .iter()
            .map(|(id, qty)| (id.to_string(), Decimal::from(*qty)))
            .collect()
    }

    #[test]
    fn test_shortage_computation() {
        let inventory = MemoryInventory::new(vec![
            InventoryRecord::new("PART-A".to_string(), Decimal::from(10))
                .with_description("軸承".to_string()),
        ]);
        let locations = MemoryLocations::new(vec![]);
        let purchase_orders = MemoryPurchaseOrders::new(vec![]);
        let reconciler = Reconciler::new(&inventory, &locations, &purchase_orders);

        let outcome = reconciler
            .reconcile(&requirement(&[("PART-A", 15)]))
            .unwrap();

        assert_eq!(outcome.items.len(), 1);
        let item = &outcome.items[0];
        assert_eq!(item.qty_difference, Decimal::from(-5));
        assert_eq!(item.description.as_deref(), Some("軸承"));
        assert!(outcome.unmatched.is_empty());
    }

    #[test]
    fn test_drop_on_no_inventory_match() {
        let inventory = MemoryInventory::new(vec![InventoryRecord::new(
            "KNOWN".to_string(),
            Decimal::from(3),
        )]);
        let locations = MemoryLocations::new(vec![]);
        let purchase_orders = MemoryPurchaseOrders::new(vec![]);
        let reconciler = Reconciler::new(&inventory, &locations, &purchase_orders);

        let outcome = reconciler
            .reconcile(&requirement(&[("KNOWN", 1), ("UNKNOWN", 7)]))
            .unwrap();

        // 報表只涵蓋需求與庫存的交集
        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.items[0].item_id, "KNOWN");
        assert_eq!(outcome.unmatched, vec!["UNKNOWN".to_string()]);
    }

    #[test]
    fn test_left_join_misses_leave_fields_empty() {
        let inventory = MemoryInventory::new(vec![InventoryRecord::new(
            "PART-A".to_string(),
            Decimal::from(2),
        )]);
        let locations = MemoryLocations::new(vec![]);
        let purchase_orders = MemoryPurchaseOrders::new(vec![]);
        let reconciler = Reconciler::new(&inventory, &locations, &purchase_orders);

        let outcome = reconciler.reconcile(&requirement(&[("PART-A", 2)])).unwrap();

        let item = &outcome.items[0];
        assert_eq!(item.location, None);
        assert_eq!(item.po_number, None);
        assert_eq!(item.po_qty_remaining, Decimal::ZERO);
    }

    #[test]
    fn test_full_join() {
        let inventory = MemoryInventory::new(vec![InventoryRecord::new(
            "PART-A".to_string(),
            Decimal::from(2),
        )]);
        let locations = MemoryLocations::new(vec![LocationRecord::new("PART-A".to_string())
            .with_location("C-04".to_string())
            .with_storage_code("RACK".to_string())
            .with_preferred_vendor("ACME".to_string())]);
        let purchase_orders = MemoryPurchaseOrders::new(vec![PurchaseOrderRecord::new(
            "PART-A".to_string(),
            Decimal::from(40),
        )
        .with_po_number("PO-9".to_string())
        .with_vendor_name("ACME Supply".to_string())]);
        let reconciler = Reconciler::new(&inventory, &locations, &purchase_orders);

        let outcome = reconciler.reconcile(&requirement(&[("PART-A", 2)])).unwrap();

        let item = &outcome.items[0];
        assert_eq!(item.location.as_deref(), Some("C-04"));
        assert_eq!(item.storage_code.as_deref(), Some("RACK"));
        assert_eq!(item.preferred_vendor.as_deref(), Some("ACME"));
        assert_eq!(item.po_number.as_deref(), Some("PO-9"));
        assert_eq!(item.vendor_name.as_deref(), Some("ACME Supply"));
        assert_eq!(item.po_qty_remaining, Decimal::from(40));
    }

    #[test]
    fn test_items_in_key_order() {
        let inventory = MemoryInventory::new(vec![
            InventoryRecord::new("B".to_string(), Decimal::from(1)),
            InventoryRecord::new("A".to_string(), Decimal::from(1)),
            InventoryRecord::new("C".to_string(), Decimal::from(1)),
        ]);
        let locations = MemoryLocations::new(vec![]);
        let purchase_orders = MemoryPurchaseOrders::new(vec![]);
        let reconciler = Reconciler::new(&inventory, &locations, &purchase_orders);

        let outcome = reconciler
            .reconcile(&requirement(&[("C", 1), ("A", 1), ("B", 1)]))
            .unwrap();

        let ids: Vec<&str> = outcome.items.iter().map(|i| i.item_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }
}
