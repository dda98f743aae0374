//! 調節結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{InventoryRecord, LocationRecord, PurchaseOrderRecord};

/// 調節後的採購報表記錄
///
/// 每個有庫存對應記錄的葉件各產生一筆；
/// 儲位與採購單為左外連接，查無對應時欄位留空。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciledItem {
    /// 物料ID
    pub item_id: String,

    /// 物料描述
    pub description: Option<String>,

    /// 現有庫存
    pub qty_on_hand: Decimal,

    /// 需求數量
    pub qty_needed: Decimal,

    /// 差額（現有庫存 − 需求數量，負值表示短缺）
    pub qty_difference: Decimal,

    /// 儲位
    pub location: Option<String>,

    /// 儲位代碼
    pub storage_code: Option<String>,

    /// 建議供應商
    pub preferred_vendor: Option<String>,

    /// 採購單編號
    pub po_number: Option<String>,

    /// 供應商名稱
    pub vendor_name: Option<String>,

    /// 採購單在途數量（查無採購單時為零）
    pub po_qty_remaining: Decimal,
}

impl ReconciledItem {
    /// 由庫存記錄與需求數量創建（差額在此計算）
    pub fn from_inventory(inventory: &InventoryRecord, qty_needed: Decimal) -> Self {
        Self {
            item_id: inventory.item_id.clone(),
            description: inventory.description.clone(),
            qty_on_hand: inventory.qty_on_hand,
            qty_needed,
            qty_difference: inventory.qty_on_hand - qty_needed,
            location: None,
            storage_code: None,
            preferred_vendor: None,
            po_number: None,
            vendor_name: None,
            po_qty_remaining: Decimal::ZERO,
        }
    }

    /// 建構器模式：併入儲位記錄
    pub fn with_location(mut self, record: &LocationRecord) -> Self {
        self.location = record.location.clone();
        self.storage_code = record.storage_code.clone();
        self.preferred_vendor = record.preferred_vendor.clone();
        self
    }

    /// 建構器模式：併入採購單記錄
    pub fn with_purchase_order(mut self, record: &PurchaseOrderRecord) -> Self {
        self.po_number = record.po_number.clone();
        self.vendor_name = record.vendor_name.clone();
        self.po_qty_remaining = record.qty_remaining;
        self
    }

    /// 檢查是否短缺（庫存不足以覆蓋需求）
    pub fn is_short(&self) -> bool {
        self.qty_difference < Decimal::ZERO
    }

    /// 取得短缺量（無短缺時為零）
    pub fn shortage(&self) -> Decimal {
        if self.is_short() {
            -self.qty_difference
        } else {
            Decimal::ZERO
        }
    }
}
