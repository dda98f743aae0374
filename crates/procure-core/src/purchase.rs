//! 採購單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 開放採購單記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderRecord {
    /// 物料ID
    pub item_id: String,

    /// 採購單編號
    pub po_number: Option<String>,

    /// 供應商名稱
    pub vendor_name: Option<String>,

    /// 在途數量（缺值視為零）
    pub qty_remaining: Decimal,
}

impl PurchaseOrderRecord {
    /// 創建新的採購單記錄
    pub fn new(item_id: String, qty_remaining: Decimal) -> Self {
        Self {
            item_id,
            po_number: None,
            vendor_name: None,
            qty_remaining,
        }
    }

    /// 建構器模式：設置採購單編號
    pub fn with_po_number(mut self, po_number: String) -> Self {
        self.po_number = Some(po_number);
        self
    }

    /// 建構器模式：設置供應商名稱
    pub fn with_vendor_name(mut self, vendor_name: String) -> Self {
        self.vendor_name = Some(vendor_name);
        self
    }
}
