//! 庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存描述記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// 物料ID
    pub item_id: String,

    /// 物料描述
    pub description: Option<String>,

    /// 現有庫存（缺值視為零）
    pub qty_on_hand: Decimal,
}

impl InventoryRecord {
    /// 創建新的庫存記錄
    pub fn new(item_id: String, qty_on_hand: Decimal) -> Self {
        Self {
            item_id,
            description: None,
            qty_on_hand,
        }
    }

    /// 建構器模式：設置物料描述
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}
