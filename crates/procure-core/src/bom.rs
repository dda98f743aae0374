//! BOM 模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// BOM 邊：一單位組件需要多少單位的子件
///
/// 同一個 `assembly_id` 可對應多條邊（多個子件），
/// 同一個 `component_id` 也可被多個組件共用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomEdge {
    /// 組件（父件）ID
    pub assembly_id: String,

    /// 子件ID
    pub component_id: String,

    /// 單位用量
    pub qty_per_unit: Decimal,
}

impl BomEdge {
    /// 創建新的 BOM 邊
    pub fn new(assembly_id: String, component_id: String, qty_per_unit: Decimal) -> Self {
        Self {
            assembly_id,
            component_id,
            qty_per_unit,
        }
    }

    /// 檢查此邊是否可參與展開
    ///
    /// 子件ID空白或單位用量不為正的邊在展開時跳過。
    pub fn is_valid(&self) -> bool {
        !self.component_id.trim().is_empty() && self.qty_per_unit > Decimal::ZERO
    }
}
