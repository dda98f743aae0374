//! 開放訂單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 開放訂單行（未出貨的客戶需求）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// 銷售訂單編號
    pub order_id: String,

    /// 物料ID
    pub item_id: String,

    /// 未出貨數量
    pub qty_remaining: Decimal,
}

impl OrderLine {
    /// 創建新的訂單行
    pub fn new(order_id: String, item_id: String, qty_remaining: Decimal) -> Self {
        Self {
            order_id,
            item_id,
            qty_remaining,
        }
    }

    /// 檢查此行是否可參與需求彙總
    ///
    /// 物料ID空白或剩餘數量不為正的行整行跳過，不產生任何需求。
    pub fn is_actionable(&self) -> bool {
        !self.item_id.trim().is_empty() && self.qty_remaining > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_line() {
        let line = OrderLine::new(
            "SO-1001".to_string(),
            "PART-A".to_string(),
            Decimal::from(5),
        );

        assert_eq!(line.order_id, "SO-1001");
        assert_eq!(line.item_id, "PART-A");
        assert!(line.is_actionable());
    }

    #[test]
    fn test_blank_item_id_is_not_actionable() {
        let line = OrderLine::new("SO-1002".to_string(), "   ".to_string(), Decimal::from(5));
        assert!(!line.is_actionable());
    }

    #[test]
    fn test_non_positive_qty_is_not_actionable() {
        let zero = OrderLine::new("SO-1003".to_string(), "PART-A".to_string(), Decimal::ZERO);
        let negative = OrderLine::new(
            "SO-1004".to_string(),
            "PART-A".to_string(),
            Decimal::from(-3),
        );

        assert!(!zero.is_actionable());
        assert!(!negative.is_actionable());
    }
}
