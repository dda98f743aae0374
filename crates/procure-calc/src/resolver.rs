//! BOM 展開

use procure_core::{BomSource, Result};
use rust_decimal::Decimal;

/// 展開後的子件需求
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDemand {
    /// 子件ID
    pub component_id: String,

    /// 折算後需求數量（單位用量 × 訂購數量）
    pub quantity: Decimal,
}

/// 單一物料的展開結果
#[derive(Debug, Clone, PartialEq)]
pub enum Explosion {
    /// 獨立件：BOM 中不存在以此物料為父件的邊
    Standalone {
        item_id: String,
        quantity: Decimal,
    },

    /// 組件：展開為直接子件需求
    ///
    /// 無效的邊（子件ID空白、單位用量不為正）已被剔除，
    /// 因此列表可能為空：全為無效邊的組件展開不出任何需求，
    /// 但仍屬組件，不退化為獨立件。
    Exploded(Vec<ComponentDemand>),
}

/// BOM 展開器
///
/// 只展開一層：子件即使本身也是組件，也不會在本輪被再次展開。
pub struct BomResolver<'a> {
    bom: &'a dyn BomSource,
}

impl<'a> BomResolver<'a> {
    /// 創建新的展開器
    pub fn new(bom: &'a dyn BomSource) -> Self {
        Self { bom }
    }

    /// 解析單一物料
    ///
    /// 以父件ID查詢 BOM 邊；查無任何邊即為獨立件，
    /// 否則將訂購數量按單位用量折算到每個有效子件上。
    pub fn resolve(&self, item_id: &str, requested_qty: Decimal) -> Result<Explosion> {
        let edges = self.bom.components_of(item_id)?;

        if edges.is_empty() {
            return Ok(Explosion::Standalone {
                item_id: item_id.to_string(),
                quantity: requested_qty,
            });
        }

        let components = edges
            .iter()
            .filter(|edge| edge.is_valid())
            .map(|edge| ComponentDemand {
                component_id: edge.component_id.clone(),
                quantity: edge.qty_per_unit * requested_qty,
            })
            .collect();

        Ok(Explosion::Exploded(components))
    }
}
