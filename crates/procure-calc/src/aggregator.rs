//! 淨需求彙總

use std::collections::BTreeMap;

use procure_core::{OrderLine, Result};
use rust_decimal::Decimal;

use crate::resolver::{BomResolver, Explosion};

/// 各葉件的累計需求
///
/// 採用有序映射，讓下游調節與報表輸出有可重現的走訪順序。
/// 每次計算各自持有一份，計算結束即丟棄，不做持久化。
pub type PartRequirement = BTreeMap<String, Decimal>;

/// 需求彙總器
pub struct RequirementAggregator;

impl RequirementAggregator {
    /// 彙總所有訂單行的淨需求
    ///
    /// 逐行處理：不可行的行（物料ID空白、剩餘數量不為正）整行跳過；
    /// 獨立件直接累加本身數量，組件則將展開後的子件需求逐一累加。
    /// 累加滿足交換律與結合律，最終結果與訂單行的輸入順序無關。
    pub fn aggregate(
        order_lines: &[OrderLine],
        resolver: &BomResolver<'_>,
    ) -> Result<PartRequirement> {
        let mut requirement = PartRequirement::new();

        for line in order_lines {
            if !line.is_actionable() {
                tracing::debug!(
                    "跳過訂單行: 訂單 {}, 物料 '{}', 數量 {}",
                    line.order_id,
                    line.item_id,
                    line.qty_remaining
                );
                continue;
            }

            match resolver.resolve(&line.item_id, line.qty_remaining)? {
                Explosion::Standalone { item_id, quantity } => {
                    *requirement.entry(item_id).or_insert(Decimal::ZERO) += quantity;
                }
                Explosion::Exploded(components) => {
                    for component in components {
                        *requirement
                            .entry(component.component_id)
                            .or_insert(Decimal::ZERO) += component.quantity;
                    }
                }
            }
        }

        Ok(requirement)
    }
}
