//! 欄位型別結構（Typed Field Schema）
//!
//! 以固定的欄位名稱 → 語意型別映射解讀原始表格輸入。
//! 解析採寬鬆策略：空白或無法解析的儲存格一律視為缺值，
//! 絕不中斷整次計算。

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 欄位語意型別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// 文字
    Text,
    /// 整數
    Integer,
    /// 十進位數值
    Decimal,
    /// 日期
    Date,
}

/// 解析後的欄位值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    Date(NaiveDate),
}

impl FieldValue {
    /// 以數量視角讀取欄位值（整數會升格為 Decimal）
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            FieldValue::Decimal(d) => Some(*d),
            FieldValue::Integer(i) => Some(Decimal::from(*i)),
            _ => None,
        }
    }

    /// 以文字視角讀取欄位值
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// 欄位型別表
///
/// 不可變的配置映射，由呼叫端注入，不作為全域狀態。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    field_types: HashMap<String, FieldType>,
}

impl FieldSchema {
    /// 以自訂映射創建型別表
    pub fn new(field_types: HashMap<String, FieldType>) -> Self {
        Self { field_types }
    }

    /// 標準型別表（涵蓋庫存、訂單、採購單與料件定位報表的所有欄位）
    pub fn standard() -> Self {
        use FieldType as F;

        let entries: &[(&str, FieldType)] = &[
            ("Item ID", F::Text),
            ("Assembly", F::Text),
            ("Assembly Description", F::Text),
            ("Item Description", F::Text),
            ("Line Description", F::Text),
            ("Stocking U/M", F::Text),
            ("U/M ID", F::Text),
            ("Last Unit Cost", F::Decimal),
            ("Est Cost", F::Decimal),
            ("Qty on Hand", F::Decimal),
            ("Qty Needed", F::Decimal),
            ("Count", F::Integer),
            ("SO Date", F::Date),
            ("PO Date", F::Date),
            ("Ship By", F::Date),
            ("Unit Price", F::Decimal),
            ("Qty Ordered", F::Decimal),
            ("Qty Shipped", F::Decimal),
            ("Qty Received", F::Decimal),
            ("Qty Remaining", F::Decimal),
            ("Remaining Amt", F::Decimal),
            ("SO No", F::Text),
            ("PO No", F::Text),
            ("PO State", F::Text),
            ("Vendor ID", F::Text),
            ("Vendor Name", F::Text),
            ("Preferred Vendor", F::Text),
            ("Customer Name", F::Text),
            ("Ship To Name", F::Text),
            ("Ship To City", F::Text),
            ("Ship To State", F::Text),
            ("Location", F::Text),
            ("Code", F::Text),
            ("Type", F::Text),
            ("MTL", F::Text),
            ("Note", F::Text),
            ("Thickness", F::Decimal),
            ("Width", F::Decimal),
            ("Length", F::Decimal),
            ("OD", F::Decimal),
            ("Created On", F::Date),
        ];

        let field_types = entries
            .iter()
            .map(|(name, ty)| (name.to_string(), *ty))
            .collect();

        Self { field_types }
    }

    /// 查詢欄位型別，未登錄的欄位一律視為文字
    pub fn type_of(&self, field_name: &str) -> FieldType {
        self.field_types
            .get(field_name)
            .copied()
            .unwrap_or(FieldType::Text)
    }

    /// 依欄位型別解析原始文字
    ///
    /// 空白輸入與解析失敗都返回 `None`（缺值），下游以零值/跳過處理。
    pub fn parse(&self, field_name: &str, raw_text: &str) -> Option<FieldValue> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return None;
        }

        match self.type_of(field_name) {
            FieldType::Text => Some(FieldValue::Text(trimmed.to_string())),
            FieldType::Integer => trimmed.parse::<i64>().ok().map(FieldValue::Integer),
            FieldType::Decimal => trimmed.parse::<Decimal>().ok().map(FieldValue::Decimal),
            FieldType::Date => parse_date(trimmed).map(FieldValue::Date),
        }
    }
}

/// 日期解析：接受 ISO（2025-11-01）與美式（11/1/2025）兩種寫法
fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
        .ok()
}
