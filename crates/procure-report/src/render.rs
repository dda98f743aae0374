//! 報表列渲染
//!
//! 固定的欄位 → 報表標籤映射，順序即輸出順序。

use procure_core::ReconciledItem;

/// 報表欄位映射（來源欄位名稱, 報表標籤）
pub const REPORT_COLUMNS: &[(&str, &str)] = &[
    ("Item ID", "PART"),
    ("Item Description", "DESCRIPTION"),
    ("Qty on Hand", "HAVE"),
    ("Qty Needed", "NEED"),
    ("Qty Difference", "DIFF"),
    ("Location", "LOCATION"),
    ("PO No", "PO No"),
    ("Preferred Vendor", "VENDOR"),
    ("PO Qty Remaining", "QTY"),
    ("Code", "CODE"),
];

/// 產生表頭列
pub fn header_row() -> Vec<String> {
    REPORT_COLUMNS
        .iter()
        .map(|(_, label)| label.to_string())
        .collect()
}

/// 將單筆記錄渲染為資料列（缺值輸出為空字串）
pub fn render_row(item: &ReconciledItem) -> Vec<String> {
    vec![
        item.item_id.clone(),
        item.description.clone().unwrap_or_default(),
        item.qty_on_hand.to_string(),
        item.qty_needed.to_string(),
        item.qty_difference.to_string(),
        item.location.clone().unwrap_or_default(),
        item.po_number.clone().unwrap_or_default(),
        item.preferred_vendor.clone().unwrap_or_default(),
        item.po_qty_remaining.to_string(),
        item.storage_code.clone().unwrap_or_default(),
    ]
}

/// 渲染整份報表：表頭加上依供給順序排列的資料列
pub fn render_report(items: &[ReconciledItem]) -> (Vec<String>, Vec<Vec<String>>) {
    let rows = items.iter().map(render_row).collect();
    (header_row(), rows)
}
