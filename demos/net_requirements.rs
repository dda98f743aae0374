//! 淨需求計算示例
//!
//! 以記憶體內資料來源跑一次完整的彙總與調節，
//! 將報表以 CSV 輸出到標準輸出。

use anyhow::Result;
use procure_calc::memory::{
    MemoryBom, MemoryDemand, MemoryInventory, MemoryLocations, MemoryPurchaseOrders,
};
use procure_calc::ProcurementEngine;
use procure_core::{
    BomEdge, InventoryRecord, LocationRecord, OrderLine, PurchaseOrderRecord, ReportSink,
};
use procure_report::{render_report, CsvReportSink};
use rust_decimal::Decimal;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== 淨需求計算示例 ===\n");

    // 開放訂單：3 台自行車、2 個零售座墊
    let demand = MemoryDemand::new(vec![
        OrderLine::new("SO-100".to_string(), "BIKE-001".to_string(), Decimal::from(3)),
        OrderLine::new("SO-101".to_string(), "SEAT-001".to_string(), Decimal::from(2)),
    ]);

    // BOM：一台自行車要 1 個車架、2 個車輪、1 個座墊
    let bom = MemoryBom::new(vec![
        BomEdge::new("BIKE-001".to_string(), "FRAME-001".to_string(), Decimal::ONE),
        BomEdge::new("BIKE-001".to_string(), "WHEEL-001".to_string(), Decimal::from(2)),
        BomEdge::new("BIKE-001".to_string(), "SEAT-001".to_string(), Decimal::ONE),
    ]);

    // 庫存
    let inventory = MemoryInventory::new(vec![
        InventoryRecord::new("FRAME-001".to_string(), Decimal::from(1))
            .with_description("車架".to_string()),
        InventoryRecord::new("WHEEL-001".to_string(), Decimal::from(10))
            .with_description("車輪".to_string()),
        InventoryRecord::new("SEAT-001".to_string(), Decimal::from(2))
            .with_description("座墊".to_string()),
    ]);

    // 儲位與開放採購單
    let locations = MemoryLocations::new(vec![
        LocationRecord::new("FRAME-001".to_string())
            .with_location("A-01".to_string())
            .with_storage_code("RACK".to_string())
            .with_preferred_vendor("台中鋼鐵".to_string()),
        LocationRecord::new("SEAT-001".to_string()).with_location("B-07".to_string()),
    ]);
    let purchase_orders = MemoryPurchaseOrders::new(vec![PurchaseOrderRecord::new(
        "FRAME-001".to_string(),
        Decimal::from(5),
    )
    .with_po_number("PO-2001".to_string())
    .with_vendor_name("台中鋼鐵".to_string())]);

    // 執行計算
    let engine = ProcurementEngine::new(&demand, &bom, &inventory, &locations, &purchase_orders);
    let report = engine.run()?;

    println!("計算 {} 完成，報表記錄 {} 筆\n", report.run_id, report.items.len());

    let (header, rows) = render_report(&report.items);
    let mut sink = CsvReportSink::new(std::io::stdout());
    sink.write(&header, &rows)?;

    if report.has_shortages() {
        println!("\n短缺物料:");
        for item in report.shortages() {
            println!("  - {} 短缺 {}", item.item_id, item.shortage());
        }
    }

    if !report.unmatched.is_empty() {
        println!("\n查無庫存記錄的物料: {:?}", report.unmatched);
    }

    println!("\n結果摘要 (JSON):");
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
