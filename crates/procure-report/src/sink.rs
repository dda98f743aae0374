//! 報表匯出端實作

use std::io::Write;

use procure_core::{ProcureError, ReportSink, Result};

/// CSV 報表匯出端
pub struct CsvReportSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReportSink<W> {
    /// 以任意輸出目標創建
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// 取回底層輸出目標
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ProcureError::ReportWrite(e.to_string()))
    }
}

impl<W: Write> ReportSink for CsvReportSink<W> {
    fn write(&mut self, header: &[String], rows: &[Vec<String>]) -> Result<()> {
        self.writer
            .write_record(header)
            .map_err(|e| ProcureError::ReportWrite(e.to_string()))?;

        for row in rows {
            self.writer
                .write_record(row)
                .map_err(|e| ProcureError::ReportWrite(e.to_string()))?;
        }

        self.writer
            .flush()
            .map_err(|e| ProcureError::ReportWrite(e.to_string()))?;
        Ok(())
    }
}

/// JSON 報表匯出端
///
/// 將每列轉成以報表標籤為鍵的物件，輸出為 JSON 陣列。
pub struct JsonReportSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonReportSink<W> {
    /// 以任意輸出目標創建
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// 取回底層輸出目標
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonReportSink<W> {
    fn write(&mut self, header: &[String], rows: &[Vec<String>]) -> Result<()> {
        let records: Vec<serde_json::Map<String, serde_json::Value>> = rows
            .iter()
            .map(|row| {
                header
                    .iter()
                    .zip(row.iter())
                    .map(|(label, value)| {
                        (label.clone(), serde_json::Value::String(value.clone()))
                    })
                    .collect()
            })
            .collect();

        serde_json::to_writer_pretty(&mut self.writer, &records)
            .map_err(|e| ProcureError::ReportWrite(e.to_string()))?;
        self.writer
            .flush()
            .map_err(|e| ProcureError::ReportWrite(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_report;
    use procure_core::{InventoryRecord, ReconciledItem};
    use rust_decimal::Decimal;

    fn sample_items() -> Vec<ReconciledItem> {
        vec![ReconciledItem::from_inventory(
            &InventoryRecord::new("PART-A".to_string(), Decimal::from(10))
                .with_description("墊圈".to_string()),
            Decimal::from(15),
        )]
    }

    #[test]
    fn test_csv_sink_writes_header_and_rows() {
        let (header, rows) = render_report(&sample_items());
        let mut sink = CsvReportSink::new(Vec::new());

        sink.write(&header, &rows).unwrap();
        let bytes = sink.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "PART,DESCRIPTION,HAVE,NEED,DIFF,LOCATION,PO No,VENDOR,QTY,CODE"
        );
        assert_eq!(lines.next().unwrap(), "PART-A,墊圈,10,15,-5,,,,0,");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json_sink_keys_rows_by_label() {
        let (header, rows) = render_report(&sample_items());
        let mut sink = JsonReportSink::new(Vec::new());

        sink.write(&header, &rows).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed[0]["PART"], "PART-A");
        assert_eq!(parsed[0]["DIFF"], "-5");
        assert_eq!(parsed[0]["CODE"], "");
    }

    #[test]
    fn test_empty_report_is_header_only() {
        let (header, rows) = render_report(&[]);
        let mut sink = CsvReportSink::new(Vec::new());

        sink.write(&header, &rows).unwrap();
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();

        assert_eq!(text.lines().count(), 1);
    }
}
