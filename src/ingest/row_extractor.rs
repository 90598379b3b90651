// ==========================================
// 阀门产品目录系统 - 行提取器实现
// ==========================================
// 职责: CSV 文本 → 有序 RawRow 序列
// 说明: 采用标准 CSV 分词器,带引号字段内的逗号不会错位列
// ==========================================

use crate::domain::product::RawRow;
use crate::ingest::error::IngestResult;
use csv::ReaderBuilder;

pub struct RowExtractor;

impl RowExtractor {
    /// 解析 CSV 文本为原始行记录
    ///
    /// # 规则
    /// - 首行为表头,标签去首尾空白
    /// - 数据行按列序与表头标签配对
    /// - 列数不一致时: 多余单元格丢弃,缺失单元格视为缺失列
    /// - 全空白行跳过
    /// - 表头为空 → 零可用列 → 零行（不报错）
    pub fn extract(&self, csv_text: &str) -> IngestResult<Vec<RawRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(csv_text.as_bytes());

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Ok(Vec::new());
        }

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;

            let row: RawRow = headers
                .iter()
                .zip(record.iter())
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, value)| (header.clone(), value.trim().to_string()))
                .collect();

            // 跳过完全空白的行
            if row.is_empty() || row.is_blank() {
                continue;
            }

            rows.push(row);
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic() {
        let csv_text = "Art. No.,Product,Company\n1001,Globe Valve,ZOLOTO\n1002,Gate Valve,Sant\n";

        let extractor = RowExtractor;
        let rows = extractor.extract(csv_text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Art. No."), Some("1001"));
        assert_eq!(rows[0].get("Product"), Some("Globe Valve"));
        assert_eq!(rows[1].get("Company"), Some("Sant"));
    }

    #[test]
    fn test_extract_row_count_matches_data_lines() {
        // 表头之外每行产出一条记录
        let csv_text = "A,B\n1,2\n3,4\n5,6";

        let extractor = RowExtractor;
        let rows = extractor.extract(csv_text).unwrap();

        assert_eq!(rows.len(), 3);
        for row in &rows {
            let labels: Vec<&str> = row.iter().map(|(l, _)| l).collect();
            assert_eq!(labels, vec!["A", "B"]);
        }
    }

    #[test]
    fn test_extract_quoted_embedded_comma() {
        // 带引号字段内的逗号不得错位后续列
        let csv_text = "Art. No.,Product,Company\n1001,\"Globe Valve, Flanged\",ZOLOTO\n";

        let extractor = RowExtractor;
        let rows = extractor.extract(csv_text).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Product"), Some("Globe Valve, Flanged"));
        assert_eq!(rows[0].get("Company"), Some("ZOLOTO"));
    }

    #[test]
    fn test_extract_skip_blank_rows() {
        let csv_text = "A,B\n1,2\n,\n3,4\n";

        let extractor = RowExtractor;
        let rows = extractor.extract(csv_text).unwrap();

        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_extract_ragged_rows() {
        // 缺失单元格 → 缺失列;多余单元格丢弃
        let csv_text = "A,B,C\n1,2\n1,2,3,4\n";

        let extractor = RowExtractor;
        let rows = extractor.extract(csv_text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0].get("C"), None);
        assert_eq!(rows[1].len(), 3);
        assert_eq!(rows[1].get("C"), Some("3"));
    }

    #[test]
    fn test_extract_empty_header_yields_no_rows() {
        let extractor = RowExtractor;

        let rows = extractor.extract("\n1,2\n").unwrap();
        assert_eq!(rows.len(), 0);
    }

    #[test]
    fn test_extract_header_whitespace_trimmed() {
        let csv_text = " Art. No. , Product \n1001,Globe Valve\n";

        let extractor = RowExtractor;
        let rows = extractor.extract(csv_text).unwrap();

        assert_eq!(rows[0].get("Art. No."), Some("1001"));
        assert_eq!(rows[0].get("Product"), Some("Globe Valve"));
    }
}
