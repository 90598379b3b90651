// ==========================================
// 阀门产品目录系统 - Gviz 响应解析器
// ==========================================
// 职责: google.visualization 查询响应（JSONP 包裹）→ RawRow 序列
// 说明: 备用接入格式,与 CSV 导出二选一
// ==========================================

use crate::domain::product::RawRow;
use crate::ingest::error::{IngestError, IngestResult};
use serde::Deserialize;
use serde_json::Value;

const JSONP_COMMENT: &str = "/*O_o*/";
const JSONP_PREFIX: &str = "google.visualization.Query.setResponse(";
const JSONP_SUFFIX: &str = ");";

// ==========================================
// Gviz 响应结构（仅反序列化用到的字段）
// ==========================================
#[derive(Debug, Deserialize)]
pub struct GvizResponse {
    pub status: String,
    pub table: Option<GvizTable>,
}

#[derive(Debug, Deserialize)]
pub struct GvizTable {
    pub cols: Vec<GvizCol>,
    pub rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
pub struct GvizCol {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct GvizRow {
    pub c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
pub struct GvizCell {
    #[serde(default)]
    pub v: Option<Value>, // 原始值
    #[serde(default)]
    pub f: Option<String>, // 格式化值（优先）
}

pub struct GvizParser;

impl GvizParser {
    /// 解析 JSONP 包裹的 Gviz 响应文本
    pub fn parse(&self, text: &str) -> IngestResult<GvizResponse> {
        let trimmed = text.trim();
        let trimmed = trimmed.strip_prefix(JSONP_COMMENT).unwrap_or(trimmed).trim();

        let body = trimmed
            .strip_prefix(JSONP_PREFIX)
            .ok_or_else(|| {
                IngestError::GvizFormatError("缺少 setResponse 包裹前缀".to_string())
            })?
            .trim_end();
        let body = body.strip_suffix(JSONP_SUFFIX).unwrap_or(body);

        let response: GvizResponse = serde_json::from_str(body)?;
        Ok(response)
    }

    /// 响应表体 → RawRow 序列
    ///
    /// # 规则
    /// - 列标签取 label,label 为空时回退到 id;两者皆空的列跳过
    /// - 单元格值取 f（格式化值）,缺失时回退 v 的字符串化
    /// - 全空白行跳过
    pub fn to_rows(&self, response: &GvizResponse) -> IngestResult<Vec<RawRow>> {
        if response.status != "ok" {
            return Err(IngestError::GvizFormatError(format!(
                "响应状态异常: {}",
                response.status
            )));
        }
        let table = response.table.as_ref().ok_or_else(|| {
            IngestError::GvizFormatError("响应不含表体".to_string())
        })?;

        let headers: Vec<String> = table
            .cols
            .iter()
            .map(|col| {
                if col.label.trim().is_empty() {
                    col.id.trim().to_string()
                } else {
                    col.label.trim().to_string()
                }
            })
            .collect();

        let mut rows = Vec::new();
        for gviz_row in &table.rows {
            let mut row = RawRow::new();
            for (idx, cell) in gviz_row.c.iter().enumerate() {
                let header = match headers.get(idx) {
                    Some(h) if !h.is_empty() => h,
                    _ => continue,
                };
                let value = cell.as_ref().map(cell_text).unwrap_or_default();
                row.push(header.clone(), value);
            }

            if row.is_empty() || row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

/// 单元格取值: f 优先,否则 v 字符串化
fn cell_text(cell: &GvizCell) -> String {
    if let Some(formatted) = &cell.f {
        return formatted.trim().to_string();
    }
    match &cell.v {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
