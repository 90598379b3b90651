// ==========================================
// 阀门产品目录系统 - 表格数据源
// ==========================================
// 职责: 拉取已发布电子表格导出,交由接入层解析为 RawRow
// 说明: 单请求,无重试,无自动轮询;取消语义由 store 令牌承担
// ==========================================

use crate::domain::product::RawRow;
use crate::gateway::error::{GatewayError, GatewayResult};
use crate::ingest::gviz::GvizParser;
use crate::ingest::row_extractor::RowExtractor;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ==========================================
// SheetFormat - 导出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SheetFormat {
    Csv,  // 原始 CSV 导出（默认,CORS 兼容性更好）
    Gviz, // google.visualization 查询响应
}

impl Default for SheetFormat {
    fn default() -> Self {
        SheetFormat::Csv
    }
}

/// 拼装导出 URL（按表格 ID + 工作表 gid 参数化）
pub fn export_url(sheet_id: &str, gid: &str, format: SheetFormat) -> String {
    match format {
        SheetFormat::Csv => format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
            sheet_id, gid
        ),
        SheetFormat::Gviz => format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:json&gid={}",
            sheet_id, gid
        ),
    }
}

// ==========================================
// SheetSource Trait
// ==========================================
// 用途: 表格数据源接口（测试可注入内存实现）
// 实现者: HttpSheetSource
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// 拉取并解析为原始行记录
    async fn fetch_rows(&self) -> GatewayResult<Vec<RawRow>>;
}

// ==========================================
// HttpSheetSource 实现
// ==========================================
pub struct HttpSheetSource {
    client: reqwest::Client,
    url: String,
    format: SheetFormat,
}

impl HttpSheetSource {
    pub fn new(client: reqwest::Client, sheet_id: &str, gid: &str, format: SheetFormat) -> Self {
        Self {
            client,
            url: export_url(sheet_id, gid, format),
            format,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch_rows(&self) -> GatewayResult<Vec<RawRow>> {
        debug!(url = %self.url, "拉取表格导出");

        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;

        let rows = match self.format {
            SheetFormat::Csv => RowExtractor.extract(&body)?,
            SheetFormat::Gviz => {
                let parser = GvizParser;
                let parsed = parser.parse(&body)?;
                parser.to_rows(&parsed)?
            }
        };

        debug!(rows = rows.len(), "表格导出解析完成");
        Ok(rows)
    }
}
