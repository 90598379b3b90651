// ==========================================
// 阀门产品目录系统 - 接入层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 接入层错误类型
///
/// 行级数据问题（缺失标识字段、数值不可解析）不产生错误,
/// 按宽容策略降级或跳过;此处仅覆盖整批失败的场景。
#[derive(Error, Debug)]
pub enum IngestError {
    // ===== 表格解析错误 =====
    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("Gviz 响应格式无效: {0}")]
    GvizFormatError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<csv::Error>
impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::CsvParseError(err.to_string())
    }
}

// 实现 From<serde_json::Error>（Gviz 表体为 JSON）
impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::GvizFormatError(err.to_string())
    }
}

/// Result 类型别名
pub type IngestResult<T> = Result<T, IngestError>;
