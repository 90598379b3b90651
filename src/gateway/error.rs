// ==========================================
// 阀门产品目录系统 - 外联层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::ingest::error::IngestError;
use thiserror::Error;

/// 外联层错误类型
#[derive(Error, Debug)]
pub enum GatewayError {
    // ===== 传输错误（连接/超时,对应发布设置/CORS 类故障）=====
    #[error("请求发送失败: {0}")]
    RequestFailed(String),

    // ===== HTTP 状态错误 =====
    #[error("HTTP 状态异常: {status} ({url})")]
    HttpStatus { status: u16, url: String },

    // ===== 响应体读取错误 =====
    #[error("响应体读取失败: {0}")]
    BodyReadError(String),

    // ===== 接入解析错误 =====
    #[error(transparent)]
    Ingest(#[from] IngestError),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GatewayError {
    /// 是否为传输级失败（用于用户提示分流）
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::RequestFailed(_))
    }
}

// 实现 From<reqwest::Error>
impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            GatewayError::BodyReadError(err.to_string())
        } else {
            GatewayError::RequestFailed(err.to_string())
        }
    }
}

/// Result 类型别名
pub type GatewayResult<T> = Result<T, GatewayError>;
