// ==========================================
// 阀门产品目录系统 - API层错误类型
// ==========================================
// 职责: 将外联/接入层技术错误转换为带补救提示的用户可见错误
// ==========================================

use crate::gateway::error::GatewayError;
use crate::i18n::t;
use thiserror::Error;

// ==========================================
// FetchHint - 拉取失败补救提示
// ==========================================
// 分流规则:
// - 传输失败（连接/超时）→ 发布设置/CORS 类指引
// - 其余（状态异常/解析失败）→ 核对表头口径指引
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchHint {
    PublishSettings, // 检查表格发布设置
    ColumnHeaders,   // 核对列标题口径
}

impl FetchHint {
    /// 提示文案（按当前语言渲染）
    pub fn message(&self) -> String {
        match self {
            FetchHint::PublishSettings => t("catalog.hint_publish_settings"),
            FetchHint::ColumnHeaders => t("catalog.hint_check_headers"),
        }
    }
}

/// API层错误类型
///
/// 所有拉取失败必须携带补救提示（发布设置类 / 表头口径类二选一）
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 目录拉取错误
    // ==========================================
    #[error("数据拉取失败: {message}")]
    FetchFailed { message: String, hint: FetchHint },

    // ==========================================
    // 表单提交错误
    // ==========================================
    #[error("询盘提交失败: {0}")]
    SubmissionFailed(String),

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 用户可见的横幅/提示文案（含补救提示,按当前语言渲染）
    pub fn user_message(&self) -> String {
        match self {
            ApiError::FetchFailed { message, hint } => {
                format!("{}: {}. {}", t("catalog.fetch_failed"), message, hint.message())
            }
            ApiError::SubmissionFailed(_) => t("contact.submit_failed"),
            ApiError::InvalidInput(msg) => msg.clone(),
            ApiError::InternalError(msg) => msg.clone(),
            ApiError::Other(err) => err.to_string(),
        }
    }
}

// ==========================================
// 从 GatewayError 转换
// ==========================================
impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        let hint = if err.is_transport() {
            FetchHint::PublishSettings
        } else {
            FetchHint::ColumnHeaders
        };

        ApiError::FetchFailed {
            message: err.to_string(),
            hint,
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
