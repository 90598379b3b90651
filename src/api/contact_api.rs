// ==========================================
// 阀门产品目录系统 - 询盘 API
// ==========================================
// 职责: 表单校验 + 外联提交;失败时调用方保留表单内容以便重试
// ==========================================

use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::gateway::contact::{ContactForm, ContactGateway};
use crate::i18n::t_with_args;

// ==========================================
// ContactApi - 询盘 API
// ==========================================
pub struct ContactApi {
    gateway: ContactGateway,
}

impl ContactApi {
    pub fn new(gateway: ContactGateway) -> Self {
        Self { gateway }
    }

    /// 校验并提交询盘
    ///
    /// # 返回
    /// - Ok(()): 请求已发出（端点响应不可判读,即发即弃口径）
    /// - Err(ApiError::InvalidInput): 必填字段缺失,未发出请求
    /// - Err(ApiError::SubmissionFailed): 传输失败,表单内容由调用方保留
    pub async fn submit(&self, form: &ContactForm) -> ApiResult<()> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(ApiError::InvalidInput(t_with_args(
                "contact.missing_fields",
                &[("fields", &missing.join(", "))],
            )));
        }

        match self.gateway.submit(form).await {
            Ok(()) => {
                info!("询盘已提交");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "询盘提交失败");
                Err(ApiError::SubmissionFailed(e.to_string()))
            }
        }
    }
}
