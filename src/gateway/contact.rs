// ==========================================
// 阀门产品目录系统 - 询盘表单外联
// ==========================================
// 职责: 表单字段 → 外部收单端点的 URL 编码 POST
// 红线: 即发即弃 —— 响应不检视,非传输错误即视为成功
// ==========================================

use crate::gateway::error::GatewayResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ==========================================
// ContactForm - 询盘表单
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// 缺失的必填字段名（全部必填）
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }
}

// ==========================================
// ContactEntryIds - 收单端点字段标识
// ==========================================
// 说明: 端点侧的不透明 entry 标识,与表单字段一一对应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactEntryIds {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Default for ContactEntryIds {
    fn default() -> Self {
        Self {
            name: "entry.1653629278".to_string(),
            email: "entry.819945036".to_string(),
            phone: "entry.1823287760".to_string(),
            message: "entry.1826648574".to_string(),
        }
    }
}

// ==========================================
// ContactGateway - 询盘外联
// ==========================================
pub struct ContactGateway {
    client: reqwest::Client,
    endpoint: String,
    entries: ContactEntryIds,
}

impl ContactGateway {
    pub fn new(client: reqwest::Client, endpoint: String, entries: ContactEntryIds) -> Self {
        Self {
            client,
            endpoint,
            entries,
        }
    }

    /// 组装 URL 编码表单体的键值对
    pub fn form_body(&self, form: &ContactForm) -> Vec<(String, String)> {
        vec![
            (self.entries.name.clone(), form.name.clone()),
            (self.entries.email.clone(), form.email.clone()),
            (self.entries.phone.clone(), form.phone.clone()),
            (self.entries.message.clone(), form.message.clone()),
        ]
    }

    /// 提交询盘
    ///
    /// 端点不返回可判读的状态（no-cors 语义）,因此只区分
    /// 传输层失败;请求发出即视为成功。
    pub async fn submit(&self, form: &ContactForm) -> GatewayResult<()> {
        let body = self.form_body(form);

        debug!(endpoint = %self.endpoint, "提交询盘表单");
        self.client.post(&self.endpoint).form(&body).send().await?;

        Ok(())
    }
}
