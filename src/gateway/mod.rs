// ==========================================
// 阀门产品目录系统 - 外联层
// ==========================================
// 职责: 与外部服务的 HTTP 交互（表格导出拉取、询盘收单）
// ==========================================

// 模块声明
pub mod contact;
pub mod error;
pub mod sheet;

// 重导出核心类型
pub use contact::{ContactEntryIds, ContactForm, ContactGateway};
pub use error::{GatewayError, GatewayResult};
pub use sheet::{export_url, HttpSheetSource, SheetFormat, SheetSource};
