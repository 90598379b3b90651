// ==========================================
// 阀门产品目录系统 - 配置层
// ==========================================
// 职责: 系统配置的加载、默认值与外置规则表
// ==========================================

pub mod catalog_config;

// 重导出核心类型
pub use catalog_config::{
    CatalogConfig, ConfigError, ConfigResult, ContactConfig, SheetConfig, ViewConfig,
};
