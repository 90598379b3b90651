// ==========================================
// 阀门产品目录系统 - 目录视图层
// ==========================================
// 职责: 产品全集的视图状态与可见页重算
// 红线: 单写者（UI 事件循环）,无并发变更来源
// ==========================================

pub mod pagination;
pub mod store;

// 重导出核心类型
pub use store::{CatalogStore, FetchToken, PageView};
