// ==========================================
// 阀门产品目录系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含接入/视图逻辑
// ==========================================

pub mod product;
pub mod types;

// 重导出核心类型
pub use product::{FetchBatch, MappingOutcome, Product, RawRow};
pub use types::{Availability, Connection, Material, SortOrder};
