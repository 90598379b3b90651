// ==========================================
// 阀门产品目录系统 - 接入层
// ==========================================
// 职责: 外部表格数据 → 内部产品数据
// 管道: 行提取 → 字段解析 → 标签派生 → 产品映射
// ==========================================

// 模块声明
pub mod error;
pub mod field_resolver;
pub mod gviz;
pub mod product_mapper;
pub mod row_extractor;
pub mod tag_rules;

// 重导出核心类型
pub use error::{IngestError, IngestResult};
pub use field_resolver::{FieldResolver, FieldSynonyms};
pub use gviz::GvizParser;
pub use product_mapper::{MapperPolicy, ProductMapper};
pub use row_extractor::RowExtractor;
pub use tag_rules::{FeatureProbe, KeywordRule, TagRuleSet};
