// ==========================================
// 阀门产品目录系统 - 核心库
// ==========================================
// 技术栈: Rust + reqwest + csv
// 系统定位: 电子表格目录接入与查询（单次拉取,内存视图）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 接入层 - 外部表格数据
pub mod ingest;

// 目录视图层 - 过滤/排序/分页
pub mod catalog;

// 外联层 - HTTP 数据源与收单
pub mod gateway;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 组件装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Availability, Connection, Material, SortOrder};

// 领域实体
pub use domain::{FetchBatch, MappingOutcome, Product, RawRow};

// 接入管道
pub use ingest::{
    FieldResolver, FieldSynonyms, GvizParser, MapperPolicy, ProductMapper, RowExtractor,
    TagRuleSet,
};

// 目录视图
pub use catalog::{CatalogStore, FetchToken, PageView};

// 外联
pub use gateway::{ContactForm, ContactGateway, HttpSheetSource, SheetFormat, SheetSource};

// 配置
pub use config::CatalogConfig;

// API
pub use api::{ApiError, CatalogApi, ContactApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "阀门产品目录系统";
