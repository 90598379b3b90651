// ==========================================
// 阀门产品目录系统 - 目录配置
// ==========================================
// 职责: 配置加载与默认值管理
// 存储: JSON 文件（显式路径或平台配置目录）,缺失时用内置默认
// 红线: 同义词表/关键字表随配置外置,目录口径调整不改代码
// ==========================================

use crate::gateway::contact::ContactEntryIds;
use crate::gateway::sheet::SheetFormat;
use crate::ingest::field_resolver::FieldSynonyms;
use crate::ingest::product_mapper::MapperPolicy;
use crate::ingest::tag_rules::TagRuleSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

// ==========================================
// 配置错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件解析失败 ({path}): {message}")]
    ParseError { path: String, message: String },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// SheetConfig - 表格数据源配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub sheet_id: String,   // 已发布表格 ID
    pub gid: String,        // 工作表 gid
    pub format: SheetFormat, // 导出格式
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            sheet_id: "1djgZYlSiPu2A1Qx8hDs8XUEWJG6Qr4AaMFo55vlvH-4".to_string(),
            gid: "0".to_string(),
            format: SheetFormat::Csv,
        }
    }
}

// ==========================================
// ViewConfig - 视图配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub page_size: usize, // 固定页大小
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { page_size: 12 }
    }
}

// ==========================================
// ContactConfig - 询盘收单配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,         // 收单端点
    pub entries: ContactEntryIds, // 端点字段标识
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://docs.google.com/forms/d/e/1FAIpQLSeSWa8EMf5zl7vGddTb-mt7T1gssCJ6r9Qah7t0ZtbFvYIuhA/formResponse"
                .to_string(),
            entries: ContactEntryIds::default(),
        }
    }
}

// ==========================================
// CatalogConfig - 配置全集
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub sheet: SheetConfig,
    pub view: ViewConfig,
    pub mapping: MapperPolicy,
    pub fields: FieldSynonyms,
    pub tags: TagRuleSet,
    pub contact: ContactConfig,
}

impl CatalogConfig {
    /// 从 JSON 文件加载
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 加载配置;文件缺失或损坏时回退内置默认（告警不中断）
    pub fn load_or_default(explicit_path: Option<&Path>) -> Self {
        let path = match explicit_path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_config_path(),
        };

        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "配置加载失败,使用内置默认");
                Self::default()
            }
        }
    }

    /// 平台配置目录下的默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("valve-catalog").join("config.json"))
    }
}
