// ==========================================
// 阀门产品目录系统 - 产品领域模型
// ==========================================
// 依据: 价目表电子表格字段口径（货号/品名/品牌/尺寸/价格/HSN）
// ==========================================

use crate::domain::types::{Availability, Connection, Material};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RawRow - 原始行记录
// ==========================================
// 用途: 行提取器输出,字段解析器输入
// 红线: 列顺序必须保持与源表头一致（同义词解析按列序取首个命中）
// 生命周期: 仅在一次接入流程内,映射为 Product 后仅作调试留存
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    // (列标签, 单元格值) 按源列顺序排列
    columns: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    /// 追加一列（保持插入顺序）
    pub fn push(&mut self, label: String, value: String) {
        self.columns.push((label, value));
    }

    /// 按列序遍历 (标签, 值)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// 精确标签查找（调试/展示用,业务解析走 FieldResolver）
    pub fn get(&self, label: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// 整行是否全为空白单元格
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|(_, v)| v.trim().is_empty())
    }
}

impl FromIterator<(String, String)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

// ==========================================
// Product - 产品主数据
// ==========================================
// 用途: 接入层写入,目录视图层只读
// 红线: 一次接入周期内不可变,重新拉取时整体替换
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    // ===== 主键 =====
    pub id: String, // 去重键（货号,含尺寸时附加尺寸段）

    // ===== 必填标识字段 =====
    pub art_no: String, // 货号（目录编号）
    pub name: String,   // 展示名称

    // ===== 品牌 =====
    pub company_name: String, // 品牌/制造商（源缺失时取配置兜底品牌）

    // ===== 名称派生字段 =====
    pub material: Material,     // 材质（关键字表首个命中）
    pub connection: Connection, // 连接方式（源列优先,否则名称关键字）

    // ===== 商务字段（按数据源可选）=====
    pub hsn_code: Option<String>,      // HSN 税则号
    pub size_inches: Option<String>,   // 尺寸（英寸,原文）
    pub size_mm: Option<f64>,          // 尺寸（毫米）
    pub price: Option<f64>,            // 单价
    pub image_url: Option<String>,     // 图片链接
    pub document_link: Option<String>, // 资料文档链接

    // ===== 特性与认证 =====
    pub key_features: Vec<String>,   // 特性标签（词表命中,保持命中顺序）
    pub certification: Vec<String>,  // 认证子集（含法规标记的特性）

    // ===== 库存 =====
    pub stock: i64,                 // 库存数量
    pub availability: Availability, // 库存状态（三级阈值派生）

    // ===== 调试留存 =====
    pub raw: RawRow, // 源行快照,业务逻辑不得读取
}

// ==========================================
// FetchBatch - 接入批次
// ==========================================
// 用途: 记录一次拉取-映射周期的元信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchBatch {
    pub batch_id: String,             // 批次 ID（UUID）
    pub fetched_at: DateTime<Utc>,    // 拉取时间
    pub total_rows: usize,            // 源数据行数
    pub mapped: usize,                // 成功映射产品数
    pub skipped_identity: usize,      // 缺失货号/品名被跳过的行数
    pub duplicates: usize,            // 去重丢弃行数
}

// ==========================================
// MappingOutcome - 映射结果
// ==========================================
// 用途: 产品映射器返回值（产品列表 + 批次统计）
#[derive(Debug, Clone)]
pub struct MappingOutcome {
    pub products: Vec<Product>,
    pub batch: FetchBatch,
}
