// ==========================================
// 阀门产品目录系统 - 领域类型定义
// ==========================================
// 依据: 产品目录字段口径（材质/连接方式/库存状态）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 材质 (Material)
// ==========================================
// 红线: 派生顺序敏感,关键字表首个命中生效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Unknown,        // 未识别
    Bronze,         // 青铜
    CastIron,       // 铸铁
    CastSteel,      // 铸钢
    ForgedSteel,    // 锻钢
    ForgedBrass,    // 锻黄铜
    StainlessSteel, // 不锈钢
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Unknown => write!(f, "Unknown"),
            Material::Bronze => write!(f, "Bronze"),
            Material::CastIron => write!(f, "Cast Iron"),
            Material::CastSteel => write!(f, "Cast Steel"),
            Material::ForgedSteel => write!(f, "Forged Steel"),
            Material::ForgedBrass => write!(f, "Forged Brass"),
            Material::StainlessSteel => write!(f, "Stainless Steel"),
        }
    }
}

// ==========================================
// 连接方式 (Connection)
// ==========================================
// 默认 Screwed,名称关键字或源列可覆盖
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connection {
    Screwed,   // 螺纹连接（默认）
    Flanged,   // 法兰连接
    WaferType, // 对夹连接
}

impl Connection {
    /// 从源列文本解析连接方式
    ///
    /// # 规则
    /// - 大小写不敏感的子串匹配
    /// - 未命中 → None（调用方回退到名称派生）
    pub fn from_source_text(value: &str) -> Option<Connection> {
        let lower = value.trim().to_lowercase();
        if lower.is_empty() {
            return None;
        }
        if lower.contains("wafer") {
            Some(Connection::WaferType)
        } else if lower.contains("flange") {
            Some(Connection::Flanged)
        } else if lower.contains("screw") || lower.contains("thread") {
            Some(Connection::Screwed)
        } else {
            None
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connection::Screwed => write!(f, "Screwed"),
            Connection::Flanged => write!(f, "Flanged"),
            Connection::WaferType => write!(f, "Wafer Type"),
        }
    }
}

// ==========================================
// 库存状态 (Availability)
// ==========================================
// 依据: 三级阈值口径（>20 / >0 / 0）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    InStock,    // 有货
    LowStock,   // 低库存
    OutOfStock, // 无货
}

impl Availability {
    /// 按库存数量派生库存状态
    ///
    /// # 参数
    /// - stock: 库存数量
    /// - in_stock_threshold: 有货阈值（严格大于）
    pub fn from_stock(stock: i64, in_stock_threshold: i64) -> Availability {
        if stock > in_stock_threshold {
            Availability::InStock
        } else if stock > 0 {
            Availability::LowStock
        } else {
            Availability::OutOfStock
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::InStock => write!(f, "In Stock"),
            Availability::LowStock => write!(f, "Low Stock"),
            Availability::OutOfStock => write!(f, "Out of Stock"),
        }
    }
}

// ==========================================
// 排序方式 (Sort Order)
// ==========================================
// 序列化格式: kebab-case (与前端下拉选项一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    NameAsc,   // 名称 A-Z（默认）
    ArtnoAsc,  // 货号升序
    ArtnoDesc, // 货号降序
    PriceAsc,  // 价格升序
    PriceDesc, // 价格降序
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::NameAsc
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::NameAsc => write!(f, "name-asc"),
            SortOrder::ArtnoAsc => write!(f, "artno-asc"),
            SortOrder::ArtnoDesc => write!(f, "artno-desc"),
            SortOrder::PriceAsc => write!(f, "price-asc"),
            SortOrder::PriceDesc => write!(f, "price-desc"),
        }
    }
}
