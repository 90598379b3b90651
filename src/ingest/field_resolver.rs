// ==========================================
// 阀门产品目录系统 - 字段解析器实现
// ==========================================
// 职责: 逻辑字段 → 源列同义词解析（容忍表头改名/变体）
// 红线: 平局裁决 = 行内列序首个命中,该行为对外有语义,不得改动
// ==========================================

use crate::domain::product::RawRow;
use serde::{Deserialize, Serialize};

// ==========================================
// FieldResolver - 字段解析器
// ==========================================
pub struct FieldResolver;

impl FieldResolver {
    /// 解析逻辑字段的生效值
    ///
    /// # 规则
    /// - 按行内列序扫描,列标签大小写不敏感地包含任一候选片段即命中
    /// - 两列同时可命中时,列序靠前者生效（决定性平局裁决）
    /// - 无命中 → None
    pub fn resolve<'a>(&self, row: &'a RawRow, candidates: &[String]) -> Option<&'a str> {
        for (label, value) in row.iter() {
            let label_lower = label.to_lowercase();
            if candidates
                .iter()
                .any(|c| label_lower.contains(&c.to_lowercase()))
            {
                return Some(value);
            }
        }
        None
    }

    /// 解析并过滤空白（命中但值为空白 → None）
    pub fn resolve_non_empty<'a>(&self, row: &'a RawRow, candidates: &[String]) -> Option<&'a str> {
        self.resolve(row, candidates).and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        })
    }
}

// ==========================================
// FieldSynonyms - 逻辑字段同义词表
// ==========================================
// 用途: 每个逻辑字段的可接受表头片段,随配置外置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSynonyms {
    pub art_no: Vec<String>,
    pub name: Vec<String>,
    pub company: Vec<String>,
    pub size_inches: Vec<String>,
    pub size_mm: Vec<String>,
    pub price: Vec<String>,
    pub hsn_code: Vec<String>,
    pub image_url: Vec<String>,
    pub stock: Vec<String>,
    pub notes: Vec<String>,
    pub connection: Vec<String>,
    pub document_link: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for FieldSynonyms {
    fn default() -> Self {
        Self {
            art_no: strings(&["Art. No.", "ArtNo", "Article"]),
            name: strings(&["Product", "Name", "Valve Name"]),
            company: strings(&["Company", "Brand", "Manufacturer Name"]),
            size_inches: strings(&["Inches", "Size Inches"]),
            size_mm: strings(&["mm", "Size MM"]),
            price: strings(&["Price/Piece", "Price"]),
            hsn_code: strings(&["HSN Code", "HSN"]),
            image_url: strings(&["Image URL", "Image", "img"]),
            stock: strings(&["Stock", "Qty", "Quantity"]),
            notes: strings(&["Notes", "Remarks", "Flange"]),
            connection: strings(&["Connection", "End Connection"]),
            document_link: strings(&["Document", "Datasheet", "Catalogue Link"]),
        }
    }
}
