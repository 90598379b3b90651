// ==========================================
// 阀门产品目录系统 - 名称标签规则
// ==========================================
// 职责: 材质/连接方式/特性/认证的关键字派生
// 红线: 规则表有序,首个命中生效;表随配置外置,目录口径调整不改代码
// ==========================================

use crate::domain::types::{Connection, Material};
use serde::{Deserialize, Serialize};

// ==========================================
// KeywordRule - 有序关键字规则
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule<T> {
    pub keywords: Vec<String>, // 任一关键字命中即生效（小写子串）
    pub tag: T,
}

// ==========================================
// FeatureProbe - 特性词表探针
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureProbe {
    pub probe: String, // 小写子串探针
    pub label: String, // 命中时追加的特性标签
}

// ==========================================
// TagRuleSet - 标签规则全集
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagRuleSet {
    pub material_rules: Vec<KeywordRule<Material>>,
    pub connection_rules: Vec<KeywordRule<Connection>>,
    pub feature_probes: Vec<FeatureProbe>,
    pub pressure_token: String,              // PN 压力等级前缀
    pub certification_markers: Vec<String>,  // 认证标记（子串,大小写敏感）
}

impl Default for TagRuleSet {
    fn default() -> Self {
        fn kw<T>(keywords: &[&str], tag: T) -> KeywordRule<T> {
            KeywordRule {
                keywords: keywords.iter().map(|s| s.to_string()).collect(),
                tag,
            }
        }
        fn probe(probe: &str, label: &str) -> FeatureProbe {
            FeatureProbe {
                probe: probe.to_string(),
                label: label.to_string(),
            }
        }

        Self {
            material_rules: vec![
                kw(&["bronze"], Material::Bronze),
                kw(&["cast iron", "ci"], Material::CastIron),
                kw(&["cast steel", "cs"], Material::CastSteel),
                kw(&["forged steel"], Material::ForgedSteel),
                kw(&["forged brass", "brass"], Material::ForgedBrass),
                kw(&["stainless steel", "ss"], Material::StainlessSteel),
            ],
            connection_rules: vec![
                kw(&["flanged"], Connection::Flanged),
                kw(&["wafer type"], Connection::WaferType),
            ],
            feature_probes: vec![
                probe("bs 10 table 'd'", "Flanged Ends to BS 10 Table 'D'"),
                probe("bs 10 table 'f'", "Flanged Ends to BS 10 Table 'F'"),
                probe("is 778", "Flanged Ends to IS 778"),
                probe("is 1538", "Flanged Ends to IS 1538"),
                probe("ibr", "I.B.R. Certified"),
            ],
            pressure_token: "pn".to_string(),
            certification_markers: vec![
                "Certified".to_string(),
                "IS".to_string(),
                "BS".to_string(),
            ],
        }
    }
}

impl TagRuleSet {
    /// 派生材质（首个命中生效,无命中 → Unknown）
    pub fn derive_material(&self, name_lower: &str) -> Material {
        for rule in &self.material_rules {
            if rule.keywords.iter().any(|k| name_lower.contains(k.as_str())) {
                return rule.tag;
            }
        }
        Material::Unknown
    }

    /// 派生连接方式（首个命中生效,无命中 → Screwed）
    pub fn derive_connection(&self, name_lower: &str) -> Connection {
        for rule in &self.connection_rules {
            if rule.keywords.iter().any(|k| name_lower.contains(k.as_str())) {
                return rule.tag;
            }
        }
        Connection::Screwed
    }

    /// 派生特性标签（词表命中顺序 + PN 压力等级提取）
    pub fn derive_features(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut features = Vec::new();

        for p in &self.feature_probes {
            if lower.contains(p.probe.as_str()) {
                features.push(p.label.clone());
            }
        }

        // "pn" 后接空格才视为压力等级写法
        let gate = format!("{} ", self.pressure_token);
        if lower.contains(gate.as_str()) {
            if let Some(rating) = extract_pressure_rating(&lower, &self.pressure_token) {
                features.push(format!("Pressure Nominal: PN {}", rating));
            }
        }

        features
    }

    /// 过滤认证子集（含任一法规标记的特性）
    pub fn filter_certifications(&self, features: &[String]) -> Vec<String> {
        features
            .iter()
            .filter(|f| {
                self.certification_markers
                    .iter()
                    .any(|m| f.contains(m.as_str()))
            })
            .cloned()
            .collect()
    }
}

/// 提取压力等级数字后缀
///
/// # 规则
/// - 定位 token（如 "pn"）,跳过其后空白,取数字段（允许一个小数点）
/// - 首个可提取的出现生效;无可提取数字 → None
fn extract_pressure_rating(lower: &str, token: &str) -> Option<String> {
    let mut remaining = lower;
    while let Some(pos) = remaining.find(token) {
        let after = &remaining[pos + token.len()..];
        let candidate = after.trim_start();

        let mut digits = String::new();
        let mut seen_dot = false;
        for ch in candidate.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
            } else if ch == '.' && !seen_dot && !digits.is_empty() {
                seen_dot = true;
                digits.push(ch);
            } else {
                break;
            }
        }

        let digits = digits.trim_end_matches('.');
        if !digits.is_empty() {
            return Some(digits.to_string());
        }

        remaining = after;
    }
    None
}
