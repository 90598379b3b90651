// ==========================================
// 阀门产品目录系统 - 产品映射器实现
// ==========================================
// 职责: RawRow 序列 → 去重后的 Product 序列 + 批次统计
// 红线: 行级问题按宽容策略处理（跳过/降级为 0）,不整批失败
// ==========================================

use crate::domain::product::{FetchBatch, MappingOutcome, Product, RawRow};
use crate::domain::types::{Availability, Connection};
use crate::ingest::field_resolver::{FieldResolver, FieldSynonyms};
use crate::ingest::tag_rules::TagRuleSet;
use chrono::Utc;
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

// ==========================================
// MapperPolicy - 映射策略
// ==========================================
// 用途: 品牌兜底/库存口径等可配置项
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MapperPolicy {
    pub fallback_brand: String,  // 品牌缺失时的兜底值
    pub default_stock: i64,      // 无库存列时的默认库存
    pub in_stock_threshold: i64, // 有货阈值（严格大于）
}

impl Default for MapperPolicy {
    fn default() -> Self {
        Self {
            fallback_brand: "ZOLOTO".to_string(),
            default_stock: 100,
            in_stock_threshold: 20,
        }
    }
}

// ==========================================
// ProductMapper - 产品映射器
// ==========================================
pub struct ProductMapper {
    fields: FieldSynonyms,
    tags: TagRuleSet,
    policy: MapperPolicy,
}

impl ProductMapper {
    pub fn new(fields: FieldSynonyms, tags: TagRuleSet, policy: MapperPolicy) -> Self {
        Self { fields, tags, policy }
    }

    /// 映射原始行序列为产品序列
    ///
    /// # 映射流程（5个阶段）
    /// 1. 标识字段解析（货号/品名缺失 → 跳过该行）
    /// 2. id 组装 + 首次出现去重
    /// 3. 可选商务字段解析（数值不可解析 → 0）
    /// 4. 名称/备注派生（材质/连接方式/特性/认证）
    /// 5. 库存与库存状态派生
    pub fn map(&self, rows: &[RawRow]) -> MappingOutcome {
        let resolver = FieldResolver;
        let mut products = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut skipped_identity = 0usize;
        let mut duplicates = 0usize;

        for (idx, row) in rows.iter().enumerate() {
            // 源文件行号（表头为第 1 行）
            let row_number = idx + 2;

            // ===== 阶段 1: 标识字段 =====
            let art_no = resolver.resolve_non_empty(row, &self.fields.art_no);
            let name = resolver.resolve_non_empty(row, &self.fields.name);
            let (art_no, name) = match (art_no, name) {
                (Some(a), Some(n)) => (a.to_string(), n.to_string()),
                _ => {
                    skipped_identity += 1;
                    debug!(row = row_number, "缺失货号或品名,跳过该行");
                    continue;
                }
            };

            // ===== 阶段 2: id 组装 + 去重（首次出现生效）=====
            let size_inches = resolver
                .resolve_non_empty(row, &self.fields.size_inches)
                .map(|s| s.to_string());
            let size_mm = resolver
                .resolve_non_empty(row, &self.fields.size_mm)
                .map(parse_number);

            let id = compose_id(&art_no, size_inches.as_deref(), size_mm);
            if !seen_ids.insert(id.clone()) {
                duplicates += 1;
                debug!(row = row_number, id = %id, "重复 id,丢弃后续行");
                continue;
            }

            // ===== 阶段 3: 可选商务字段 =====
            let company_name = resolver
                .resolve_non_empty(row, &self.fields.company)
                .unwrap_or(self.policy.fallback_brand.as_str())
                .to_string();
            let price = resolver
                .resolve_non_empty(row, &self.fields.price)
                .map(parse_number);
            let hsn_code = resolver
                .resolve_non_empty(row, &self.fields.hsn_code)
                .map(|s| s.to_string());
            let image_url = resolver
                .resolve_non_empty(row, &self.fields.image_url)
                .map(|s| s.to_string());
            let document_link = resolver
                .resolve_non_empty(row, &self.fields.document_link)
                .map(|s| s.to_string());

            // ===== 阶段 4: 名称/备注派生 =====
            let name_lower = name.to_lowercase();
            let material = self.tags.derive_material(&name_lower);

            // 连接方式: 源列优先,否则名称关键字派生
            let connection = resolver
                .resolve_non_empty(row, &self.fields.connection)
                .and_then(Connection::from_source_text)
                .unwrap_or_else(|| self.tags.derive_connection(&name_lower));

            // 特性探针扫描品名 + 备注列
            let feature_text = match resolver.resolve_non_empty(row, &self.fields.notes) {
                Some(notes) => format!("{} {}", name, notes),
                None => name.clone(),
            };
            let key_features = self.tags.derive_features(&feature_text);
            let certification = self.tags.filter_certifications(&key_features);

            // ===== 阶段 5: 库存与库存状态 =====
            let stock = resolver
                .resolve_non_empty(row, &self.fields.stock)
                .map(|v| parse_number(v) as i64)
                .unwrap_or(self.policy.default_stock);
            let availability = Availability::from_stock(stock, self.policy.in_stock_threshold);

            products.push(Product {
                id,
                art_no,
                name,
                company_name,
                material,
                connection,
                hsn_code,
                size_inches,
                size_mm,
                price,
                image_url,
                document_link,
                key_features,
                certification,
                stock,
                availability,
                raw: row.clone(),
            });
        }

        let batch = FetchBatch {
            batch_id: Uuid::new_v4().to_string(),
            fetched_at: Utc::now(),
            total_rows: rows.len(),
            mapped: products.len(),
            skipped_identity,
            duplicates,
        };

        MappingOutcome { products, batch }
    }
}

/// 组装去重键
///
/// # 规则
/// - 基础为货号;存在尺寸字段时附加尺寸段以区分同货号尺寸变体
/// - 英寸段去除 '/' 与 '$' 字符
/// - 无尺寸列的表 → id 即货号
fn compose_id(art_no: &str, size_inches: Option<&str>, size_mm: Option<f64>) -> String {
    let mut id = art_no.to_string();

    if let Some(inches) = size_inches {
        let sanitized: String = inches.chars().filter(|c| *c != '/' && *c != '$').collect();
        if !sanitized.is_empty() {
            id.push('-');
            id.push_str(&sanitized);
        }
    }

    if let Some(mm) = size_mm {
        if mm > 0.0 {
            id.push('-');
            id.push_str(&format_mm(mm));
        }
    }

    id
}

fn format_mm(mm: f64) -> String {
    if mm.fract() == 0.0 {
        format!("{}", mm as i64)
    } else {
        mm.to_string()
    }
}

/// 宽容数值解析
///
/// # 规则
/// - 先剔除数字/小数点/负号以外的字符（货币符号、千分位等）
/// - 解析失败 → 0
pub fn parse_number(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Material;
    use crate::ingest::row_extractor::RowExtractor;

    fn mapper() -> ProductMapper {
        ProductMapper::new(
            FieldSynonyms::default(),
            TagRuleSet::default(),
            MapperPolicy::default(),
        )
    }

    fn rows_from_csv(csv_text: &str) -> Vec<RawRow> {
        RowExtractor.extract(csv_text).unwrap()
    }

    #[test]
    fn test_map_basic_catalog() {
        let rows = rows_from_csv(
            "Art. No.,Product,Company\n\
             100,Globe Valve Bronze,Acme\n\
             100,Duplicate Art,Acme\n\
             101,Gate Valve Flanged,Acme\n",
        );

        let outcome = mapper().map(&rows);
        let products = &outcome.products;

        assert_eq!(products.len(), 2);

        assert_eq!(products[0].id, "100");
        assert_eq!(products[0].name, "Globe Valve Bronze");
        assert_eq!(products[0].material, Material::Bronze);
        assert_eq!(products[0].connection, Connection::Screwed);

        assert_eq!(products[1].id, "101");
        assert_eq!(products[1].material, Material::Unknown);
        assert_eq!(products[1].connection, Connection::Flanged);

        assert_eq!(outcome.batch.total_rows, 3);
        assert_eq!(outcome.batch.mapped, 2);
        assert_eq!(outcome.batch.duplicates, 1);
        assert_eq!(outcome.batch.skipped_identity, 0);
    }

    #[test]
    fn test_map_skips_rows_missing_identity() {
        let rows = rows_from_csv(
            "Art. No.,Product\n\
             100,Globe Valve\n\
             ,Nameless Art\n\
             101,\n",
        );

        let outcome = mapper().map(&rows);

        assert_eq!(outcome.products.len(), 1);
        assert_eq!(outcome.batch.skipped_identity, 2);
    }

    #[test]
    fn test_map_duplicate_first_wins() {
        let rows = rows_from_csv(
            "Art. No.,Product\n\
             200,First Occurrence\n\
             200,Second Occurrence\n",
        );

        let outcome = mapper().map(&rows);

        assert_eq!(outcome.products.len(), 1);
        assert_eq!(outcome.products[0].name, "First Occurrence");
    }

    #[test]
    fn test_map_id_includes_size_tokens() {
        let rows = rows_from_csv(
            "Art. No.,Product,Inches,mm\n\
             1001,Globe Valve Bronze,1/2,15\n\
             1001,Globe Valve Bronze,3/4,20\n",
        );

        let outcome = mapper().map(&rows);

        // 同货号不同尺寸 → 不同 id,不互相去重
        assert_eq!(outcome.products.len(), 2);
        assert_eq!(outcome.products[0].id, "1001-12-15");
        assert_eq!(outcome.products[1].id, "1001-34-20");
    }

    #[test]
    fn test_map_company_fallback_brand() {
        let rows = rows_from_csv("Art. No.,Product\n100,Globe Valve\n");

        let outcome = mapper().map(&rows);

        assert_eq!(outcome.products[0].company_name, "ZOLOTO");
    }

    #[test]
    fn test_map_numeric_leniency() {
        let rows = rows_from_csv(
            "Art. No.,Product,Price/Piece,Stock\n\
             100,Globe Valve,\"₹1,250.50\",n/a\n",
        );

        let outcome = mapper().map(&rows);
        let p = &outcome.products[0];

        // 货币符号/千分位剔除后解析;不可解析 → 0
        assert_eq!(p.price, Some(1250.50));
        assert_eq!(p.stock, 0);
        assert_eq!(p.availability, Availability::OutOfStock);
    }

    #[test]
    fn test_map_stock_default_when_column_absent() {
        let rows = rows_from_csv("Art. No.,Product\n100,Globe Valve\n");

        let outcome = mapper().map(&rows);
        let p = &outcome.products[0];

        assert_eq!(p.stock, 100);
        assert_eq!(p.availability, Availability::InStock);
    }

    #[test]
    fn test_map_connection_column_overrides_name() {
        let rows = rows_from_csv(
            "Art. No.,Product,Connection\n\
             100,Gate Valve Flanged,Wafer Type\n",
        );

        let outcome = mapper().map(&rows);

        assert_eq!(outcome.products[0].connection, Connection::WaferType);
    }

    #[test]
    fn test_map_features_from_name_and_notes() {
        let rows = rows_from_csv(
            "Art. No.,Product,Notes\n\
             100,Gate Valve PN 16,Flanged Ends to IS 1538 IBR\n",
        );

        let outcome = mapper().map(&rows);
        let p = &outcome.products[0];

        assert!(p.key_features.contains(&"Flanged Ends to IS 1538".to_string()));
        assert!(p.key_features.contains(&"I.B.R. Certified".to_string()));
        assert!(p.key_features.contains(&"Pressure Nominal: PN 16".to_string()));

        // 认证为特性的法规子集
        assert!(p.certification.contains(&"Flanged Ends to IS 1538".to_string()));
        assert!(p.certification.contains(&"I.B.R. Certified".to_string()));
        assert!(!p.certification.contains(&"Pressure Nominal: PN 16".to_string()));
    }

    #[test]
    fn test_map_idempotent() {
        let rows = rows_from_csv(
            "Art. No.,Product,Company,Price\n\
             100,Globe Valve Bronze,Acme,120\n\
             101,Gate Valve CI,Acme,340\n",
        );

        let m = mapper();
        let first = m.map(&rows).products;
        let second = m.map(&rows).products;

        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1250"), 1250.0);
        assert_eq!(parse_number("₹ 1,250.50"), 1250.50);
        assert_eq!(parse_number("-12.5"), -12.5);
        assert_eq!(parse_number("n/a"), 0.0);
        assert_eq!(parse_number(""), 0.0);
    }

    #[test]
    fn test_compose_id() {
        assert_eq!(compose_id("100", None, None), "100");
        assert_eq!(compose_id("1001", Some("1/2"), Some(15.0)), "1001-12-15");
        assert_eq!(compose_id("1001", Some("2"), Some(0.0)), "1001-2");
        // 英寸段全被剔除时不留空段
        assert_eq!(compose_id("1001", Some("/"), None), "1001");
    }
}
