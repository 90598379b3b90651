// ==========================================
// 测试辅助工具
// ==========================================
// 用途: 构造接入管道组件与样例数据
// ==========================================

#![allow(dead_code)]

use valve_catalog::domain::product::{Product, RawRow};
use valve_catalog::ingest::{FieldSynonyms, MapperPolicy, ProductMapper, RowExtractor, TagRuleSet};

/// 默认口径的产品映射器
pub fn default_mapper() -> ProductMapper {
    ProductMapper::new(
        FieldSynonyms::default(),
        TagRuleSet::default(),
        MapperPolicy::default(),
    )
}

/// CSV 文本 → 原始行
pub fn rows_from_csv(csv_text: &str) -> Vec<RawRow> {
    RowExtractor
        .extract(csv_text)
        .expect("CSV fixture should parse")
}

/// CSV 文本 → 产品列表（默认口径全管道）
pub fn products_from_csv(csv_text: &str) -> Vec<Product> {
    default_mapper().map(&rows_from_csv(csv_text)).products
}

/// 三产品样例目录（与规格场景一致）
pub fn sample_catalog_csv() -> &'static str {
    "Art. No.,Product,Company\n\
     100,Globe Valve Bronze,Acme\n\
     100,Duplicate Art,Acme\n\
     101,Gate Valve Flanged,Acme\n"
}
