// ==========================================
// 接入管道集成测试
// ==========================================
// 测试目标: CSV 文本 → 行提取 → 字段解析 → 产品映射 全链路
// ==========================================

mod test_helpers;

use std::io::Write;

use test_helpers::{default_mapper, products_from_csv, rows_from_csv, sample_catalog_csv};
use valve_catalog::domain::types::{Availability, Connection, Material};
use valve_catalog::logging;

#[test]
fn test_spec_scenario_dedup_and_derivation() {
    logging::init_test();

    let products = products_from_csv(sample_catalog_csv());

    // 三行输入,重复货号丢弃 → 恰好 2 个产品
    assert_eq!(products.len(), 2);

    let first = &products[0];
    assert_eq!(first.id, "100");
    assert_eq!(first.art_no, "100");
    assert_eq!(first.name, "Globe Valve Bronze");
    assert_eq!(first.material, Material::Bronze);
    assert_eq!(first.connection, Connection::Screwed);
    assert_eq!(first.company_name, "Acme");

    let second = &products[1];
    assert_eq!(second.id, "101");
    assert_eq!(second.material, Material::Unknown);
    assert_eq!(second.connection, Connection::Flanged);
}

#[test]
fn test_extractor_row_count_equals_data_lines() {
    let csv_text = "Art. No.,Product\n1,A\n2,B\n3,C\n4,D\n";
    let rows = rows_from_csv(csv_text);

    assert_eq!(rows.len(), 4);
    for row in &rows {
        let labels: Vec<&str> = row.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Art. No.", "Product"]);
    }
}

#[test]
fn test_mapper_output_never_exceeds_input() {
    let csv_text = "Art. No.,Product\n\
                    1,Valve A\n\
                    ,Missing Art\n\
                    2,\n\
                    1,Duplicate\n\
                    3,Valve C\n";

    let rows = rows_from_csv(csv_text);
    let outcome = default_mapper().map(&rows);

    assert!(outcome.products.len() <= rows.len());
    assert_eq!(outcome.products.len(), 2);
    assert_eq!(outcome.batch.total_rows, 5);
    assert_eq!(outcome.batch.skipped_identity, 2);
    assert_eq!(outcome.batch.duplicates, 1);
}

#[test]
fn test_mapper_idempotent_over_same_rows() {
    let rows = rows_from_csv(sample_catalog_csv());
    let mapper = default_mapper();

    let first = mapper.map(&rows).products;
    let second = mapper.map(&rows).products;

    assert_eq!(first, second);
}

#[test]
fn test_fixture_price_list_full_pipeline() {
    logging::init_test();

    let csv_text = std::fs::read_to_string("tests/fixtures/sample_price_list.csv")
        .expect("fixture should exist");
    let rows = rows_from_csv(&csv_text);
    let outcome = default_mapper().map(&rows);
    let products = &outcome.products;

    // 固定样例: 10 数据行,1 行缺货号,1 行重复 → 8 产品
    assert_eq!(outcome.batch.total_rows, 10);
    assert_eq!(outcome.batch.skipped_identity, 1);
    assert_eq!(outcome.batch.duplicates, 1);
    assert_eq!(products.len(), 8);

    // 尺寸变体: 同货号不同尺寸保留为不同产品
    let variants: Vec<&str> = products
        .iter()
        .filter(|p| p.art_no == "1001")
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(variants, vec!["1001-12-15", "1001-34-20"]);

    // 带引号逗号的品名不错位后续列
    let butterfly = products
        .iter()
        .find(|p| p.art_no == "2100")
        .expect("butterfly valve present");
    assert_eq!(butterfly.name, "Butterfly Valve, Wafer Type CI PN 16");
    assert_eq!(butterfly.company_name, "Sant");
    assert_eq!(butterfly.connection, Connection::WaferType);
    assert_eq!(butterfly.material, Material::CastIron);
    assert!(butterfly
        .key_features
        .contains(&"Pressure Nominal: PN 16".to_string()));

    // 备注列的法规词条进入特性与认证
    let gate = products
        .iter()
        .find(|p| p.art_no == "1510")
        .expect("gate valve present");
    assert!(gate
        .key_features
        .contains(&"Flanged Ends to IS 1538".to_string()));
    assert!(gate.certification.contains(&"I.B.R. Certified".to_string()));

    // 库存列解析与三级状态
    let low = products
        .iter()
        .find(|p| p.art_no == "3300")
        .expect("low stock product present");
    assert_eq!(low.stock, 5);
    assert_eq!(low.availability, Availability::LowStock);

    let out = products
        .iter()
        .find(|p| p.art_no == "3301")
        .expect("out of stock product present");
    assert_eq!(out.stock, 0);
    assert_eq!(out.availability, Availability::OutOfStock);
}

#[test]
fn test_pipeline_from_tempfile_roundtrip() {
    // 落盘再读取,验证对 BOM 外的常规文件内容无额外假设
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Art. No.,Product,Price\n9001,Check Valve Forged Steel,760\n"
    )
    .unwrap();

    let csv_text = std::fs::read_to_string(file.path()).unwrap();
    let products = products_from_csv(&csv_text);

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].material, Material::ForgedSteel);
    assert_eq!(products[0].price, Some(760.0));
}
