// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成样例价目表 CSV 固件
// 输出: tests/fixtures/sample_price_list.csv
// ==========================================

use csv::Writer;
use std::error::Error;
use std::fs::File;

// CSV 表头（与已发布价目表列名一致）
const CSV_HEADER: &[&str] = &[
    "Art. No.",
    "Product",
    "Company",
    "Inches",
    "mm",
    "Price/Piece",
    "HSN Code",
    "Stock",
    "Notes",
];

// 样例行: 覆盖尺寸变体/重复行/缺失货号/引号内逗号/备注词条/库存梯度
const SAMPLE_ROWS: &[&[&str]] = &[
    &["1001", "Globe Valve Bronze Screwed", "ZOLOTO", "1/2", "15", "480", "8481", "100", ""],
    &["1001", "Globe Valve Bronze Screwed", "ZOLOTO", "3/4", "20", "610", "8481", "100", ""],
    &["1001", "Globe Valve Bronze Screwed", "ZOLOTO", "3/4", "20", "610", "8481", "100", ""],
    &[
        "1510",
        "Gate Valve CI Flanged",
        "ZOLOTO",
        "2",
        "50",
        "1450",
        "8481",
        "60",
        "Flanged Ends to IS 1538, IBR tested",
    ],
    &[
        "2100",
        "Butterfly Valve, Wafer Type CI PN 16",
        "Sant",
        "4",
        "100",
        "3200",
        "8481",
        "40",
        "",
    ],
    &["3300", "Ball Valve Forged Brass", "ZOLOTO", "1", "25", "350", "8481", "5", ""],
    &["3301", "Ball Valve SS", "Sant", "1", "25", "520", "8481", "0", ""],
    &["", "Nameless Row Without Art No", "ZOLOTO", "1", "25", "100", "", "10", ""],
    &[
        "4200",
        "Check Valve Cast Steel Flanged PN 25",
        "ZOLOTO",
        "3",
        "80",
        "2100",
        "8481",
        "75",
        "Flanged Ends to BS 10 Table 'D'",
    ],
    &["5000", "Pressure Reducing Valve", "Acme", "", "", "980", "8481", "30", ""],
];

fn main() -> Result<(), Box<dyn Error>> {
    let out_path = "tests/fixtures/sample_price_list.csv";
    let file = File::create(out_path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(CSV_HEADER)?;
    for row in SAMPLE_ROWS {
        writer.write_record(*row)?;
    }
    writer.flush()?;

    println!("已生成 {} ({} 行数据)", out_path, SAMPLE_ROWS.len());
    Ok(())
}
