// ==========================================
// 阀门产品目录系统 - 主入口
// ==========================================
// 职责: 一次完整的拉取-映射-查询演练并输出摘要
// ==========================================

use std::path::PathBuf;

use valve_catalog::app::AppState;
use valve_catalog::config::CatalogConfig;
use valve_catalog::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", valve_catalog::APP_NAME);
    tracing::info!("系统版本: {}", valve_catalog::VERSION);
    tracing::info!("==================================================");

    // 配置: 首个命令行参数可指定配置文件路径
    let config_path: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    let config = CatalogConfig::load_or_default(config_path.as_deref());
    tracing::info!(
        sheet_id = %config.sheet.sheet_id,
        gid = %config.sheet.gid,
        format = ?config.sheet.format,
        "数据源配置已加载"
    );

    // 装配应用状态
    let state = AppState::new(config);

    // 拉取目录
    match state.catalog_api.refresh().await {
        Ok(Some(batch)) => {
            tracing::info!(
                total_rows = batch.total_rows,
                mapped = batch.mapped,
                skipped = batch.skipped_identity,
                duplicates = batch.duplicates,
                "目录已就绪"
            );
        }
        Ok(None) => {
            tracing::warn!("拉取结果被更新的拉取取代");
        }
        Err(e) => {
            tracing::error!("{}", e.user_message());
            return Err(e.into());
        }
    }

    // 输出首页摘要
    let view = state.catalog_api.visible_page()?;
    tracing::info!(
        total = view.total_matches,
        pages = view.total_pages,
        "首页产品:"
    );
    for product in &view.items {
        tracing::info!(
            id = %product.id,
            art_no = %product.art_no,
            material = %product.material,
            connection = %product.connection,
            availability = %product.availability,
            "{}",
            product.name
        );
    }

    let companies = state.catalog_api.unique_companies()?;
    tracing::info!(companies = companies.len(), "品牌候选: {}", companies.join(", "));

    Ok(())
}
