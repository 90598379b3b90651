// ==========================================
// 阀门产品目录系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{CatalogApi, ContactApi};
use crate::catalog::store::CatalogStore;
use crate::config::CatalogConfig;
use crate::gateway::contact::ContactGateway;
use crate::gateway::sheet::HttpSheetSource;
use crate::ingest::product_mapper::ProductMapper;

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 生效配置
    pub config: CatalogConfig,

    /// 目录视图状态（与展示层共享）
    pub store: Arc<Mutex<CatalogStore>>,

    /// 目录API
    pub catalog_api: Arc<CatalogApi>,

    /// 询盘API
    pub contact_api: Arc<ContactApi>,
}

impl AppState {
    /// 按配置装配全部组件
    pub fn new(config: CatalogConfig) -> Self {
        let client = reqwest::Client::new();

        let store = Arc::new(Mutex::new(CatalogStore::new(config.view.page_size)));

        let source = Arc::new(HttpSheetSource::new(
            client.clone(),
            &config.sheet.sheet_id,
            &config.sheet.gid,
            config.sheet.format,
        ));

        let mapper = ProductMapper::new(
            config.fields.clone(),
            config.tags.clone(),
            config.mapping.clone(),
        );

        let catalog_api = Arc::new(CatalogApi::new(store.clone(), source, mapper));

        let contact_api = Arc::new(ContactApi::new(ContactGateway::new(
            client,
            config.contact.endpoint.clone(),
            config.contact.entries.clone(),
        )));

        Self {
            config,
            store,
            catalog_api,
            contact_api,
        }
    }
}
